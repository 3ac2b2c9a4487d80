//! Chat bubbles
//!
//! User messages are shown verbatim; assistant replies are rendered as
//! Markdown with raw HTML escaped.

use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

use crate::domain::models::{Message, Role};

/// Helper function to render Markdown to HTML
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Renders a single message in the conversation
#[component]
pub fn MessageItem(message: Message) -> Element {
    let time = message.timestamp.format("%H:%M").to_string();

    match message.role {
        Role::User => rsx! {
            li { class: "c-chat-message c-chat-message--user animate-fade-in",
                div { class: "c-chat-bubble c-chat-bubble--user",
                    div { class: "c-chat-bubble__content u-whitespace-pre-wrap", "{message.content}" }
                    span { class: "c-chat-bubble__timestamp", "{time}" }
                }
            }
        },
        Role::Assistant => {
            let html_content = render_markdown(&message.content);
            rsx! {
                li { class: "c-chat-message c-chat-message--assistant animate-fade-in",
                    BotAvatar {}
                    div { class: "c-chat-bubble c-chat-bubble--assistant",
                        div {
                            class: "c-chat-bubble__content c-prose c-prose--sm",
                            dangerous_inner_html: "{html_content}"
                        }
                        span { class: "c-chat-bubble__timestamp", "{time}" }
                    }
                }
            }
        }
        Role::SystemError => rsx! {
            li { class: "c-chat-message c-chat-message--error animate-fade-in",
                span { class: "c-chat-message__alert", "⚠️" }
                div { class: "c-chat-bubble c-chat-bubble--error",
                    div { class: "c-chat-bubble__content u-whitespace-pre-wrap", "{message.content}" }
                }
            }
        },
    }
}

#[component]
pub fn BotAvatar(#[props(default = 32)] size: u32) -> Element {
    rsx! {
        div {
            class: "c-bot-avatar",
            style: "width: {size}px; height: {size}px;",
            "aria-hidden": "true",
            div { class: "c-bot-avatar__glow" }
        }
    }
}

/// Three pulsing dots while a reply is pending
#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        li { class: "c-chat-message c-chat-message--assistant",
            BotAvatar {}
            div { class: "c-chat-bubble c-chat-bubble--assistant c-typing",
                span { class: "c-typing__dot" }
                span { class: "c-typing__dot" }
                span { class: "c-typing__dot" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_basic() {
        let html = render_markdown("**calm** and *steady*");
        assert!(html.contains("<strong>calm</strong>"));
        assert!(html.contains("<em>steady</em>"));
    }

    #[test]
    fn test_render_markdown_escapes_raw_html() {
        let html = render_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
