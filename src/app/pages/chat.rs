use dioxus::prelude::*;

use crate::app::components::{BotAvatar, MessageInput, MessageItem, TypingIndicator};
use crate::domain::models::chat::DEFAULT_THERAPY_TITLE;
use crate::domain::models::{Message, TherapyStats};
use crate::shared::hooks::use_store;
use crate::shared::services::therapy_api;

const SCROLL_TO_END: &str = r#"
    setTimeout(() => {
        const end = document.getElementById('messages-end');
        if (end) {
            end.scrollIntoView({ behavior: 'smooth' });
        }
    }, 50);
"#;

#[component]
pub fn ChatPage() -> Element {
    let mut store = use_store();
    let mut is_loading = use_signal(|| false);
    let mut connection_error = use_signal(|| None::<String>);
    let mut usage = use_signal(|| None::<TherapyStats>);

    let current = store.read().current().cloned();
    let current_id = current.as_ref().map(|c| c.id.clone());
    let message_count = current.as_ref().map(|c| c.messages.len()).unwrap_or(0);

    // Switching chats clears the banner
    use_effect(use_reactive!(|current_id| {
        tracing::debug!(chat_id = ?current_id, "Active chat changed");
        connection_error.set(None);
        usage.set(None);
    }));

    use_effect(use_reactive!(|message_count| {
        if message_count > 0 {
            let _ = document::eval(SCROLL_TO_END);
        }
    }));

    let handle_send = move |content: String| {
        if is_loading() {
            return;
        }
        connection_error.set(None);

        let existing = store.peek().current().map(|c| c.id.clone());
        let chat_id = match existing {
            Some(id) => id,
            None => store
                .write()
                .create_chat(Some(DEFAULT_THERAPY_TITLE.to_string()), true),
        };

        let session_id = if store.peek().settings.memory_enabled {
            store.peek().chat(&chat_id).and_then(|c| c.session_id.clone())
        } else {
            None
        };

        store.write().add_message(&chat_id, Message::user(content.clone()));
        is_loading.set(true);

        spawn(async move {
            match therapy_api::send_turn(session_id.as_deref(), &content).await {
                Ok(reply) => {
                    tracing::info!(
                        session_id = %reply.session_id,
                        stage = %reply.stage,
                        api_source = %reply.api_source,
                        interaction_count = reply.interaction_count,
                        "Therapy response received"
                    );
                    store.write().add_message(&chat_id, Message::from_reply(&reply));
                    match therapy_api::get_stats(&reply.session_id).await {
                        Ok(stats) => usage.set(Some(stats)),
                        Err(e) => tracing::warn!(error = %e, "Failed to load therapy usage"),
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "Therapy request failed");
                    store.write().add_message(&chat_id, Message::system_error(&e));
                    connection_error.set(Some(e));
                }
            }
            is_loading.set(false);
        });
    };

    let messages = current.as_ref().map(|c| c.messages.clone()).unwrap_or_default();
    let session_label = current.as_ref().and_then(|c| c.short_session_id());

    rsx! {
        div { class: "c-chat-page",
            if let Some(error) = connection_error() {
                div { class: "c-chat-page__error", role: "alert",
                    span { "⚠️ Connection Error: {error}" }
                    button {
                        class: "c-chat-page__error-dismiss",
                        "aria-label": "Dismiss error",
                        onclick: move |_| connection_error.set(None),
                        "✕"
                    }
                }
            }

            div { class: "c-chat-page__scroll",
                if messages.is_empty() {
                    div { class: "c-chat-page__backdrop", "aria-hidden": "true",
                        BotAvatar { size: 200 }
                    }
                }
                ul { class: "c-chat-page__messages",
                    if messages.is_empty() {
                        li { class: "c-chat-message c-chat-message--assistant",
                            BotAvatar {}
                            div { class: "c-chat-bubble c-chat-bubble--assistant c-chat-bubble--welcome",
                                p {
                                    "Hello! I'm your therapy companion. I'm here to provide emotional support and help you work through your thoughts and feelings."
                                }
                                p { class: "c-chat-bubble__hint", "How are you feeling today? What's on your mind?" }
                            }
                        }
                    }
                    for message in messages {
                        MessageItem { key: "{message.id}", message: message.clone() }
                    }
                    if is_loading() {
                        TypingIndicator {}
                    }
                }
                div { id: "messages-end" }
            }

            div { class: "c-chat-page__footer",
                if let Some(session) = session_label {
                    p { class: "c-chat-page__session",
                        "Session: {session}"
                        if message_count > 0 {
                            span { class: "c-chat-page__session-count", " • Messages: {message_count}" }
                        }
                        if let Some(label) = usage().map(|stats| stats.usage_label()) {
                            span { class: "c-chat-page__session-usage", " • {label}" }
                        }
                    }
                }
                MessageInput {
                    is_loading: is_loading(),
                    on_send: handle_send,
                    placeholder: "Share what's on your mind...",
                }
                div { class: "c-chat-page__disclaimer",
                    p { "UniMind is an AI therapy companion and cannot replace professional mental health care." }
                    p { "If you're in crisis, please contact emergency services or a crisis helpline immediately." }
                }
            }
        }
    }
}
