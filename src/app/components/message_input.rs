use dioxus::prelude::*;
use keyboard_types::Modifiers;

/// Chat composer. Enter sends, Shift+Enter inserts a newline.
#[component]
pub fn MessageInput(
    is_loading: bool,
    on_send: EventHandler<String>,
    #[props(default = "Ask anything".to_string())] placeholder: String,
) -> Element {
    let mut message = use_signal(String::new);
    let mut is_composing = use_signal(|| false);

    let mut submit = move || {
        let text = message.read().trim().to_string();
        if !text.is_empty() && !is_loading {
            on_send.call(text);
            message.set(String::new());
        }
    };

    let handle_keydown = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Enter
            && !evt.modifiers().contains(Modifiers::SHIFT)
            && !*is_composing.read()
        {
            evt.prevent_default();
            submit();
        }
    };

    let has_content = !message.read().trim().is_empty();

    rsx! {
        div { class: "c-message-input",
            div { class: "c-message-input__box",
                textarea {
                    id: "chat-input",
                    class: "c-message-input__textarea",
                    value: "{message}",
                    placeholder: "{placeholder}",
                    disabled: is_loading,
                    rows: "1",
                    "aria-label": "Message input",
                    oninput: move |evt| message.set(evt.value()),
                    onkeydown: handle_keydown,
                    oncompositionstart: move |_| is_composing.set(true),
                    oncompositionend: move |_| is_composing.set(false),
                }
                button {
                    class: "c-message-input__send",
                    r#type: "button",
                    "aria-label": "Send message",
                    disabled: !has_content || is_loading,
                    onclick: move |_| submit(),
                    "➤"
                }
            }
        }
    }
}
