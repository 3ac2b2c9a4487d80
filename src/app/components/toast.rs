use dioxus::prelude::*;

use crate::shared::hooks::use_toasts;

/// Stack of transient notifications, bottom-right
#[component]
pub fn ToastStack() -> Element {
    let handle = use_toasts();
    let toasts = handle.toasts.read().items().to_vec();

    rsx! {
        div { class: "c-toast-stack", "aria-live": "polite",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: "c-toast {toast.kind.modifier()}",
                    span { class: "c-toast__message", "{toast.message}" }
                    button {
                        class: "c-toast__close",
                        "aria-label": "Dismiss",
                        onclick: move |_| handle.dismiss(toast.id),
                        "✕"
                    }
                }
            }
        }
    }
}
