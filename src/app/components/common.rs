use dioxus::prelude::*;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Full-page variant shown while the session is restored
#[component]
pub fn PageLoading() -> Element {
    rsx! {
        div { class: "c-loading c-loading--page",
            div { class: "c-loading__spinner" }
        }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error",
            span { class: "c-error__icon", "⚠️" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

/// Inline error with a dismiss button, used above forms
#[component]
pub fn ErrorBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "c-error c-error--banner", role: "alert",
            p { class: "c-error__text", "{message}" }
            button {
                class: "c-error__dismiss",
                "aria-label": "Dismiss error",
                onclick: move |_| on_dismiss.call(()),
                "✕"
            }
        }
    }
}

// Reusable Empty State Component
#[component]
pub fn EmptyState(
    icon: String,
    title: String,
    description: String,
    action_text: Option<String>,
    action_handler: Option<EventHandler>,
) -> Element {
    rsx! {
        div { class: "c-empty-state",
            div { class: "c-empty-state__icon", "{icon}" }
            h3 { class: "c-empty-state__title", "{title}" }
            p { class: "c-empty-state__description", "{description}" }
            if let (Some(text), Some(handler)) = (action_text, action_handler) {
                button {
                    onclick: move |_| handler.call(()),
                    class: "c-button c-button--primary",
                    "{text}"
                }
            }
        }
    }
}
