use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop closes it.
#[component]
pub fn Modal(
    title: String,
    on_close: EventHandler<()>,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    let size = if wide { "c-modal--wide" } else { "" };

    rsx! {
        div {
            class: "c-modal__backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "c-modal {size}",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "c-modal__header",
                    h2 { class: "c-modal__title", "{title}" }
                    button {
                        class: "c-modal__close",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                div { class: "c-modal__body", {children} }
            }
        }
    }
}

/// Yes/no confirmation built on [`Modal`]
#[component]
pub fn ConfirmModal(
    title: String,
    message: String,
    confirm_label: String,
    #[props(default = false)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Modal { title, on_close: on_cancel,
            p { class: "c-modal__message", "{message}" }
            div { class: "c-modal__actions",
                button {
                    class: "c-button c-button--secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "c-button c-button--danger",
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    if busy { "..." } else { "{confirm_label}" }
                }
            }
        }
    }
}
