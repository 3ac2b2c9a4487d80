use dioxus::prelude::*;

use crate::app::components::message_item::render_markdown;
use crate::domain::models::ResourceEntry;

#[component]
pub fn ResourceCard(resource: ResourceEntry, on_open: EventHandler<ResourceEntry>) -> Element {
    rsx! {
        button {
            class: "c-resource-card",
            onclick: move |_| on_open.call(resource),
            h3 { class: "c-resource-card__title", "{resource.title}" }
            p { class: "c-resource-card__snippet", "{resource.snippet}" }
        }
    }
}

#[component]
pub fn ResourceDetailModal(resource: ResourceEntry, on_close: EventHandler<()>) -> Element {
    let html_content = render_markdown(resource.content);

    rsx! {
        div {
            class: "c-modal__backdrop c-modal__backdrop--scroll",
            onclick: move |_| on_close.call(()),
            div {
                class: "c-modal c-modal--wide c-resource-detail",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "c-modal__close c-resource-detail__close",
                    "aria-label": "Close resource detail",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                h2 { class: "c-resource-detail__title", "{resource.title}" }
                div { class: "c-prose", dangerous_inner_html: "{html_content}" }
            }
        }
    }
}
