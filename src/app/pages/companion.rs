use dioxus::prelude::*;

use crate::app::components::CompanionStage;

#[component]
pub fn CompanionPage() -> Element {
    rsx! {
        div { class: "c-companion-page", CompanionStage {} }
    }
}
