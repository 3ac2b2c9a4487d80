use dioxus::prelude::*;

use crate::app::components::{ResourceCard, ResourceDetailModal};
use crate::domain::models::{resource_catalog, ResourceEntry};
use crate::domain::services::{group_by_category, search};

#[component]
pub fn ResourcesPage() -> Element {
    let mut query = use_signal(String::new);
    let mut selected = use_signal(|| None::<ResourceEntry>);

    let hits = search(resource_catalog(), &query.read());
    let groups = group_by_category(hits.into_iter().map(|hit| hit.entry));

    rsx! {
        div { class: "c-page c-resources",
            h1 { class: "c-page__title c-page__title--center", "Resources" }

            div { class: "c-resources__search",
                span { class: "c-resources__search-icon", "🔍" }
                input {
                    class: "c-resources__search-input",
                    r#type: "text",
                    "aria-label": "Search resources",
                    placeholder: "Search resources (e.g., anxiety, counselling, sleep)...",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }

            if groups.is_empty() {
                p { class: "c-resources__empty", "No resources found matching your search term." }
            }
            for (category, entries) in groups {
                section { key: "{category}", class: "c-resources__category",
                    h2 { class: "c-resources__category-title", "{category}" }
                    div { class: "c-resources__grid",
                        for entry in entries {
                            ResourceCard {
                                key: "{entry.id}",
                                resource: *entry,
                                on_open: move |r: ResourceEntry| selected.set(Some(r)),
                            }
                        }
                    }
                }
            }

            if let Some(resource) = selected() {
                ResourceDetailModal { resource, on_close: move |_| selected.set(None) }
            }
        }
    }
}
