use dioxus::prelude::*;

use crate::domain::models::{SettingsPatch, ThemePreference};
use crate::shared::hooks::use_store;

/// Light / dark / system picker; the choice is persisted with the chat store
#[component]
pub fn ThemeSelector() -> Element {
    let mut store = use_store();
    let current = store.read().settings.theme;

    rsx! {
        div { class: "c-theme-selector", role: "radiogroup", "aria-label": "Theme",
            for theme in ThemePreference::ALL {
                button {
                    key: "{theme.as_str()}",
                    class: "c-theme-selector__option",
                    class: if current == theme { "is-active" },
                    role: "radio",
                    "aria-checked": current == theme,
                    onclick: move |_| {
                        tracing::debug!(theme = theme.as_str(), "Theme changed");
                        store.write().update_settings(SettingsPatch {
                            theme: Some(theme),
                            ..Default::default()
                        });
                    },
                    span { class: "c-theme-selector__option-icon", "{theme.icon()}" }
                    span { class: "c-theme-selector__option-name", "{theme.display_name()}" }
                    if current == theme {
                        span { class: "c-theme-selector__option-check", "✓" }
                    }
                }
            }
        }
    }
}
