use dioxus::prelude::*;

use crate::app::pages::routes::Route;
use crate::shared::constants::APP_NAME;
use crate::shared::hooks::use_store;

/// Fixed top bar: sidebar toggle, logo, crisis and account buttons
#[component]
pub fn AppHeader(crisis_open: Signal<bool>) -> Element {
    let mut store = use_store();
    let route = use_route::<Route>();
    let collapsed = store.read().sidebar_collapsed;

    let on_account = move |_| {
        let target = if matches!(route, Route::SettingsPage {}) {
            Route::ChatPage {}
        } else {
            Route::SettingsPage {}
        };
        navigator().push(target);
    };

    rsx! {
        header { class: "c-header",
            div { class: "c-header__start",
                button {
                    id: "sidebar-toggle",
                    class: "c-header__icon-button",
                    "aria-label": if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
                    "aria-expanded": !collapsed,
                    onclick: move |_| store.write().toggle_sidebar(),
                    "☰"
                }
                Link { to: Route::ChatPage {}, class: "c-header__logo",
                    if !collapsed {
                        span { class: "c-header__logo-mark", "🤖" }
                    }
                    span { class: "c-header__logo-text", "{APP_NAME}" }
                }
            }
            div { class: "c-header__end",
                button {
                    class: "c-header__icon-button c-header__icon-button--crisis",
                    "aria-label": "Crisis Support",
                    title: "Crisis Support",
                    onclick: move |_| crisis_open.set(true),
                    "⚠️"
                }
                button {
                    class: "c-header__icon-button",
                    "aria-label": "Account Settings",
                    onclick: on_account,
                    "👤"
                }
            }
        }
    }
}
