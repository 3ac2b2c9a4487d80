use dioxus::prelude::*;

use crate::app::components::{CrisisModal, PageLoading, ToastStack};
use crate::app::layouts::{AppHeader, AppSidebar};
use crate::app::pages::{
    AuthPage, ChatPage, CompanionPage, InfoPage, JournalPage, MoodPage, ResourcesPage,
    SettingsPage, TermsPage,
};
use crate::shared::hooks::{
    use_session, use_session_provider, use_store, use_store_loaded, use_store_provider,
    use_theme, use_toasts_provider,
};

const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/auth")]
    AuthPage {},
    #[route("/terms")]
    TermsPage {},

    #[layout(AuthGuard)]
        #[layout(Layout)]
            #[route("/")]
            ChatPage {},
            #[route("/mood")]
            MoodPage {},
            #[route("/journal")]
            JournalPage {},
            #[route("/companion")]
            CompanionPage {},
            #[route("/resources")]
            ResourcesPage {},
            #[route("/settings")]
            SettingsPage {},
            #[route("/info")]
            InfoPage {},
        #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_session_provider();
    use_store_provider();
    use_toasts_provider();
    use_theme();

    use_effect(|| {
        tracing::info!("UniMind app initialized");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        Router::<Route> {}
        ToastStack {}
    }
}

/// Sends signed-out users to `/auth` and users who have not accepted the
/// disclaimer to `/terms`
#[component]
fn AuthGuard() -> Element {
    let session = use_session();
    let store = use_store();
    let store_loaded = use_store_loaded();

    use_effect(move || {
        let state = session.read();
        if state.loading || !store_loaded() {
            return;
        }
        if !state.is_signed_in() {
            tracing::debug!("No session, redirecting to sign-in");
            navigator().replace(Route::AuthPage {});
        } else if !store.read().disclaimer_accepted {
            navigator().replace(Route::TermsPage {});
        }
    });

    let state = session.read();
    let ready = !state.loading
        && store_loaded()
        && state.is_signed_in()
        && store.read().disclaimer_accepted;

    if !ready {
        return rsx! { PageLoading {} };
    }

    rsx! { Outlet::<Route> {} }
}

#[component]
fn Layout() -> Element {
    let store = use_store();
    let crisis_open = use_signal(|| false);
    let collapsed = store.read().sidebar_collapsed;

    rsx! {
        div {
            class: "c-layout",
            class: if collapsed { "c-layout--collapsed" },
            AppHeader { crisis_open }
            div { class: "c-layout__body",
                AppSidebar {}
                main { class: "c-layout__main",
                    Outlet::<Route> {}
                }
            }
            CrisisModal { is_open: crisis_open }
        }
    }
}

/// Unknown paths land on the chat
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    use_effect(move || {
        navigator().replace(Route::ChatPage {});
    });

    tracing::debug!(path = %segments.join("/"), "Unknown route");
    rsx! { PageLoading {} }
}
