use dioxus::prelude::*;

use crate::app::components::BotAvatar;
use crate::app::pages::routes::Route;
use crate::shared::hooks::use_store;

const SECTIONS: [(&str, &str); 4] = [
    (
        "What UniMind Is",
        "UniMind is a supportive AI companion designed to assist with mental wellness through conversation, mood tracking, and journaling. It provides a safe space for self-reflection and emotional support.",
    ),
    (
        "What UniMind Is Not",
        "UniMind is not a replacement for professional mental health care. It cannot diagnose conditions or provide medical advice. If you're experiencing a crisis, please use the Crisis Support button to access emergency services and professional help.",
    ),
    (
        "Privacy",
        "Your privacy is our priority. Chats stay on your device. Mood and journal entries are stored in your own account and are only visible to you.",
    ),
    (
        "Terms of Use",
        "By using UniMind, you acknowledge that it is a supportive tool and not a substitute for professional medical advice, diagnosis, or treatment. Always seek the advice of qualified health providers with questions you may have.",
    ),
];

#[component]
pub fn TermsPage() -> Element {
    let mut store = use_store();

    let accept = move |_| {
        store.write().accept_disclaimer();
        tracing::info!("Disclaimer accepted");
        navigator().push(Route::ChatPage {});
    };

    rsx! {
        div { class: "c-terms",
            div { class: "c-terms__card",
                div { class: "c-terms__avatar", BotAvatar { size: 80 } }
                h1 { class: "c-terms__title", "Welcome to UniMind" }
                div { class: "c-terms__sections",
                    for (heading, body) in SECTIONS {
                        section { key: "{heading}", class: "c-terms__section",
                            h2 { class: "c-terms__heading", "{heading}" }
                            p { class: "c-terms__text", "{body}" }
                        }
                    }
                }
                div { class: "c-terms__actions",
                    button {
                        class: "c-button c-button--secondary",
                        onclick: move |_| {
                            navigator().push(Route::AuthPage {});
                        },
                        "Go Back"
                    }
                    button {
                        class: "c-button c-button--primary",
                        onclick: accept,
                        "Accept & Continue"
                    }
                }
            }
        }
    }
}
