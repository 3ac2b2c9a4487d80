use dioxus::prelude::*;

use crate::shared::constants::{APP_NAME, APP_VERSION};

const FEATURES: [(&str, &str); 3] = [
    (
        "Chat Support",
        "Engage in supportive conversations with our AI companion. Conversations are private and stored locally on your device.",
    ),
    (
        "Mood Tracking",
        "Track your daily moods and emotional patterns over time. Add notes to provide context for your mood entries.",
    ),
    (
        "Journaling",
        "Keep a private journal to record your thoughts, feelings, and experiences. Entries are saved to your account and only visible to you.",
    ),
];

#[component]
pub fn InfoPage() -> Element {
    rsx! {
        div { class: "c-page c-info",
            h1 { class: "c-page__title", "About {APP_NAME}" }

            section { class: "c-card",
                h2 { class: "c-card__title", "About" }
                p {
                    "{APP_NAME} is a supportive AI companion designed to assist with mental wellness through conversation, mood tracking, and journaling. It provides a safe space for self-reflection and emotional support."
                }
            }

            section { class: "c-card",
                h2 { class: "c-card__title", "Privacy" }
                p {
                    "Your privacy is our priority. Chats and preferences stay in your browser. Mood and journal entries are stored in your own account, protected so that only you can read them."
                }
            }

            section { class: "c-card",
                h2 { class: "c-card__title", "How it Works" }
                div { class: "c-info__features",
                    for (title, body) in FEATURES {
                        div { key: "{title}", class: "c-info__feature",
                            h3 { class: "c-info__feature-title", "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }

            section { class: "c-card",
                h2 { class: "c-card__title", "Version" }
                p { "{APP_NAME} Web v{APP_VERSION}" }
            }
        }
    }
}
