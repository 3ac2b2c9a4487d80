use dioxus::prelude::*;

use crate::app::components::breathing::{BreathingActive, BreathingSelection};
use crate::domain::models::{BreathingExercise, GROUNDING_STEPS};
use crate::shared::constants::{
    EMERGENCY_NUMBER, NHS_MENTAL_HEALTH_URL, SAFEZONE_URL, SAMARITANS_URL,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum CrisisScreen {
    Resources,
    BreathingList,
    Breathing(BreathingExercise),
    Grounding,
}

/// Crisis resources and self-help tools. Closing from any screen resets it.
#[component]
pub fn CrisisModal(is_open: Signal<bool>) -> Element {
    let mut screen = use_signal(|| CrisisScreen::Resources);

    let mut close = move || {
        screen.set(CrisisScreen::Resources);
        is_open.set(false);
    };

    if !is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "c-modal__backdrop",
            onclick: move |_| close(),
            div {
                class: "c-modal c-crisis",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                match screen() {
                    CrisisScreen::Resources => rsx! {
                        CrisisResources {
                            on_close: move |_| close(),
                            on_breathing: move |_| screen.set(CrisisScreen::BreathingList),
                            on_grounding: move |_| screen.set(CrisisScreen::Grounding),
                        }
                    },
                    CrisisScreen::BreathingList => rsx! {
                        BreathingSelection {
                            on_select: move |exercise| screen.set(CrisisScreen::Breathing(exercise)),
                            on_back: move |_| screen.set(CrisisScreen::Resources),
                        }
                    },
                    CrisisScreen::Breathing(exercise) => rsx! {
                        BreathingActive {
                            key: "{exercise.id}",
                            exercise,
                            on_back: move |_| screen.set(CrisisScreen::BreathingList),
                            on_close: move |_| close(),
                        }
                    },
                    CrisisScreen::Grounding => rsx! {
                        GroundingExercise { on_back: move |_| screen.set(CrisisScreen::Resources) }
                    },
                }
            }
        }
    }
}

#[component]
fn CrisisResources(
    on_close: EventHandler<()>,
    on_breathing: EventHandler<()>,
    on_grounding: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "c-crisis__panel",
            div { class: "c-modal__header",
                h2 { class: "c-modal__title", "Crisis Resources" }
                button {
                    class: "c-modal__close",
                    "aria-label": "Close modal",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
            section { class: "c-crisis__section",
                h3 { class: "c-crisis__heading", "Emergency Services" }
                a {
                    class: "c-crisis__link c-crisis__link--emergency",
                    href: "tel:{EMERGENCY_NUMBER}",
                    "📞 Emergency Services ({EMERGENCY_NUMBER})"
                }
                a {
                    class: "c-crisis__link",
                    href: SAFEZONE_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "🛡️ SafeZone App"
                }
            }
            section { class: "c-crisis__section",
                h3 { class: "c-crisis__heading", "Mental Health Support" }
                a {
                    class: "c-crisis__link",
                    href: SAMARITANS_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "🤝 Samaritans Support"
                }
                a {
                    class: "c-crisis__link",
                    href: NHS_MENTAL_HEALTH_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "💙 NHS Mental Health Services"
                }
            }
            section { class: "c-crisis__section",
                h3 { class: "c-crisis__heading", "Self-Help Tools" }
                button {
                    class: "c-crisis__link",
                    onclick: move |_| on_breathing.call(()),
                    "🌬️ Guided Breathing Exercise"
                }
                button {
                    class: "c-crisis__link",
                    onclick: move |_| on_grounding.call(()),
                    "⚓ 5-4-3-2-1 Grounding Exercise"
                }
            }
        }
    }
}

#[component]
fn GroundingExercise(on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "c-crisis__panel",
            div { class: "c-breathing__header",
                button {
                    class: "c-icon-button",
                    "aria-label": "Back",
                    onclick: move |_| on_back.call(()),
                    "←"
                }
                h2 { class: "c-modal__title", "Grounding Exercise" }
            }
            h3 { class: "c-grounding__title", "5-4-3-2-1 Grounding Technique" }
            div { class: "c-grounding",
                for step in GROUNDING_STEPS.iter() {
                    div {
                        key: "{step.count}",
                        class: "c-grounding__step",
                        style: "color: {step.color};",
                        span { class: "c-grounding__count", "{step.count}" }
                        span { class: "c-grounding__sense", "{step.sense}" }
                    }
                }
            }
        }
    }
}
