//! Guided breathing screens shown inside the crisis dialog

use dioxus::prelude::*;
use std::time::Duration;

use crate::domain::models::{BreathingExercise, BREATHING_EXERCISES};
use crate::domain::services::breathing::CIRCLE_BASE_RATIO;
use crate::domain::services::BreathingSession;
use crate::shared::utils::sleep;

const CIRCLE_MAX_PX: f64 = 280.0;

#[component]
pub fn BreathingSelection(on_select: EventHandler<BreathingExercise>, on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "c-breathing",
            div { class: "c-breathing__header",
                button {
                    class: "c-icon-button",
                    "aria-label": "Back",
                    onclick: move |_| on_back.call(()),
                    "←"
                }
                h2 { class: "c-breathing__title", "Breathing Exercises" }
            }
            div { class: "c-breathing__content",
                h3 { class: "c-breathing__subtitle", "Choose a Breathing Technique" }
                div { class: "c-breathing__list",
                    for exercise in BREATHING_EXERCISES.iter().copied() {
                        button {
                            key: "{exercise.id}",
                            class: "c-breathing__option",
                            onclick: move |_| on_select.call(exercise),
                            h4 { class: "c-breathing__option-title", "{exercise.title}" }
                            p { class: "c-breathing__option-text", "{exercise.description}" }
                            p { class: "c-breathing__option-text", "{exercise.benefit}" }
                        }
                    }
                }
                p { class: "c-breathing__hint",
                    "Recommended duration: 5+ minutes for optimal effectiveness"
                }
            }
        }
    }
}

/// Countdown, then phases cycling until the user stops
#[component]
pub fn BreathingActive(
    exercise: BreathingExercise,
    on_back: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let mut session = use_signal(|| BreathingSession::new(exercise));

    use_future(move || async move {
        loop {
            sleep(Duration::from_secs(1)).await;
            session.write().tick();
        }
    });

    let current = session.read().clone();

    rsx! {
        div { class: "c-breathing",
            div { class: "c-breathing__header c-breathing__header--spread",
                button {
                    class: "c-icon-button",
                    "aria-label": "Back",
                    onclick: move |_| on_back.call(()),
                    "←"
                }
                h2 { class: "c-breathing__title", "{exercise.title}" }
                button {
                    class: "c-icon-button",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
            div { class: "c-breathing__content c-breathing__content--centered",
                match (current.countdown(), current.current_phase()) {
                    (Some(count), _) => rsx! {
                        div { class: "c-breathing__countdown", "{count}" }
                    },
                    (None, Some(phase)) => rsx! {
                        div { class: "c-breathing__instruction", "{phase.instruction}" }
                        BreathingCircle {
                            scale: current.circle_scale(),
                            seconds: current.seconds_left(),
                            duration_secs: phase.duration_secs,
                        }
                        p { class: "c-breathing__hint", "Follow the circle's movement" }
                        button {
                            class: "c-button c-button--secondary c-breathing__stop",
                            onclick: move |_| on_close.call(()),
                            "■ Stop Exercise"
                        }
                    },
                    (None, None) => rsx! {},
                }
            }
        }
    }
}

#[component]
fn BreathingCircle(scale: f64, seconds: u32, duration_secs: u32) -> Element {
    let base = CIRCLE_MAX_PX * CIRCLE_BASE_RATIO;

    rsx! {
        div {
            class: "c-breathing-circle",
            style: "width: {CIRCLE_MAX_PX}px; height: {CIRCLE_MAX_PX}px;",
            div {
                class: "c-breathing-circle__ring",
                style: "width: {base}px; height: {base}px; transform: scale({scale}); transition-duration: {duration_secs}s;",
                div { class: "c-breathing-circle__core" }
            }
            span { class: "c-breathing-circle__seconds", "{seconds}" }
        }
    }
}
