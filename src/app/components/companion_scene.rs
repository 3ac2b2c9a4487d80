use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::services::companion::{
    generate_starfield, Star, LIGHT_SENSITIVITY_KEY, STAR_COUNT, TERMS_ACCEPTED_KEY,
};
use crate::domain::services::{CompanionPhase, CompanionScene};
use crate::shared::services::storage;
use crate::shared::utils::sleep;

const FRAME: Duration = Duration::from_millis(33);
const STARFIELD_SEED: u64 = 0x5EED;
/// Stars actually drawn; the SVG renderer cannot keep up with the full field
const RENDERED_STARS: usize = 800;
const STAR_BASE_RADIUS: f64 = 0.004;

#[derive(Debug, Clone, Copy, PartialEq)]
struct StarDot {
    x: f64,
    y: f64,
    r: f64,
    opacity: f64,
}

fn project_stars(scene: &CompanionScene, stars: &[Star], time: f64, steady: bool) -> Vec<StarDot> {
    stars
        .iter()
        .filter_map(|star| {
            let p = scene.project(star.position)?;
            if p.x.abs() > 1.6 || p.y.abs() > 1.6 {
                return None;
            }
            let opacity = if steady { 0.6 } else { star.brightness(time) };
            Some(StarDot {
                x: p.x,
                y: -p.y,
                r: (STAR_BASE_RADIUS * p.scale * 3.0).clamp(0.001, 0.012),
                opacity,
            })
        })
        .collect()
}

/// Full-screen companion experience: starfield, sphere and call controls
#[component]
pub fn CompanionStage() -> Element {
    let mut scene = use_signal(CompanionScene::default);
    let mut time = use_signal(|| 0.0_f64);
    let mut drag_from = use_signal(|| None::<(f64, f64)>);
    let mut show_terms = use_signal(|| false);
    let mut light_sensitive = use_signal(|| false);
    let stars = use_hook(|| {
        let mut field = generate_starfield(STAR_COUNT, STARFIELD_SEED);
        field.truncate(RENDERED_STARS);
        Rc::new(field)
    });

    use_effect(move || {
        if !storage::load_flag(TERMS_ACCEPTED_KEY) {
            show_terms.set(true);
        }
        light_sensitive.set(storage::load_flag(LIGHT_SENSITIVITY_KEY));
    });

    use_future(move || async move {
        let dt = FRAME.as_secs_f64();
        loop {
            sleep(FRAME).await;
            if !*light_sensitive.peek() {
                time += dt;
            }
            if scene.peek().phase != CompanionPhase::Idle
                && scene.peek().phase != CompanionPhase::NeutronStarVisible
            {
                scene.write().tick(dt);
            }
        }
    });

    let accept_terms = move |_| {
        storage::save_flag(TERMS_ACCEPTED_KEY, true);
        storage::save_flag(LIGHT_SENSITIVITY_KEY, light_sensitive());
        show_terms.set(false);
    };

    let current = scene.read().clone();
    let dots = project_stars(&current, &stars, time(), light_sensitive());
    let radius = current.sphere_screen_radius();
    let background = current.background_hex();
    let phase = current.phase;
    let pulse = if light_sensitive() { 1.0 } else { 1.0 + 0.03 * (time() * 0.5).sin() };
    let sphere_class = if current.shows_neutron_star() {
        "c-companion__neutron-star"
    } else {
        "c-companion__sphere"
    };
    let mute_label = if current.muted { "Unmute" } else { "Mute" };
    let agent_label = current.agent.button_label();

    rsx! {
        div {
            class: "c-companion",
            class: if light_sensitive() { "c-companion--calm" },
            style: "background-color: {background};",
            onmousedown: move |evt| {
                let point = evt.client_coordinates();
                drag_from.set(Some((point.x, point.y)));
            },
            onmousemove: move |evt| {
                if let Some((x, y)) = drag_from() {
                    let point = evt.client_coordinates();
                    scene.write().orbit(point.x - x, point.y - y);
                    drag_from.set(Some((point.x, point.y)));
                }
            },
            onmouseup: move |_| drag_from.set(None),
            onmouseleave: move |_| drag_from.set(None),

            svg {
                class: "c-companion__canvas",
                view_box: "-1 -1 2 2",
                preserve_aspect_ratio: "xMidYMid slice",
                defs {
                    radialGradient { id: "companion-sphere-fill",
                        stop { offset: "0%", stop_color: "#ff7ab8" }
                        stop { offset: "55%", stop_color: "#6cbdbd" }
                        stop { offset: "100%", stop_color: "#2d5f66" }
                    }
                    radialGradient { id: "companion-star-fill",
                        stop { offset: "0%", stop_color: "#ffffff" }
                        stop { offset: "40%", stop_color: "#ffd6f0" }
                        stop { offset: "100%", stop_color: "#ff007a" }
                    }
                }
                for (i, dot) in dots.iter().enumerate() {
                    circle {
                        key: "{i}",
                        class: "c-companion__star",
                        cx: "{dot.x}",
                        cy: "{dot.y}",
                        r: "{dot.r}",
                        opacity: "{dot.opacity}",
                    }
                }
                circle {
                    class: "{sphere_class}",
                    cx: "0",
                    cy: "0",
                    r: "{radius * pulse}",
                    fill: if current.shows_neutron_star() { "url(#companion-star-fill)" } else { "url(#companion-sphere-fill)" },
                }
            }

            if phase == CompanionPhase::Idle && !show_terms() {
                button {
                    class: "c-companion__call",
                    "aria-label": "Start companion call",
                    onclick: move |_| scene.write().enter_call(),
                    span { class: "c-companion__call-icon", "▮▮▮" }
                    "Try a call"
                }
            }

            if phase == CompanionPhase::NeutronStarVisible {
                div { class: "c-companion__controls",
                    button {
                        class: "c-companion__control",
                        class: if current.muted { "is-active" },
                        onclick: move |_| scene.write().toggle_mute(),
                        "{mute_label}"
                    }
                    button {
                        class: "c-companion__control",
                        onclick: move |_| scene.write().toggle_agent_state(),
                        "{agent_label}"
                    }
                }
            }

            if show_terms() {
                div { class: "c-companion__terms-backdrop",
                    div { class: "c-companion__terms", role: "dialog", "aria-modal": "true",
                        h2 { class: "c-companion__terms-title", "Welcome to Companion" }
                        div { class: "c-companion__terms-body",
                            p {
                                "This is an experimental AI conversational agent designed for interaction and providing information based on its training data. Please enjoy the experience!"
                            }
                            p { strong { "Important Notes:" } }
                            ul {
                                li { "Companion is an AI and not a mental health professional. Its responses are generated algorithmically." }
                                li { "Information provided may sometimes be inaccurate or incomplete." }
                                li { "This experience may involve bright or potentially flashing colors." }
                            }
                        }
                        label { class: "c-companion__terms-check",
                            input {
                                r#type: "checkbox",
                                checked: light_sensitive(),
                                onchange: move |evt| light_sensitive.set(evt.checked()),
                            }
                            "Check this box if you are "
                            strong { "sensitive to bright or flashing lights" }
                            " (this slows the animation and turns off twinkling)"
                        }
                        button {
                            class: "c-button c-button--primary c-companion__terms-accept",
                            onclick: accept_terms,
                            "Accept and Continue"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_behind_camera_are_culled() {
        let scene = CompanionScene::default();
        let stars = generate_starfield(200, 7);
        let dots = project_stars(&scene, &stars, 0.0, false);
        assert!(!dots.is_empty());
        assert!(dots.len() < stars.len());
    }

    #[test]
    fn test_steady_stars_do_not_twinkle() {
        let scene = CompanionScene::default();
        let stars = generate_starfield(50, 3);
        let early = project_stars(&scene, &stars, 0.0, true);
        let late = project_stars(&scene, &stars, 12.5, true);
        assert_eq!(early, late);
        assert!(early.iter().all(|d| d.opacity == 0.6));
    }
}
