use chrono::{Local, Utc};
use dioxus::prelude::*;

use crate::app::components::{ConfirmModal, ErrorBanner, LoadingText, MoodChart};
use crate::domain::models::{MoodEntry, MoodLevel};
use crate::domain::services::mood_stats::{record_entry, summarize, MoodSummary};
use crate::domain::services::{chart_points, TimePeriod};
use crate::server_fns::{add_mood_entry, list_mood_entries, reset_mood_entries};
use crate::shared::errors::server_error_message;
use crate::shared::hooks::{fresh_access_token, use_session};

const RECENT_ENTRIES: usize = 5;

#[component]
pub fn MoodPage() -> Element {
    let session = use_session();
    let mut entries = use_signal(Vec::<MoodEntry>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut selected = use_signal(|| None::<MoodLevel>);
    let mut note = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut period = use_signal(TimePeriod::default);
    let mut confirm_reset = use_signal(|| false);
    let mut resetting = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            let result = match fresh_access_token(session).await {
                Ok(token) => list_mood_entries(token).await.map_err(|e| server_error_message(&e)),
                Err(e) => Err(e),
            };
            match result {
                Ok(list) => entries.set(list),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load mood entries");
                    error.set(Some("Failed to load mood entries".to_string()));
                }
            }
            loading.set(false);
        });
    });

    let save_mood = move |_| {
        let Some(level) = selected() else {
            return;
        };
        saving.set(true);
        spawn(async move {
            let result = match fresh_access_token(session).await {
                Ok(token) => add_mood_entry(token, level.rating(), note())
                    .await
                    .map_err(|e| server_error_message(&e)),
                Err(e) => Err(e),
            };
            match result {
                Ok(entry) => {
                    record_entry(&mut entries.write(), entry);
                    selected.set(None);
                    note.set(String::new());
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to save mood entry");
                    error.set(Some("Failed to save mood entry".to_string()));
                }
            }
            saving.set(false);
        });
    };

    let reset_all = move |_| {
        resetting.set(true);
        spawn(async move {
            let result = match fresh_access_token(session).await {
                Ok(token) => reset_mood_entries(token).await.map_err(|e| server_error_message(&e)),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    entries.set(Vec::new());
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Failed to reset mood entries: {}", e))),
            }
            resetting.set(false);
            confirm_reset.set(false);
        });
    };

    let now = Utc::now();
    let today = now.with_timezone(&Local).date_naive();
    let list = entries.read();
    let MoodSummary {
        streaks: streak,
        logged_today,
        recent,
    } = summarize(&list, today, &Local, RECENT_ENTRIES);
    let points = chart_points(&list, period(), now, &Local);
    drop(list);

    rsx! {
        div { class: "c-page c-mood",
            div { class: "c-page__header",
                h1 { class: "c-page__title", "Mood Tracker" }
                button {
                    class: "c-icon-button c-icon-button--danger",
                    title: "Reset all entries",
                    "aria-label": "Reset all entries",
                    onclick: move |_| confirm_reset.set(true),
                    "🗑️"
                }
            }

            div { class: "c-mood__streaks",
                div { class: "c-mood__streak",
                    span { class: "c-mood__streak-icon c-mood__streak-icon--current", "🔥" }
                    div {
                        p { class: "c-mood__streak-label", "Current streak" }
                        p { class: "c-mood__streak-value",
                            span { class: "c-mood__streak-number", "{streak.current}" }
                            " Days"
                        }
                    }
                }
                div { class: "c-mood__streak",
                    span { class: "c-mood__streak-icon c-mood__streak-icon--longest", "🔥" }
                    div {
                        p { class: "c-mood__streak-label", "Longest streak" }
                        p { class: "c-mood__streak-value",
                            span { class: "c-mood__streak-number", "{streak.longest}" }
                            " Days"
                        }
                    }
                }
            }

            if let Some(message) = error() {
                ErrorBanner { message, on_dismiss: move |_| error.set(None) }
            }

            section { class: "c-card c-mood__log",
                h2 { class: "c-card__title", "How are you feeling today?" }
                if loading() {
                    LoadingText { message: "Loading your moods..." }
                } else if logged_today {
                    p { class: "c-mood__done",
                        "You've already recorded your mood for today. Come back tomorrow to continue your journey! 😊"
                    }
                } else {
                    div { class: "c-mood__picker", role: "radiogroup",
                        for level in MoodLevel::ALL {
                            button {
                                key: "{level.rating()}",
                                class: "c-mood__option",
                                class: if selected() == Some(level) { "is-selected" },
                                "aria-label": "{level.label()}",
                                "aria-checked": selected() == Some(level),
                                role: "radio",
                                onclick: move |_| selected.set(Some(level)),
                                span { class: "c-mood__emoji", "{level.emoji()}" }
                            }
                        }
                    }
                    if selected().is_some() {
                        div { class: "c-mood__note",
                            textarea {
                                class: "c-form__textarea",
                                placeholder: "Add a note (optional)",
                                rows: "3",
                                value: "{note}",
                                oninput: move |evt| note.set(evt.value()),
                            }
                            button {
                                class: "c-button c-button--primary",
                                disabled: saving(),
                                onclick: save_mood,
                                if saving() { "Saving..." } else { "Save Mood" }
                            }
                        }
                    }
                }
            }

            section { class: "c-card c-mood__chart",
                div { class: "c-mood__periods", role: "tablist",
                    for option in TimePeriod::ALL {
                        button {
                            key: "{option.label()}",
                            class: "c-mood__period",
                            class: if period() == option { "is-active" },
                            role: "tab",
                            "aria-selected": period() == option,
                            onclick: move |_| period.set(option),
                            "{option.label()}"
                        }
                    }
                }
                MoodChart { points }
            }

            section { class: "c-card c-mood__recent",
                h2 { class: "c-card__title", "Recent Entries" }
                if recent.is_empty() && !loading() {
                    p { class: "c-mood__empty", "No entries yet. Log your first mood above." }
                }
                ul { class: "c-mood__entries",
                    for entry in recent {
                        RecentEntry { key: "{entry.id}", entry: entry.clone() }
                    }
                }
            }

            if confirm_reset() {
                ConfirmModal {
                    title: "Reset all entries".to_string(),
                    message: "Are you sure you want to reset all mood entries? This cannot be undone.".to_string(),
                    confirm_label: "Reset".to_string(),
                    busy: resetting(),
                    on_confirm: reset_all,
                    on_cancel: move |_| confirm_reset.set(false),
                }
            }
        }
    }
}

#[component]
fn RecentEntry(entry: MoodEntry) -> Element {
    let (emoji, label) = entry
        .level()
        .map(|l| (l.emoji(), l.label()))
        .unwrap_or(("❔", "Unknown"));
    let when = entry
        .created_at
        .with_timezone(&Local)
        .format("%b %-d, %Y, %-I:%M %p")
        .to_string();

    rsx! {
        li { class: "c-mood__entry",
            span { class: "c-mood__entry-emoji", role: "img", "aria-label": "{label}", "{emoji}" }
            div { class: "c-mood__entry-body",
                div { class: "c-mood__entry-head",
                    span { class: "c-mood__entry-label", "{label}" }
                    span { class: "c-mood__entry-time", "{when}" }
                }
                if let Some(text) = entry.note.as_deref().filter(|n| !n.is_empty()) {
                    p { class: "c-mood__entry-note", "{text}" }
                }
            }
        }
    }
}
