use chrono::{Local, NaiveDate};
use dioxus::prelude::*;

use crate::app::components::message_item::render_markdown;
use crate::app::components::modal::Modal;
use crate::app::components::ErrorBanner;
use crate::domain::models::{JournalDraft, JournalEntry};
use crate::server_fns::save_journal_entry;
use crate::shared::errors::server_error_message;
use crate::shared::hooks::{fresh_access_token, use_session};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub fn display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[component]
pub fn JournalCard(entry: JournalEntry, on_open: EventHandler<JournalEntry>) -> Element {
    let snippet = entry.snippet();
    let date = display_date(entry.entry_date);
    let opened = entry.clone();

    rsx! {
        button {
            class: "c-journal-card",
            onclick: move |_| on_open.call(opened.clone()),
            div { class: "c-journal-card__media",
                if let Some(url) = entry.image_url.as_deref() {
                    img { class: "c-journal-card__image", src: "{url}", alt: "{entry.title}" }
                } else {
                    div { class: "c-journal-card__placeholder" }
                }
            }
            div { class: "c-journal-card__footer",
                p { class: "c-journal-card__date", "{date}" }
                h4 { class: "c-journal-card__title", "{entry.title}" }
                p { class: "c-journal-card__snippet", "{snippet}" }
            }
        }
    }
}

#[component]
pub fn JournalDetailModal(
    entry: JournalEntry,
    on_close: EventHandler<()>,
    on_edit: EventHandler<JournalEntry>,
    on_delete: EventHandler<String>,
) -> Element {
    let html_content = render_markdown(&entry.content);
    let date = display_date(entry.entry_date);
    let edited = entry.clone();
    let entry_id = entry.id.clone();

    rsx! {
        Modal { title: entry.title.clone(), on_close, wide: true,
            p { class: "c-journal-detail__date", "{date}" }
            if let Some(url) = entry.image_url.as_deref() {
                div { class: "c-journal-detail__media",
                    img { class: "c-journal-detail__image", src: "{url}", alt: "{entry.title}" }
                }
            }
            div { class: "c-prose", dangerous_inner_html: "{html_content}" }
            div { class: "c-modal__actions c-modal__actions--spread",
                div { class: "c-modal__action-group",
                    button {
                        class: "c-button c-button--secondary",
                        onclick: move |_| on_edit.call(edited.clone()),
                        "Edit"
                    }
                    button {
                        class: "c-button c-button--danger",
                        onclick: move |_| on_delete.call(entry_id.clone()),
                        "Delete"
                    }
                }
                button {
                    class: "c-button c-button--ghost",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}

/// Create form when `entry` is `None`, edit form otherwise
#[component]
pub fn JournalFormModal(
    entry: Option<JournalEntry>,
    on_saved: EventHandler<JournalEntry>,
    on_close: EventHandler<()>,
) -> Element {
    let session = use_session();
    let entry_id = entry.as_ref().map(|e| e.id.clone());
    let is_edit = entry_id.is_some();

    let mut draft = use_signal(|| match &entry {
        Some(existing) => existing.to_draft(),
        None => JournalDraft::for_today(Local::now().date_naive()),
    });
    let mut is_submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |_| {
        let current = draft.read().clone();
        if let Err(e) = current.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        let entry_id = entry_id.clone();
        is_submitting.set(true);
        error.set(None);
        spawn(async move {
            let result = match fresh_access_token(session).await {
                Ok(token) => save_journal_entry(token, entry_id, current)
                    .await
                    .map_err(|e| server_error_message(&e)),
                Err(e) => Err(e),
            };
            is_submitting.set(false);
            match result {
                Ok(saved) => on_saved.call(saved),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let close = move || {
        if !*is_submitting.peek() {
            on_close.call(());
        }
    };

    let title = if is_edit { "Edit Journal Entry" } else { "Create New Journal Entry" };
    let date_value = draft
        .read()
        .entry_date
        .map(|d| d.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default();
    let busy = is_submitting();

    rsx! {
        Modal { title: title.to_string(), on_close: move |_| close(), wide: true,
            if let Some(message) = error() {
                ErrorBanner { message, on_dismiss: move |_| error.set(None) }
            }
            div { class: "c-form",
                label { class: "c-form__label",
                    "Title"
                    input {
                        class: "c-form__input",
                        r#type: "text",
                        placeholder: "Enter the title",
                        required: true,
                        disabled: busy,
                        value: "{draft.read().title}",
                        oninput: move |evt| draft.write().title = evt.value(),
                    }
                }
                label { class: "c-form__label",
                    "Date"
                    input {
                        class: "c-form__input",
                        r#type: "date",
                        required: true,
                        disabled: busy,
                        value: "{date_value}",
                        oninput: move |evt| {
                            draft.write().entry_date =
                                NaiveDate::parse_from_str(&evt.value(), DATE_INPUT_FORMAT).ok();
                        },
                    }
                }
                label { class: "c-form__label",
                    "Image URL (Optional)"
                    input {
                        class: "c-form__input",
                        r#type: "url",
                        placeholder: "Enter image URL",
                        disabled: busy,
                        value: "{draft.read().image_url}",
                        oninput: move |evt| draft.write().image_url = evt.value(),
                    }
                }
                label { class: "c-form__label",
                    "Content"
                    textarea {
                        class: "c-form__textarea",
                        placeholder: "Write your journal entry...",
                        rows: "10",
                        required: true,
                        disabled: busy,
                        value: "{draft.read().content}",
                        oninput: move |evt| draft.write().content = evt.value(),
                    }
                }
            }
            div { class: "c-modal__actions",
                button {
                    class: "c-button c-button--ghost",
                    disabled: busy,
                    onclick: move |_| close(),
                    "Cancel"
                }
                button {
                    class: "c-button c-button--primary",
                    disabled: busy,
                    onclick: handle_submit,
                    if busy { "Saving..." } else { "Save Entry" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(display_date(date), "March 7, 2025");
    }
}
