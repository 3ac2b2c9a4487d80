use dioxus::prelude::*;

use crate::app::components::{
    ConfirmModal, EmptyState, ErrorBanner, JournalCard, JournalDetailModal, JournalFormModal,
    LoadingText,
};
use crate::domain::models::JournalEntry;
use crate::server_fns::{delete_journal_entry, list_journal_entries};
use crate::shared::errors::server_error_message;
use crate::shared::hooks::{fresh_access_token, use_session, use_toasts};

#[derive(Debug, Clone, PartialEq)]
enum JournalDialog {
    Closed,
    Detail(JournalEntry),
    Form(Option<JournalEntry>),
}

/// Keep entries ordered by entry date, newest first
fn upsert(entries: &mut Vec<JournalEntry>, saved: JournalEntry) {
    entries.retain(|e| e.id != saved.id);
    entries.push(saved);
    entries.sort_by(|a, b| {
        b.entry_date
            .cmp(&a.entry_date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[component]
pub fn JournalPage() -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let mut entries = use_signal(Vec::<JournalEntry>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut dialog = use_signal(|| JournalDialog::Closed);
    let mut pending_delete = use_signal(|| None::<String>);
    let mut deleting = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            let result = match fresh_access_token(session).await {
                Ok(token) => list_journal_entries(token)
                    .await
                    .map_err(|e| server_error_message(&e)),
                Err(e) => Err(e),
            };
            match result {
                Ok(list) => entries.set(list),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load journal entries");
                    error.set(Some("Failed to load journal entries".to_string()));
                }
            }
            loading.set(false);
        });
    });

    let confirm_delete = move |_| {
        let Some(entry_id) = pending_delete() else {
            return;
        };
        deleting.set(true);
        spawn(async move {
            let result = match fresh_access_token(session).await {
                Ok(token) => delete_journal_entry(token, entry_id.clone())
                    .await
                    .map_err(|e| server_error_message(&e)),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    entries.write().retain(|e| e.id != entry_id);
                    dialog.set(JournalDialog::Closed);
                    toasts.success("Journal entry deleted");
                }
                Err(e) => error.set(Some(format!("Failed to delete entry: {}", e))),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    let list = entries();

    rsx! {
        div { class: "c-page c-journal",
            div { class: "c-page__header",
                h1 { class: "c-page__title", "Journal" }
                button {
                    class: "c-button c-button--primary",
                    onclick: move |_| dialog.set(JournalDialog::Form(None)),
                    "＋ New Entry"
                }
            }

            if let Some(message) = error() {
                ErrorBanner { message, on_dismiss: move |_| error.set(None) }
            }

            if loading() {
                LoadingText { message: "Loading journal..." }
            } else if list.is_empty() {
                EmptyState {
                    icon: "📖",
                    title: "No entries yet",
                    description: "Your journal entries will appear here.",
                    action_text: "Write your first entry".to_string(),
                    action_handler: move |_| dialog.set(JournalDialog::Form(None)),
                }
            } else {
                div { class: "c-journal__grid",
                    for entry in list {
                        JournalCard {
                            key: "{entry.id}",
                            entry: entry.clone(),
                            on_open: move |e: JournalEntry| dialog.set(JournalDialog::Detail(e)),
                        }
                    }
                }
            }

            {
                match dialog() {
                    JournalDialog::Closed => rsx! {},
                    JournalDialog::Detail(entry) => rsx! {
                        JournalDetailModal {
                            entry,
                            on_close: move |_| dialog.set(JournalDialog::Closed),
                            on_edit: move |e: JournalEntry| dialog.set(JournalDialog::Form(Some(e))),
                            on_delete: move |id: String| pending_delete.set(Some(id)),
                        }
                    },
                    JournalDialog::Form(entry) => rsx! {
                        JournalFormModal {
                            entry,
                            on_saved: move |saved: JournalEntry| {
                                tracing::debug!(entry_id = %saved.id, "Journal entry saved");
                                upsert(&mut entries.write(), saved);
                                dialog.set(JournalDialog::Closed);
                                toasts.success("Journal entry saved");
                            },
                            on_close: move |_| dialog.set(JournalDialog::Closed),
                        }
                    },
                }
            }

            if pending_delete().is_some() {
                ConfirmModal {
                    title: "Delete entry".to_string(),
                    message: "Are you sure you want to delete this journal entry? This cannot be undone.".to_string(),
                    confirm_label: "Delete".to_string(),
                    busy: deleting(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn make_entry(id: &str, day: u32) -> JournalEntry {
        JournalEntry {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            title: format!("Entry {}", id),
            entry_date: NaiveDate::from_ymd_opt(2025, 4, day).unwrap(),
            image_url: None,
            content: "Some thoughts".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 4, day, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 4, day, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_upsert_inserts_in_date_order() {
        let mut entries = vec![make_entry("a", 10), make_entry("b", 2)];
        upsert(&mut entries, make_entry("c", 5));
        let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
    }

    #[test]
    fn test_upsert_replaces_edited_entry() {
        let mut entries = vec![make_entry("a", 10), make_entry("b", 2)];
        let mut edited = make_entry("b", 12);
        edited.title = "Renamed".to_string();
        upsert(&mut entries, edited);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "b");
        assert_eq!(entries[0].title, "Renamed");
    }
}
