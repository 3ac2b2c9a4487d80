//! Journal server functions (`journal_entries` table)

use dioxus::prelude::*;

use crate::domain::models::{JournalDraft, JournalEntry};

pub const JOURNAL_TABLE: &str = "journal_entries";

/// The caller's entries, latest entry date first
#[server]
pub async fn list_journal_entries(access_token: String) -> Result<Vec<JournalEntry>, ServerFnError> {
    use super::context::{authenticate, backend_error, context};
    use crate::infrastructure::supabase::Query;
    use crate::shared::logging::{log_table_operation, LogOperation};

    let user = authenticate(&access_token).await?;
    let query = Query::new()
        .select("*")
        .eq("user_id", &user.id)
        .order("entry_date", false)
        .order("created_at", false);

    let entries: Vec<JournalEntry> = context()?
        .supabase
        .select(JOURNAL_TABLE, &query, &access_token)
        .await
        .map_err(|e| backend_error(LogOperation::Journal, "list", e))?;
    log_table_operation(LogOperation::Journal, "list", &user.id, entries.len());
    Ok(entries)
}

/// Create an entry, or update `entry_id` when given
#[server]
pub async fn save_journal_entry(
    access_token: String,
    entry_id: Option<String>,
    draft: JournalDraft,
) -> Result<JournalEntry, ServerFnError> {
    use super::context::{authenticate, backend_error, context, validation_error};
    use crate::infrastructure::supabase::Query;
    use crate::shared::logging::{log_table_operation, LogOperation};

    draft.validate().map_err(validation_error)?;
    let user = authenticate(&access_token).await?;
    let row = draft.into_row(&user.id).map_err(validation_error)?;
    let supabase = &context()?.supabase;

    let saved: Vec<JournalEntry> = match &entry_id {
        Some(id) => {
            #[derive(serde::Serialize)]
            struct Patch<'a> {
                #[serde(flatten)]
                row: &'a crate::domain::models::JournalRow,
                updated_at: chrono::DateTime<chrono::Utc>,
            }
            let query = Query::new().eq("id", id).eq("user_id", &user.id);
            let patch = Patch {
                row: &row,
                updated_at: chrono::Utc::now(),
            };
            supabase
                .update(JOURNAL_TABLE, &query, &patch, &access_token)
                .await
                .map_err(|e| backend_error(LogOperation::Journal, "update", e))?
        }
        None => supabase
            .insert(JOURNAL_TABLE, &row, &access_token)
            .await
            .map_err(|e| backend_error(LogOperation::Journal, "insert", e))?,
    };

    let action = if entry_id.is_some() { "update" } else { "insert" };
    log_table_operation(LogOperation::Journal, action, &user.id, saved.len());
    saved
        .into_iter()
        .next()
        .ok_or_else(|| ServerFnError::new("Journal entry not found"))
}

#[server]
pub async fn delete_journal_entry(access_token: String, entry_id: String) -> Result<(), ServerFnError> {
    use super::context::{authenticate, backend_error, context};
    use crate::infrastructure::supabase::Query;
    use crate::shared::logging::{log_table_operation, LogOperation};

    let user = authenticate(&access_token).await?;
    let query = Query::new().eq("id", &entry_id).eq("user_id", &user.id);
    context()?
        .supabase
        .delete(JOURNAL_TABLE, &query, &access_token)
        .await
        .map_err(|e| backend_error(LogOperation::Journal, "delete", e))?;
    log_table_operation(LogOperation::Journal, "delete", &user.id, 1);
    Ok(())
}
