//! Mood entry server functions (`mood_entries` table)

use dioxus::prelude::*;

use crate::domain::models::MoodEntry;

pub const MOOD_TABLE: &str = "mood_entries";

/// All of the caller's entries, newest first
#[server]
pub async fn list_mood_entries(access_token: String) -> Result<Vec<MoodEntry>, ServerFnError> {
    use super::context::{authenticate, backend_error, context};
    use crate::infrastructure::supabase::Query;
    use crate::shared::logging::{log_table_operation, LogOperation};

    let user = authenticate(&access_token).await?;
    let query = Query::new()
        .select("*")
        .eq("user_id", &user.id)
        .order("created_at", false);

    let entries: Vec<MoodEntry> = context()?
        .supabase
        .select(MOOD_TABLE, &query, &access_token)
        .await
        .map_err(|e| backend_error(LogOperation::MoodEntries, "list", e))?;
    log_table_operation(LogOperation::MoodEntries, "list", &user.id, entries.len());
    Ok(entries)
}

#[server]
pub async fn add_mood_entry(
    access_token: String,
    mood_rating: i32,
    note: String,
) -> Result<MoodEntry, ServerFnError> {
    use super::context::{authenticate, backend_error, context, validation_error};
    use crate::domain::models::mood::validate_rating;
    use crate::domain::models::NewMoodEntry;
    use crate::shared::logging::{log_table_operation, LogOperation};

    validate_rating(mood_rating).map_err(validation_error)?;
    let user = authenticate(&access_token).await?;
    let row = NewMoodEntry::new(&user.id, mood_rating, &note).map_err(validation_error)?;

    let inserted: Vec<MoodEntry> = context()?
        .supabase
        .insert(MOOD_TABLE, &row, &access_token)
        .await
        .map_err(|e| backend_error(LogOperation::MoodEntries, "insert", e))?;
    log_table_operation(LogOperation::MoodEntries, "insert", &user.id, inserted.len());

    inserted
        .into_iter()
        .next()
        .ok_or_else(|| ServerFnError::new("Failed to save mood entry"))
}

/// Delete every entry belonging to the caller
#[server]
pub async fn reset_mood_entries(access_token: String) -> Result<(), ServerFnError> {
    use super::context::{authenticate, backend_error, context};
    use crate::infrastructure::supabase::Query;
    use crate::shared::logging::{log_table_operation, LogOperation};

    let user = authenticate(&access_token).await?;
    let query = Query::new().eq("user_id", &user.id);
    context()?
        .supabase
        .delete(MOOD_TABLE, &query, &access_token)
        .await
        .map_err(|e| backend_error(LogOperation::MoodEntries, "reset", e))?;
    log_table_operation(LogOperation::MoodEntries, "reset", &user.id, 0);
    Ok(())
}
