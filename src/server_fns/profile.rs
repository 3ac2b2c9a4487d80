//! Personalisation server functions (`profiles` table)

use dioxus::prelude::*;

use crate::domain::models::Personalisation;

pub const PROFILE_TABLE: &str = "profiles";

/// The caller's personalisation, or defaults when no profile row exists yet
#[server]
pub async fn get_profile(access_token: String) -> Result<Personalisation, ServerFnError> {
    use super::context::{authenticate, backend_error, context};
    use crate::domain::models::ProfileRow;
    use crate::infrastructure::supabase::Query;
    use crate::shared::logging::{log_table_operation, LogOperation};

    let user = authenticate(&access_token).await?;
    let query = Query::new()
        .select("id,nickname,user_role,bot_traits,additional_info,enable_memory,updated_at")
        .eq("id", &user.id)
        .limit(1);

    let rows: Vec<ProfileRow> = context()?
        .supabase
        .select(PROFILE_TABLE, &query, &access_token)
        .await
        .map_err(|e| backend_error(LogOperation::Profile, "get", e))?;
    log_table_operation(LogOperation::Profile, "get", &user.id, rows.len());

    Ok(rows.into_iter().next().map(Personalisation::from).unwrap_or_default())
}

#[server]
pub async fn save_profile(
    access_token: String,
    personalisation: Personalisation,
) -> Result<Personalisation, ServerFnError> {
    use super::context::{authenticate, backend_error, context};
    use crate::domain::models::ProfileRow;
    use crate::shared::logging::{log_table_operation, LogOperation};

    let user = authenticate(&access_token).await?;
    if user.is_anonymous {
        return Err(ServerFnError::new("Sign in to save personalisation to your account"));
    }
    let row = ProfileRow::from_personalisation(&user.id, &personalisation, chrono::Utc::now());

    let saved: Vec<ProfileRow> = context()?
        .supabase
        .upsert(PROFILE_TABLE, &row, "id", &access_token)
        .await
        .map_err(|e| backend_error(LogOperation::Profile, "upsert", e))?;
    log_table_operation(LogOperation::Profile, "upsert", &user.id, saved.len());

    Ok(saved
        .into_iter()
        .next()
        .map(Personalisation::from)
        .unwrap_or(personalisation))
}
