//! Process-wide services used by the server functions

use dioxus::prelude::ServerFnError;
use once_cell::sync::OnceCell;

use crate::config::AppConfig;
use crate::domain::models::AuthUser;
use crate::infrastructure::supabase::{token_cache, SupabaseClient, SupabaseError};
use crate::shared::logging::{log_backend_error, LogOperation};

pub struct ServerContext {
    pub config: AppConfig,
    pub supabase: SupabaseClient,
}

static CONTEXT: OnceCell<ServerContext> = OnceCell::new();

/// Install the context once at startup; later calls are ignored
pub fn init(config: AppConfig) -> Result<(), SupabaseError> {
    let supabase = SupabaseClient::from_config(&config)?;
    let _ = CONTEXT.set(ServerContext { config, supabase });
    Ok(())
}

pub fn context() -> Result<&'static ServerContext, ServerFnError> {
    CONTEXT
        .get()
        .ok_or_else(|| ServerFnError::new("Server is not configured"))
}

/// Log a backend failure and convert it for the client
pub fn backend_error(operation: LogOperation, action: &str, error: SupabaseError) -> ServerFnError {
    log_backend_error(operation, action, &error.to_string());
    ServerFnError::new(error.to_string())
}

pub fn validation_error(error: crate::shared::errors::AppError) -> ServerFnError {
    ServerFnError::new(error.to_string())
}

/// Resolve the caller from their access token
pub async fn authenticate(access_token: &str) -> Result<AuthUser, ServerFnError> {
    if access_token.is_empty() {
        return Err(ServerFnError::new(SupabaseError::MissingSession.to_string()));
    }
    let ctx = context()?;
    token_cache::verify_token(&ctx.supabase, access_token)
        .await
        .map_err(|e| backend_error(LogOperation::Auth, "verify_token", e))
}
