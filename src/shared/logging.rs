//! Structured logging for server-side operations
//!
//! Every event carries an `operation` field so logs can be filtered by area.

/// Area of the server an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOperation {
    Auth,
    MoodEntries,
    Journal,
    Profile,
    TherapyProxy,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Auth => "auth",
            LogOperation::MoodEntries => "mood_entries",
            LogOperation::Journal => "journal",
            LogOperation::Profile => "profile",
            LogOperation::TherapyProxy => "therapy_proxy",
            LogOperation::Config => "config",
        }
    }
}

/// Keep only the first characters of a user id in logs
fn short_id(user_id: &str) -> &str {
    match user_id.char_indices().nth(8) {
        Some((idx, _)) => &user_id[..idx],
        None => user_id,
    }
}

pub fn log_config_loaded(supabase_url: &str, therapy_api_url: &str) {
    tracing::info!(
        operation = LogOperation::Config.as_str(),
        supabase_url = supabase_url,
        therapy_api_url = therapy_api_url,
        "Configuration loaded"
    );
}

/// Log a sign-in or sign-up attempt; never log the password
pub fn log_auth_attempt(method: &str) {
    tracing::info!(
        operation = LogOperation::Auth.as_str(),
        method = method,
        "Authentication attempt"
    );
}

pub fn log_auth_success(method: &str, user_id: &str) {
    tracing::info!(
        operation = LogOperation::Auth.as_str(),
        method = method,
        user = short_id(user_id),
        "Authentication succeeded"
    );
}

pub fn log_auth_failure(method: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Auth.as_str(),
        method = method,
        error = error,
        "Authentication failed"
    );
}

pub fn log_token_cache(hit: bool) {
    tracing::trace!(
        operation = LogOperation::Auth.as_str(),
        cache_hit = hit,
        "Token verification"
    );
}

pub fn log_token_eviction(evicted: usize) {
    tracing::debug!(
        operation = LogOperation::Auth.as_str(),
        evicted,
        "Evicted expired token cache entries"
    );
}

/// Log a row-level read or write against a Supabase table
pub fn log_table_operation(operation: LogOperation, action: &str, user_id: &str, rows: usize) {
    tracing::debug!(
        operation = operation.as_str(),
        action = action,
        user = short_id(user_id),
        rows = rows,
        "Table operation completed"
    );
}

pub fn log_backend_error(operation: LogOperation, action: &str, error: &str) {
    tracing::error!(
        operation = operation.as_str(),
        action = action,
        error = error,
        "Backend request failed"
    );
}

pub fn log_therapy_forward(endpoint: &str, session_id: Option<&str>) {
    tracing::debug!(
        operation = LogOperation::TherapyProxy.as_str(),
        endpoint = endpoint,
        session_id = session_id.unwrap_or("-"),
        "Forwarding to therapy service"
    );
}

pub fn log_therapy_reply(endpoint: &str, session_id: &str, stage: &str, api_source: &str) {
    tracing::info!(
        operation = LogOperation::TherapyProxy.as_str(),
        endpoint = endpoint,
        session_id = session_id,
        stage = stage,
        api_source = api_source,
        "Therapy service replied"
    );
}

pub fn log_therapy_error(endpoint: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::TherapyProxy.as_str(),
        endpoint = endpoint,
        error = error,
        "Therapy service request failed"
    );
}

/// Span for work done on behalf of one user
#[macro_export]
macro_rules! log_context {
    ($operation:expr) => {
        tracing::info_span!("unimind", operation = $operation.as_str())
    };
    ($operation:expr, $user:expr) => {
        tracing::info_span!("unimind", operation = $operation.as_str(), user = $user)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Auth.as_str(), "auth");
        assert_eq!(LogOperation::MoodEntries.as_str(), "mood_entries");
        assert_eq!(LogOperation::Journal.as_str(), "journal");
        assert_eq!(LogOperation::Profile.as_str(), "profile");
        assert_eq!(LogOperation::TherapyProxy.as_str(), "therapy_proxy");
        assert_eq!(LogOperation::Config.as_str(), "config");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0f8fad5b-d9cb-469f"), "0f8fad5b");
        assert_eq!(short_id("abc"), "abc");
    }
}
