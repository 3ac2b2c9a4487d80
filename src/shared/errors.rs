use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Not signed in")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Text of a server function error without the transport prefix
pub fn server_error_message(error: &impl std::fmt::Display) -> String {
    let text = error.to_string();
    const PREFIXES: [&str; 3] = [
        "error running server function: ",
        "ServerError: ",
        "Server error: ",
    ];
    let mut message = text.as_str();
    for prefix in PREFIXES {
        if let Some(rest) = message.strip_prefix(prefix) {
            message = rest;
        }
    }
    message.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = AppError::validation("Title is required");
        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn test_server_error_message_strips_prefix() {
        assert_eq!(
            server_error_message(&"error running server function: Invalid login credentials"),
            "Invalid login credentials"
        );
        assert_eq!(server_error_message(&"Email already registered"), "Email already registered");
    }

    #[test]
    fn test_serde_error_converts() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
