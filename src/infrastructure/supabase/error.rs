use reqwest::StatusCode;
use thiserror::Error;

pub const INVALID_CREDENTIALS: &str = "Invalid login credentials";
pub const EMAIL_NOT_CONFIRMED: &str = "Please verify your email before signing in";
pub const ALREADY_REGISTERED: &str = "Email already registered";
pub const CAPTCHA_FAILED: &str = "CAPTCHA verification failed on server. Please try again.";

#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("{message}")]
    Http { status: StatusCode, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Session expired, please sign in again")]
    MissingSession,

    #[error("{}", CAPTCHA_FAILED)]
    Captcha,
}

impl SupabaseError {
    /// Build an error from a non-2xx GoTrue or PostgREST response body
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = error_message(body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

        let lower = message.to_lowercase();
        if lower.contains("captcha") || lower.contains("verification failed") {
            return SupabaseError::Captcha;
        }
        if status == StatusCode::UNAUTHORIZED && lower.contains("jwt") {
            return SupabaseError::MissingSession;
        }
        SupabaseError::Http { status, message }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SupabaseError::Http { status, .. } => Some(*status),
            SupabaseError::MissingSession => Some(StatusCode::UNAUTHORIZED),
            _ => None,
        }
    }

    /// Message shown after a failed password sign-in
    pub fn sign_in_message(&self) -> String {
        match self {
            SupabaseError::Http { message, .. } if message.contains("Email not confirmed") => {
                EMAIL_NOT_CONFIRMED.to_string()
            }
            SupabaseError::Http { .. } => INVALID_CREDENTIALS.to_string(),
            other => other.to_string(),
        }
    }

    /// Message shown after a failed sign-up
    pub fn sign_up_message(&self) -> String {
        match self {
            SupabaseError::Http { message, .. } if message.contains("already registered") => {
                ALREADY_REGISTERED.to_string()
            }
            other => other.to_string(),
        }
    }
}

/// GoTrue uses `msg` or `error_description`, PostgREST uses `message`
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["msg", "error_description", "message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gotrue_message_is_extracted() {
        let err = SupabaseError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"error":"invalid_grant","error_description":"Email not confirmed"}"#,
        );
        assert_eq!(err.to_string(), "Email not confirmed");
        assert_eq!(err.sign_in_message(), EMAIL_NOT_CONFIRMED);
    }

    #[test]
    fn test_other_sign_in_failures_are_generic() {
        let err = SupabaseError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#,
        );
        assert_eq!(err.sign_in_message(), INVALID_CREDENTIALS);
    }

    #[test]
    fn test_already_registered() {
        let err = SupabaseError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"msg":"User already registered"}"#,
        );
        assert_eq!(err.sign_up_message(), ALREADY_REGISTERED);
    }

    #[test]
    fn test_captcha_failure_is_recognised() {
        let err = SupabaseError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"msg":"captcha verification process failed"}"#,
        );
        assert!(matches!(err, SupabaseError::Captcha));
        assert_eq!(err.to_string(), CAPTCHA_FAILED);
    }

    #[test]
    fn test_expired_jwt_maps_to_missing_session() {
        let err = SupabaseError::from_response(
            StatusCode::UNAUTHORIZED,
            r#"{"code":"PGRST301","message":"JWT expired"}"#,
        );
        assert!(matches!(err, SupabaseError::MissingSession));
    }

    #[test]
    fn test_non_json_body_uses_status_reason() {
        let err = SupabaseError::from_response(StatusCode::BAD_GATEWAY, "<html>");
        assert_eq!(err.to_string(), "Bad Gateway");
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    }
}
