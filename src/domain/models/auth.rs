use serde::{Deserialize, Serialize};

/// Seconds before expiry at which a session is treated as stale
const EXPIRY_MARGIN_SECS: i64 = 60;

/// User record as returned by GoTrue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

impl AuthUser {
    pub fn full_name(&self) -> Option<&str> {
        self.user_metadata.get("full_name").and_then(|v| v.as_str())
    }

    /// GoTrue returns `""` for unset phones
    pub fn phone_number(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix seconds
    pub expires_at: i64,
    pub user: AuthUser,
}

impl AuthSession {
    pub fn is_expired(&self, now_unix: i64) -> bool {
        now_unix + EXPIRY_MARGIN_SECS >= self.expires_at
    }

    pub fn is_anonymous(&self) -> bool {
        self.user.is_anonymous
    }
}

/// Result of an email sign-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SignUpOutcome {
    /// Email confirmation is disabled and the user is signed in
    SignedIn(AuthSession),
    /// A confirmation email was sent
    ConfirmationSent,
}

/// Fields changed through the account settings form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AccountUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    /// `Some("")` clears the phone number
    pub phone: Option<String>,
}

impl AccountUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.phone.is_none()
    }

    /// Confirmation shown after a successful update
    pub fn success_message(&self) -> &'static str {
        match (self.email.is_some(), self.password.is_some(), self.phone.is_some()) {
            (false, false, true) => "Phone number updated successfully.",
            (true, false, false) => "Email updated. Check your new email for verification.",
            (false, true, false) => "Password updated successfully.",
            (false, false, false) => "Account details saved.",
            _ => "Account details updated successfully.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user() -> AuthUser {
        AuthUser {
            id: "u1".to_string(),
            email: Some("sam@example.ac.uk".to_string()),
            phone: Some(String::new()),
            is_anonymous: false,
            user_metadata: serde_json::json!({ "full_name": "Sam Doe" }),
        }
    }

    #[test]
    fn test_session_expiry_has_margin() {
        let session = AuthSession {
            access_token: "a".into(),
            refresh_token: "r".into(),
            expires_at: 1_000,
            user: make_user(),
        };
        assert!(!session.is_expired(900));
        assert!(session.is_expired(941));
        assert!(session.is_expired(2_000));
    }

    #[test]
    fn test_user_metadata_helpers() {
        let user = make_user();
        assert_eq!(user.full_name(), Some("Sam Doe"));
        assert_eq!(user.phone_number(), None);
    }

    #[test]
    fn test_update_success_messages() {
        let phone_only = AccountUpdate { phone: Some("+447700900123".into()), ..Default::default() };
        assert_eq!(phone_only.success_message(), "Phone number updated successfully.");

        let both = AccountUpdate {
            email: Some("new@example.com".into()),
            password: Some("hunter22".into()),
            phone: None,
        };
        assert_eq!(both.success_message(), "Account details updated successfully.");
        assert!(AccountUpdate::default().is_empty());
    }
}
