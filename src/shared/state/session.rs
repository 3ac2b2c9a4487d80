use crate::domain::models::{AuthSession, AuthUser};

/// What the client knows about the signed-in user
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<AuthSession>,
    /// True until the stored session has been restored or refreshed
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

/// What to do with a session found in storage
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Keep(AuthSession),
    Refresh(String),
    SignedOut,
}

impl SessionState {
    pub fn signed_in(session: AuthSession) -> Self {
        Self {
            session: Some(session),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            session: None,
            loading: false,
        }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn access_token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.access_token.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_anonymous(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_anonymous())
    }

    /// Email or a placeholder for the account button
    pub fn display_name(&self) -> String {
        match self.user() {
            Some(user) if user.is_anonymous => "Guest".to_string(),
            Some(user) => user
                .full_name()
                .map(str::to_string)
                .or_else(|| user.email.clone())
                .unwrap_or_else(|| "Account".to_string()),
            None => "Sign in".to_string(),
        }
    }
}

/// Decide whether a stored session can be used as is
pub fn restore_action(stored: Option<AuthSession>, now_unix: i64) -> SessionAction {
    match stored {
        Some(session) if !session.is_expired(now_unix) => SessionAction::Keep(session),
        Some(session) if !session.refresh_token.is_empty() => {
            SessionAction::Refresh(session.refresh_token)
        }
        _ => SessionAction::SignedOut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_session(expires_at: i64, refresh: &str, anonymous: bool) -> AuthSession {
        AuthSession {
            access_token: "access".into(),
            refresh_token: refresh.into(),
            expires_at,
            user: AuthUser {
                id: "u1".into(),
                email: Some("sam@example.ac.uk".into()),
                phone: None,
                is_anonymous: anonymous,
                user_metadata: serde_json::Value::Null,
            },
        }
    }

    #[test]
    fn test_fresh_session_is_kept() {
        let action = restore_action(Some(make_session(10_000, "r", false)), 1_000);
        assert!(matches!(action, SessionAction::Keep(_)));
    }

    #[test]
    fn test_expired_session_is_refreshed() {
        let action = restore_action(Some(make_session(1_000, "r", false)), 2_000);
        assert_eq!(action, SessionAction::Refresh("r".into()));
    }

    #[test]
    fn test_expired_without_refresh_token_signs_out() {
        assert_eq!(
            restore_action(Some(make_session(1_000, "", false)), 2_000),
            SessionAction::SignedOut
        );
        assert_eq!(restore_action(None, 0), SessionAction::SignedOut);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(SessionState::signed_out().display_name(), "Sign in");
        let guest = SessionState::signed_in(make_session(0, "r", true));
        assert_eq!(guest.display_name(), "Guest");
        assert!(guest.is_anonymous());
        let user = SessionState::signed_in(make_session(0, "r", false));
        assert_eq!(user.display_name(), "sam@example.ac.uk");
    }
}
