//! Tokens handed back in the URL fragment after an OAuth redirect
//!
//! The provider redirects to `/#access_token=...&refresh_token=...&expires_in=3600&token_type=bearer`.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix seconds
    pub expires_at: i64,
}

/// Parse an OAuth redirect fragment. `now` is unix seconds, used when the
/// fragment carries only `expires_in`.
pub fn parse_oauth_fragment(fragment: &str, now: i64) -> Option<OAuthTokens> {
    let fragment = fragment.trim_start_matches('#');
    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_at = None;
    let mut expires_in = None;

    for pair in fragment.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = urlencoding::decode(value).ok()?.into_owned();
        match key {
            "access_token" => access_token = Some(value),
            "refresh_token" => refresh_token = Some(value),
            "expires_at" => expires_at = value.parse::<i64>().ok(),
            "expires_in" => expires_in = value.parse::<i64>().ok(),
            _ => {}
        }
    }

    let access_token = access_token.filter(|t| !t.is_empty())?;
    let expires_at = expires_at
        .or_else(|| expires_in.map(|secs| now + secs))
        .or_else(|| jwt_expiry(&access_token))?;

    Some(OAuthTokens {
        access_token,
        refresh_token: refresh_token.unwrap_or_default(),
        expires_at,
    })
}

/// Read the `exp` claim of a JWT without verifying it
pub fn jwt_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_i64()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_jwt(exp: i64) -> String {
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u1","exp":{}}}"#, exp));
        format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", payload)
    }

    #[test]
    fn test_parse_fragment_with_expires_in() {
        let tokens =
            parse_oauth_fragment("#access_token=abc&refresh_token=def&expires_in=3600&token_type=bearer", 1_000)
                .unwrap();
        assert_eq!(tokens.access_token, "abc");
        assert_eq!(tokens.refresh_token, "def");
        assert_eq!(tokens.expires_at, 4_600);
    }

    #[test]
    fn test_expires_at_wins_over_expires_in() {
        let tokens = parse_oauth_fragment("access_token=abc&expires_at=9999&expires_in=10", 0).unwrap();
        assert_eq!(tokens.expires_at, 9999);
    }

    #[test]
    fn test_falls_back_to_jwt_claim() {
        let jwt = make_jwt(1_700_000_000);
        let tokens = parse_oauth_fragment(&format!("access_token={}&refresh_token=r", jwt), 0).unwrap();
        assert_eq!(tokens.expires_at, 1_700_000_000);
    }

    #[test]
    fn test_fragment_without_token_is_ignored() {
        assert!(parse_oauth_fragment("", 0).is_none());
        assert!(parse_oauth_fragment("#error=access_denied&error_description=nope", 0).is_none());
    }

    #[test]
    fn test_jwt_expiry_rejects_garbage() {
        assert!(jwt_expiry("not-a-jwt").is_none());
        assert_eq!(jwt_expiry(&make_jwt(42)), Some(42));
    }
}
