//! GoTrue endpoints

use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::{read_body, SupabaseClient, SupabaseError, SupabaseResult};
use crate::domain::models::{AccountUpdate, AuthSession, AuthUser, SignUpOutcome};

/// Token grant as returned by `/token` and `/signup`
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

impl TokenResponse {
    pub fn into_session(self, now_unix: i64) -> AuthSession {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now_unix + secs))
            .unwrap_or(now_unix);
        AuthSession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

fn with_captcha(mut body: Map<String, Value>, captcha_token: Option<&str>) -> Value {
    if let Some(token) = captcha_token {
        body.insert(
            "gotrue_meta_security".to_string(),
            json!({ "captcha_token": token }),
        );
    }
    Value::Object(body)
}

pub fn sign_up_body(email: &str, password: &str, full_name: &str, captcha_token: Option<&str>) -> Value {
    let mut body = Map::new();
    body.insert("email".into(), json!(email));
    body.insert("password".into(), json!(password));
    body.insert("data".into(), json!({ "full_name": full_name }));
    with_captcha(body, captcha_token)
}

pub fn anonymous_sign_up_body(captcha_token: Option<&str>) -> Value {
    let mut body = Map::new();
    body.insert("data".into(), json!({}));
    with_captcha(body, captcha_token)
}

/// Only the fields being changed are sent; an empty phone clears it
pub fn update_user_body(update: &AccountUpdate, captcha_token: Option<&str>) -> Value {
    let mut body = Map::new();
    if let Some(email) = &update.email {
        body.insert("email".into(), json!(email));
    }
    if let Some(password) = &update.password {
        body.insert("password".into(), json!(password));
    }
    if let Some(phone) = &update.phone {
        let phone = phone.trim();
        body.insert(
            "phone".into(),
            if phone.is_empty() { Value::Null } else { json!(phone) },
        );
    }
    with_captcha(body, captcha_token)
}

/// Interpret a `/signup` response body
pub fn parse_sign_up(body: &str, now_unix: i64) -> SupabaseResult<SignUpOutcome> {
    let value: Value = serde_json::from_str(body)?;
    if value.get("access_token").is_some() {
        let tokens: TokenResponse = serde_json::from_value(value)?;
        return Ok(SignUpOutcome::SignedIn(tokens.into_session(now_unix)));
    }

    // With confirmations on, an existing address comes back as a user with no identities
    let user = value.get("user").unwrap_or(&value);
    let no_identities = user
        .get("identities")
        .and_then(Value::as_array)
        .is_some_and(|ids| ids.is_empty());
    if no_identities {
        return Err(SupabaseError::Http {
            status: reqwest::StatusCode::UNPROCESSABLE_ENTITY,
            message: "User already registered".to_string(),
        });
    }
    Ok(SignUpOutcome::ConfirmationSent)
}

pub fn oauth_authorize_url(base_url: &str, provider: &str, redirect_to: &str) -> String {
    format!(
        "{}/auth/v1/authorize?provider={}&redirect_to={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(provider),
        urlencoding::encode(redirect_to)
    )
}

impl SupabaseClient {
    async fn token_grant(&self, grant_type: &str, body: Value) -> SupabaseResult<AuthSession> {
        let request = self
            .client
            .post(self.auth_url("token"))
            .query(&[("grant_type", grant_type)])
            .json(&body);
        let response = self.authorize(request, None).send().await?;
        let body = read_body(response).await?;
        let tokens: TokenResponse = serde_json::from_str(&body)?;
        Ok(tokens.into_session(Utc::now().timestamp()))
    }

    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> SupabaseResult<AuthSession> {
        self.token_grant("password", json!({ "email": email, "password": password }))
            .await
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> SupabaseResult<AuthSession> {
        if refresh_token.is_empty() {
            return Err(SupabaseError::MissingSession);
        }
        self.token_grant("refresh_token", json!({ "refresh_token": refresh_token }))
            .await
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        captcha_token: Option<&str>,
    ) -> SupabaseResult<SignUpOutcome> {
        let request = self
            .client
            .post(self.auth_url("signup"))
            .json(&sign_up_body(email, password, full_name, captcha_token));
        let response = self.authorize(request, None).send().await?;
        let body = read_body(response).await?;
        parse_sign_up(&body, Utc::now().timestamp())
    }

    /// Anonymous users are created by a sign-up without credentials
    pub async fn sign_in_anonymously(&self, captcha_token: Option<&str>) -> SupabaseResult<AuthSession> {
        let request = self
            .client
            .post(self.auth_url("signup"))
            .json(&anonymous_sign_up_body(captcha_token));
        let response = self.authorize(request, None).send().await?;
        let body = read_body(response).await?;
        let tokens: TokenResponse = serde_json::from_str(&body)?;
        Ok(tokens.into_session(Utc::now().timestamp()))
    }

    pub async fn get_user(&self, access_token: &str) -> SupabaseResult<AuthUser> {
        let request = self.client.get(self.auth_url("user"));
        let response = self.authorize(request, Some(access_token)).send().await?;
        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn update_user(
        &self,
        access_token: &str,
        update: &AccountUpdate,
        captcha_token: Option<&str>,
    ) -> SupabaseResult<AuthUser> {
        let request = self
            .client
            .put(self.auth_url("user"))
            .json(&update_user_body(update, captcha_token));
        let response = self.authorize(request, Some(access_token)).send().await?;
        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn sign_out(&self, access_token: &str) -> SupabaseResult<()> {
        let request = self.client.post(self.auth_url("logout"));
        let response = self.authorize(request, Some(access_token)).send().await?;
        read_body(response).await.map(|_| ())
    }

    pub fn oauth_url(&self, provider: &str, redirect_to: &str) -> String {
        oauth_authorize_url(self.base_url(), provider, redirect_to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_JSON: &str = r#"{"id":"u1","email":"sam@example.ac.uk","phone":"","is_anonymous":false,"user_metadata":{"full_name":"Sam"}}"#;

    #[test]
    fn test_sign_up_body_carries_name_and_captcha() {
        let body = sign_up_body("sam@example.ac.uk", "secret1", "Sam", Some("tok"));
        assert_eq!(body["data"]["full_name"], "Sam");
        assert_eq!(body["gotrue_meta_security"]["captcha_token"], "tok");

        let body = sign_up_body("sam@example.ac.uk", "secret1", "Sam", None);
        assert!(body.get("gotrue_meta_security").is_none());
    }

    #[test]
    fn test_update_body_sends_null_for_empty_phone() {
        let update = AccountUpdate { phone: Some(String::new()), ..Default::default() };
        let body = update_user_body(&update, None);
        assert!(body["phone"].is_null());
        assert!(body.get("email").is_none());
        assert!(body.get("password").is_none());
    }

    #[test]
    fn test_update_body_only_changed_fields() {
        let update = AccountUpdate { password: Some("newpass".into()), ..Default::default() };
        let body = update_user_body(&update, Some("cap"));
        assert_eq!(body["password"], "newpass");
        assert!(body.get("phone").is_none());
        assert_eq!(body["gotrue_meta_security"]["captcha_token"], "cap");
    }

    #[test]
    fn test_token_response_uses_expires_in_when_needed() {
        let body = format!(
            r#"{{"access_token":"a","refresh_token":"r","expires_in":3600,"user":{}}}"#,
            USER_JSON
        );
        let tokens: TokenResponse = serde_json::from_str(&body).unwrap();
        let session = tokens.into_session(100);
        assert_eq!(session.expires_at, 3_700);
        assert_eq!(session.user.full_name(), Some("Sam"));
    }

    #[test]
    fn test_parse_sign_up_confirmation_sent() {
        let body = r#"{"id":"u1","email":"sam@example.ac.uk","identities":[{"id":"i1"}]}"#;
        assert_eq!(parse_sign_up(body, 0).unwrap(), SignUpOutcome::ConfirmationSent);
    }

    #[test]
    fn test_parse_sign_up_signed_in() {
        let body = format!(
            r#"{{"access_token":"a","refresh_token":"r","expires_at":999,"user":{}}}"#,
            USER_JSON
        );
        match parse_sign_up(&body, 0).unwrap() {
            SignUpOutcome::SignedIn(session) => assert_eq!(session.expires_at, 999),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_parse_sign_up_existing_address() {
        let body = r#"{"id":"u1","email":"sam@example.ac.uk","identities":[]}"#;
        let err = parse_sign_up(body, 0).unwrap_err();
        assert_eq!(err.sign_up_message(), super::super::error::ALREADY_REGISTERED);
    }

    #[test]
    fn test_oauth_url_is_encoded() {
        let url = oauth_authorize_url("https://abc.supabase.co/", "google", "http://localhost:8080/terms");
        assert_eq!(
            url,
            "https://abc.supabase.co/auth/v1/authorize?provider=google&redirect_to=http%3A%2F%2Flocalhost%3A8080%2Fterms"
        );
    }
}
