//! Supabase client: GoTrue auth (`/auth/v1`) and PostgREST tables (`/rest/v1`)

pub mod auth;
pub mod error;
pub mod rest;
pub mod token_cache;

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::config::AppConfig;

pub use auth::oauth_authorize_url;
pub use error::SupabaseError;
pub use rest::Query;

pub type SupabaseResult<T> = std::result::Result<T, SupabaseError>;

#[derive(Clone)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
    client: Client,
}

impl SupabaseClient {
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> SupabaseResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            client,
        })
    }

    pub fn from_config(config: &AppConfig) -> SupabaseResult<Self> {
        Self::new(
            &config.supabase_url,
            &config.supabase_anon_key,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Attach `apikey` and a bearer token; the anon key stands in when there is no user token
    pub(crate) fn authorize(&self, request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(token.unwrap_or(&self.anon_key))
    }
}

/// Turn a response into its body text, or an error for non-2xx statuses
pub(crate) async fn read_body(response: reqwest::Response) -> SupabaseResult<String> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(SupabaseError::from_response(status, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client() -> SupabaseClient {
        SupabaseClient::new("https://abc.supabase.co/", "anon", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_urls() {
        let client = make_client();
        assert_eq!(client.base_url(), "https://abc.supabase.co");
        assert_eq!(client.auth_url("/token"), "https://abc.supabase.co/auth/v1/token");
        assert_eq!(client.rest_url("mood_entries"), "https://abc.supabase.co/rest/v1/mood_entries");
    }

    #[test]
    fn test_authorize_uses_anon_key_without_token() {
        let client = make_client();
        let request = client
            .authorize(client.client.get(client.rest_url("profiles")), None)
            .build()
            .unwrap();
        assert_eq!(request.headers()["apikey"], "anon");
        assert_eq!(request.headers()["authorization"], "Bearer anon");

        let request = client
            .authorize(client.client.get(client.rest_url("profiles")), Some("user-jwt"))
            .build()
            .unwrap();
        assert_eq!(request.headers()["authorization"], "Bearer user-jwt");
    }
}
