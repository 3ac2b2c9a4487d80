use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{check_reply, TherapyBackend, TherapyError};
use crate::domain::models::{
    ContinueConversationRequest, StartConversationRequest, TherapyReply, TherapyStats,
};

#[derive(Clone)]
pub struct HttpTherapyClient {
    base_url: String,
    client: Client,
}

impl HttpTherapyClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TherapyError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, TherapyError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TherapyError::Http(status.as_u16()));
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl TherapyBackend for HttpTherapyClient {
    async fn start_conversation(&self, user_input: &str) -> Result<TherapyReply, TherapyError> {
        let body = StartConversationRequest {
            user_input: user_input.to_string(),
        };
        let reply = self
            .send(self.client.post(self.endpoint("start_conversation")).json(&body))
            .await?;
        check_reply(reply, "Failed to start conversation")
    }

    async fn continue_conversation(
        &self,
        session_id: &str,
        user_input: &str,
    ) -> Result<TherapyReply, TherapyError> {
        if session_id.is_empty() {
            return Err(TherapyError::NoActiveSession);
        }
        let body = ContinueConversationRequest {
            session_id: session_id.to_string(),
            user_input: user_input.to_string(),
        };
        let reply = self
            .send(self.client.post(self.endpoint("continue_conversation")).json(&body))
            .await?;
        check_reply(reply, "Failed to continue conversation")
    }

    async fn get_stats(&self, session_id: &str) -> Result<TherapyStats, TherapyError> {
        if session_id.is_empty() {
            return Err(TherapyError::NoActiveSession);
        }
        let url = self.endpoint(&format!("get_stats/{}", urlencoding::encode(session_id)));
        self.send(self.client.get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let client = HttpTherapyClient::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint("start_conversation"), "http://localhost:8000/start_conversation");
    }

    #[tokio::test]
    async fn test_missing_session_is_rejected_before_sending() {
        let client = HttpTherapyClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        let err = client.continue_conversation("", "hi").await.unwrap_err();
        assert!(matches!(err, TherapyError::NoActiveSession));
        let err = client.get_stats("").await.unwrap_err();
        assert!(matches!(err, TherapyError::NoActiveSession));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        let client = HttpTherapyClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        let err = client.start_conversation("hello").await.unwrap_err();
        assert!(matches!(err, TherapyError::Transport(_)));
    }
}
