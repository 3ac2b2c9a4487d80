//! Client for the external LLM therapy service
//!
//! The service keeps conversation state keyed by `session_id`; this crate only
//! forwards turns and reads usage stats.

pub mod client;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::{TherapyReply, TherapyStats};

pub use client::HttpTherapyClient;

pub const START_FAILED: &str = "Failed to connect to therapy service. Please try again.";
pub const CONTINUE_FAILED: &str = "Failed to get response from therapy service. Please try again.";

#[derive(Debug, Error)]
pub enum TherapyError {
    #[error("Therapy service returned HTTP {0}")]
    Http(u16),

    #[error("{0}")]
    Service(String),

    #[error("Could not reach therapy service: {0}")]
    Transport(String),

    #[error("No active session. Please start a new conversation.")]
    NoActiveSession,
}

impl From<reqwest::Error> for TherapyError {
    fn from(e: reqwest::Error) -> Self {
        TherapyError::Transport(e.to_string())
    }
}

/// Operations the therapy proxy needs from the upstream service
#[async_trait]
pub trait TherapyBackend: Send + Sync {
    async fn start_conversation(&self, user_input: &str) -> Result<TherapyReply, TherapyError>;

    async fn continue_conversation(
        &self,
        session_id: &str,
        user_input: &str,
    ) -> Result<TherapyReply, TherapyError>;

    async fn get_stats(&self, session_id: &str) -> Result<TherapyStats, TherapyError>;
}

/// Reject replies flagged `success: false`
pub fn check_reply(reply: TherapyReply, default_error: &str) -> Result<TherapyReply, TherapyError> {
    if reply.success {
        Ok(reply)
    } else {
        Err(TherapyError::Service(
            reply
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| default_error.to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_reply(success: bool, error: Option<&str>) -> TherapyReply {
        TherapyReply {
            response: "Hello".into(),
            session_id: "s1".into(),
            interaction_count: 1,
            stage: "rapport".into(),
            api_source: "gemini".into(),
            success,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_check_reply_passes_success() {
        assert!(check_reply(make_reply(true, None), "x").is_ok());
    }

    #[test]
    fn test_check_reply_uses_service_error() {
        let err = check_reply(make_reply(false, Some("quota exceeded")), "default").unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn test_check_reply_falls_back_to_default() {
        let err = check_reply(make_reply(false, Some("")), "Failed to start conversation").unwrap_err();
        assert_eq!(err.to_string(), "Failed to start conversation");
    }
}
