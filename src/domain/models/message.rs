use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::therapy::TherapyReply;

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    User,
    Assistant,
    SystemError,
}

/// Therapy-session bookkeeping attached to assistant replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapyMetadata {
    pub session_id: String,
    pub interaction_count: u32,
    pub stage: String,
    pub api_source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Option<TherapyMetadata>,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            metadata: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Assistant message carrying the session details of a therapy reply
    pub fn from_reply(reply: &TherapyReply) -> Self {
        let mut message = Self::assistant(reply.response.clone());
        message.metadata = Some(TherapyMetadata {
            session_id: reply.session_id.clone(),
            interaction_count: reply.interaction_count,
            stage: reply.stage.clone(),
            api_source: reply.api_source.clone(),
        });
        message
    }

    pub fn system_error(error: &str) -> Self {
        Self::new(
            Role::SystemError,
            format!(
                "I'm sorry, I'm having trouble connecting to the therapy service right now. {}",
                error
            ),
        )
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_reply() -> TherapyReply {
        TherapyReply {
            response: "How are you feeling today?".to_string(),
            session_id: "sess-1234".to_string(),
            interaction_count: 1,
            stage: "opening".to_string(),
            api_source: "gemini".to_string(),
            success: true,
            error: None,
        }
    }

    #[test]
    fn test_from_reply_copies_session_fields() {
        let msg = Message::from_reply(&make_reply());
        assert_eq!(msg.role, Role::Assistant);
        let meta = msg.metadata.unwrap();
        assert_eq!(meta.session_id, "sess-1234");
        assert_eq!(meta.interaction_count, 1);
        assert_eq!(meta.api_source, "gemini");
    }

    #[test]
    fn test_system_error_wraps_cause() {
        let msg = Message::system_error("timeout");
        assert_eq!(msg.role, Role::SystemError);
        assert!(msg.content.ends_with("right now. timeout"));
    }

    #[test]
    fn test_role_serializes_camel_case() {
        let json = serde_json::to_string(&Role::SystemError).unwrap();
        assert_eq!(json, "\"systemError\"");
    }
}
