use serde::{Deserialize, Serialize};

/// Body of `POST /start_conversation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartConversationRequest {
    pub user_input: String,
}

/// Body of `POST /continue_conversation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinueConversationRequest {
    pub session_id: String,
    pub user_input: String,
}

/// Reply returned by both conversation endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TherapyReply {
    pub response: String,
    pub session_id: String,
    #[serde(default)]
    pub interaction_count: u32,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub api_source: String,
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

fn default_success() -> bool {
    true
}

/// Usage counters for a therapy session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TherapyStats {
    pub gemini_api_count: u32,
    pub gemini_api_limit: u32,
    pub gemini_api_remaining: u32,
    pub current_api_source: String,
    pub session_id: String,
}

impl TherapyStats {
    /// Footer text such as `API: 12/50 remaining (gemini)`
    pub fn usage_label(&self) -> String {
        format!(
            "API: {}/{} remaining ({})",
            self.gemini_api_remaining, self.gemini_api_limit, self.current_api_source
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_defaults_when_fields_missing() {
        let json = r#"{"response": "hi", "session_id": "abc"}"#;
        let reply: TherapyReply = serde_json::from_str(json).unwrap();
        assert!(reply.success);
        assert_eq!(reply.interaction_count, 0);
        assert!(reply.error.is_none());
    }

    #[test]
    fn test_failed_reply_keeps_error() {
        let json = r#"{"response": "", "session_id": "abc", "success": false, "error": "quota"}"#;
        let reply: TherapyReply = serde_json::from_str(json).unwrap();
        assert!(!reply.success);
        assert_eq!(reply.error.as_deref(), Some("quota"));
    }

    #[test]
    fn test_stats_usage_label() {
        let json = r#"{
            "gemini_api_count": 38,
            "gemini_api_limit": 50,
            "gemini_api_remaining": 12,
            "current_api_source": "gemini",
            "session_id": "abc"
        }"#;
        let stats: TherapyStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.usage_label(), "API: 12/50 remaining (gemini)");
    }
}
