use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::message::Message;

pub const DEFAULT_CHAT_TITLE: &str = "New Conversation";
pub const DEFAULT_THERAPY_TITLE: &str = "New Therapy Session";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Remote therapy session this chat continues, once the first reply arrives
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub is_therapy_session: bool,
}

impl Chat {
    pub fn new(title: Option<String>, is_therapy_session: bool) -> Self {
        let now = Utc::now();
        let default_title = if is_therapy_session {
            DEFAULT_THERAPY_TITLE
        } else {
            DEFAULT_CHAT_TITLE
        };
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.unwrap_or_else(|| default_title.to_string()),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
            session_id: None,
            is_therapy_session,
        }
    }

    /// Last eight characters of the session id, for the chat footer
    pub fn short_session_id(&self) -> Option<String> {
        self.session_id.as_ref().map(|id| {
            let chars: Vec<char> = id.chars().collect();
            let start = chars.len().saturating_sub(8);
            chars[start..].iter().collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_titles() {
        assert_eq!(Chat::new(None, false).title, DEFAULT_CHAT_TITLE);
        assert_eq!(Chat::new(None, true).title, DEFAULT_THERAPY_TITLE);
        assert_eq!(Chat::new(Some("Exams".into()), true).title, "Exams");
    }

    #[test]
    fn test_short_session_id() {
        let mut chat = Chat::new(None, true);
        assert_eq!(chat.short_session_id(), None);
        chat.session_id = Some("0123456789abcdef".to_string());
        assert_eq!(chat.short_session_id().as_deref(), Some("89abcdef"));
        chat.session_id = Some("abc".to_string());
        assert_eq!(chat.short_session_id().as_deref(), Some("abc"));
    }
}
