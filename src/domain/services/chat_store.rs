//! Client-side store for chats, settings and UI flags.
//!
//! The whole struct is persisted as JSON in local storage, so every field
//! carries serde defaults to survive older saved shapes.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::models::{Chat, Message, Settings, SettingsPatch};

pub const STORE_KEY: &str = "unimind-store";
const TITLE_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChatStore {
    #[serde(default)]
    pub chats: Vec<Chat>,
    #[serde(default)]
    pub current_chat_id: Option<String>,
    #[serde(default)]
    pub sidebar_collapsed: bool,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub disclaimer_accepted: bool,
}

impl ChatStore {
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Prepend a new chat and make it current, returning its id
    pub fn create_chat(&mut self, title: Option<String>, is_therapy_session: bool) -> String {
        let chat = Chat::new(title, is_therapy_session);
        let id = chat.id.clone();
        self.chats.insert(0, chat);
        self.current_chat_id = Some(id.clone());
        id
    }

    pub fn current(&self) -> Option<&Chat> {
        let id = self.current_chat_id.as_ref()?;
        self.chats.iter().find(|c| &c.id == id)
    }

    pub fn chat(&self, chat_id: &str) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == chat_id)
    }

    pub fn set_current(&mut self, chat_id: Option<String>) {
        self.current_chat_id = chat_id;
    }

    /// Append a message. The first user message names the chat and a reply
    /// with session metadata binds the chat to that therapy session.
    pub fn add_message(&mut self, chat_id: &str, message: Message) -> bool {
        let Some(chat) = self.chats.iter_mut().find(|c| c.id == chat_id) else {
            return false;
        };

        if chat.messages.is_empty() && message.is_user() {
            chat.title = title_from(&message.content);
        }
        if let Some(meta) = &message.metadata {
            chat.session_id = Some(meta.session_id.clone());
        }

        chat.messages.push(message);
        chat.updated_at = Utc::now();
        true
    }

    pub fn rename_chat(&mut self, chat_id: &str, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        match self.chats.iter_mut().find(|c| c.id == chat_id) {
            Some(chat) => {
                chat.title = title.to_string();
                chat.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }

    pub fn delete_chat(&mut self, chat_id: &str) {
        self.chats.retain(|c| c.id != chat_id);
        if self.current_chat_id.as_deref() == Some(chat_id) {
            self.current_chat_id = None;
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.settings.apply(patch);
    }

    pub fn accept_disclaimer(&mut self) {
        self.disclaimer_accepted = true;
    }

    /// Wipe chats and flags, used by "Clear all data" and sign-out
    pub fn clear_all(&mut self) {
        *self = ChatStore::default();
    }
}

fn title_from(content: &str) -> String {
    let content = content.trim();
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(TITLE_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{TherapyMetadata, ThemePreference};

    fn make_reply(session_id: &str) -> Message {
        let mut msg = Message::assistant("Tell me more.");
        msg.metadata = Some(TherapyMetadata {
            session_id: session_id.to_string(),
            interaction_count: 1,
            stage: "exploration".to_string(),
            api_source: "gemini".to_string(),
        });
        msg
    }

    #[test]
    fn test_create_chat_prepends_and_selects() {
        let mut store = ChatStore::default();
        let first = store.create_chat(None, true);
        let second = store.create_chat(None, false);
        assert_eq!(store.chats[0].id, second);
        assert_eq!(store.chats[1].id, first);
        assert_eq!(store.current().map(|c| c.id.clone()), Some(second));
    }

    #[test]
    fn test_first_user_message_sets_title() {
        let mut store = ChatStore::default();
        let id = store.create_chat(None, true);
        let long = "I have been feeling overwhelmed with deadlines and I can't sleep at all";
        assert!(store.add_message(&id, Message::user(long)));
        let title = store.chat(&id).unwrap().title.clone();
        assert_eq!(title.chars().count(), 53);
        assert!(title.ends_with("..."));

        // Later messages leave the title alone
        store.add_message(&id, Message::user("Another thought"));
        assert_eq!(store.chat(&id).unwrap().title, title);
    }

    #[test]
    fn test_short_first_message_is_kept_whole() {
        let mut store = ChatStore::default();
        let id = store.create_chat(None, false);
        store.add_message(&id, Message::user("Hi there"));
        assert_eq!(store.chat(&id).unwrap().title, "Hi there");
    }

    #[test]
    fn test_reply_metadata_binds_session() {
        let mut store = ChatStore::default();
        let id = store.create_chat(None, true);
        store.add_message(&id, Message::user("hello"));
        store.add_message(&id, make_reply("sess-42"));
        assert_eq!(store.chat(&id).unwrap().session_id.as_deref(), Some("sess-42"));
        assert_eq!(store.chat(&id).unwrap().messages.len(), 2);
    }

    #[test]
    fn test_add_message_to_unknown_chat() {
        let mut store = ChatStore::default();
        assert!(!store.add_message("missing", Message::user("hello")));
    }

    #[test]
    fn test_delete_current_clears_selection() {
        let mut store = ChatStore::default();
        let keep = store.create_chat(None, false);
        let drop = store.create_chat(None, false);
        store.delete_chat(&drop);
        assert_eq!(store.current_chat_id, None);
        assert_eq!(store.chats.len(), 1);

        store.set_current(Some(keep.clone()));
        store.delete_chat("other");
        assert_eq!(store.current_chat_id, Some(keep));
    }

    #[test]
    fn test_rename_rejects_blank() {
        let mut store = ChatStore::default();
        let id = store.create_chat(None, false);
        assert!(!store.rename_chat(&id, "   "));
        assert!(store.rename_chat(&id, " Exam stress "));
        assert_eq!(store.chat(&id).unwrap().title, "Exam stress");
    }

    #[test]
    fn test_json_round_trip_and_corrupt_input() {
        let mut store = ChatStore::default();
        store.create_chat(None, true);
        store.update_settings(SettingsPatch {
            theme: Some(ThemePreference::Light),
            ..Default::default()
        });
        store.accept_disclaimer();
        let restored = ChatStore::from_json(&store.to_json());
        assert_eq!(restored, store);

        assert_eq!(ChatStore::from_json("{not json"), ChatStore::default());
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let mut store = ChatStore::default();
        store.create_chat(None, true);
        store.toggle_sidebar();
        store.accept_disclaimer();
        store.clear_all();
        assert_eq!(store, ChatStore::default());
    }
}
