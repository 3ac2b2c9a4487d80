use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Personalisation fields the assistant can use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personalisation {
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub user_role: String,
    #[serde(default)]
    pub bot_traits: String,
    #[serde(default)]
    pub additional_info: String,
    #[serde(default = "default_enable_memory")]
    pub enable_memory: bool,
}

fn default_enable_memory() -> bool {
    true
}

impl Default for Personalisation {
    fn default() -> Self {
        Self {
            nickname: String::new(),
            user_role: String::new(),
            bot_traits: String::new(),
            additional_info: String::new(),
            enable_memory: true,
        }
    }
}

/// Row of the `profiles` table, keyed by the auth user id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub user_role: Option<String>,
    #[serde(default)]
    pub bot_traits: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub enable_memory: Option<bool>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProfileRow {
    pub fn from_personalisation(user_id: &str, p: &Personalisation, now: DateTime<Utc>) -> Self {
        Self {
            id: user_id.to_string(),
            nickname: Some(p.nickname.clone()),
            user_role: Some(p.user_role.clone()),
            bot_traits: Some(p.bot_traits.clone()),
            additional_info: Some(p.additional_info.clone()),
            enable_memory: Some(p.enable_memory),
            updated_at: Some(now),
        }
    }
}

impl From<ProfileRow> for Personalisation {
    fn from(row: ProfileRow) -> Self {
        Self {
            nickname: row.nickname.unwrap_or_default(),
            user_role: row.user_role.unwrap_or_default(),
            bot_traits: row.bot_traits.unwrap_or_default(),
            additional_info: row.additional_info.unwrap_or_default(),
            enable_memory: row.enable_memory.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_columns_fall_back_to_defaults() {
        let row: ProfileRow = serde_json::from_str(r#"{"id": "u1", "nickname": null}"#).unwrap();
        let p = Personalisation::from(row);
        assert_eq!(p, Personalisation::default());
        assert!(p.enable_memory);
    }

    #[test]
    fn test_row_from_personalisation() {
        let p = Personalisation {
            nickname: "Sam".into(),
            enable_memory: false,
            ..Default::default()
        };
        let row = ProfileRow::from_personalisation("u1", &p, Utc::now());
        assert_eq!(row.id, "u1");
        assert_eq!(row.nickname.as_deref(), Some("Sam"));
        assert_eq!(row.enable_memory, Some(false));
    }
}
