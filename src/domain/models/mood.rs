use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, Result};

pub const MIN_MOOD_RATING: i32 = 1;
pub const MAX_MOOD_RATING: i32 = 5;

/// Row of the `mood_entries` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub user_id: String,
    pub mood_rating: i32,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MoodEntry {
    pub fn level(&self) -> Option<MoodLevel> {
        MoodLevel::from_rating(self.mood_rating)
    }
}

/// Insert payload for `mood_entries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMoodEntry {
    pub user_id: String,
    pub mood_rating: i32,
    pub note: Option<String>,
}

impl NewMoodEntry {
    pub fn new(user_id: impl Into<String>, mood_rating: i32, note: &str) -> Result<Self> {
        validate_rating(mood_rating)?;
        let note = note.trim();
        Ok(Self {
            user_id: user_id.into(),
            mood_rating,
            note: (!note.is_empty()).then(|| note.to_string()),
        })
    }
}

pub fn validate_rating(rating: i32) -> Result<()> {
    if (MIN_MOOD_RATING..=MAX_MOOD_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Mood rating must be between {} and {}",
            MIN_MOOD_RATING, MAX_MOOD_RATING
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodLevel {
    VerySad,
    Sad,
    Neutral,
    Happy,
    VeryHappy,
}

impl MoodLevel {
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::VerySad,
        MoodLevel::Sad,
        MoodLevel::Neutral,
        MoodLevel::Happy,
        MoodLevel::VeryHappy,
    ];

    pub fn from_rating(rating: i32) -> Option<Self> {
        match rating {
            1 => Some(MoodLevel::VerySad),
            2 => Some(MoodLevel::Sad),
            3 => Some(MoodLevel::Neutral),
            4 => Some(MoodLevel::Happy),
            5 => Some(MoodLevel::VeryHappy),
            _ => None,
        }
    }

    pub fn rating(&self) -> i32 {
        match self {
            MoodLevel::VerySad => 1,
            MoodLevel::Sad => 2,
            MoodLevel::Neutral => 3,
            MoodLevel::Happy => 4,
            MoodLevel::VeryHappy => 5,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodLevel::VerySad => "😢",
            MoodLevel::Sad => "😕",
            MoodLevel::Neutral => "😐",
            MoodLevel::Happy => "🙂",
            MoodLevel::VeryHappy => "😊",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodLevel::VerySad => "Very Sad",
            MoodLevel::Sad => "Sad",
            MoodLevel::Neutral => "Neutral",
            MoodLevel::Happy => "Happy",
            MoodLevel::VeryHappy => "Very Happy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_round_trip_through_rating() {
        for level in MoodLevel::ALL {
            assert_eq!(MoodLevel::from_rating(level.rating()), Some(level));
        }
        assert_eq!(MoodLevel::from_rating(0), None);
        assert_eq!(MoodLevel::from_rating(6), None);
    }

    #[test]
    fn test_new_entry_rejects_out_of_range() {
        assert!(NewMoodEntry::new("u1", 0, "").is_err());
        assert!(NewMoodEntry::new("u1", 6, "").is_err());
    }

    #[test]
    fn test_new_entry_drops_blank_note() {
        let entry = NewMoodEntry::new("u1", 4, "   ").unwrap();
        assert_eq!(entry.note, None);
        let entry = NewMoodEntry::new("u1", 2, " rough day ").unwrap();
        assert_eq!(entry.note.as_deref(), Some("rough day"));
    }

    #[test]
    fn test_emoji_labels() {
        assert_eq!(MoodLevel::VerySad.emoji(), "😢");
        assert_eq!(MoodLevel::VeryHappy.label(), "Very Happy");
    }
}
