use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, Result};

const SNIPPET_CHARS: usize = 100;

/// Row of the `journal_entries` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub entry_date: NaiveDate,
    #[serde(default)]
    pub image_url: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JournalEntry {
    pub fn snippet(&self) -> String {
        snippet_of(&self.content)
    }

    pub fn to_draft(&self) -> JournalDraft {
        JournalDraft {
            title: self.title.clone(),
            entry_date: Some(self.entry_date),
            image_url: self.image_url.clone().unwrap_or_default(),
            content: self.content.clone(),
        }
    }
}

/// Editable form state for a journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct JournalDraft {
    pub title: String,
    pub entry_date: Option<NaiveDate>,
    pub image_url: String,
    pub content: String,
}

impl JournalDraft {
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            entry_date: Some(today),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        if self.entry_date.is_none() {
            return Err(AppError::validation("Date is required"));
        }
        if self.content.trim().is_empty() {
            return Err(AppError::validation("Content is required"));
        }
        Ok(())
    }

    /// Column values for insert/update, after validation
    pub fn into_row(self, user_id: &str) -> Result<JournalRow> {
        self.validate()?;
        let image_url = self.image_url.trim();
        Ok(JournalRow {
            user_id: user_id.to_string(),
            title: self.title.trim().to_string(),
            entry_date: self.entry_date.ok_or_else(|| AppError::validation("Date is required"))?,
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
            content: self.content,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalRow {
    pub user_id: String,
    pub title: String,
    pub entry_date: NaiveDate,
    pub image_url: Option<String>,
    pub content: String,
}

pub fn snippet_of(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(SNIPPET_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_draft() -> JournalDraft {
        JournalDraft {
            title: "  Exam week ".to_string(),
            entry_date: NaiveDate::from_ymd_opt(2025, 3, 13),
            image_url: " ".to_string(),
            content: "Felt stretched but managed.".to_string(),
        }
    }

    #[test]
    fn test_validate_requires_fields() {
        assert!(make_draft().validate().is_ok());

        let mut draft = make_draft();
        draft.title = " ".into();
        assert_eq!(draft.validate().unwrap_err().to_string(), "Title is required");

        let mut draft = make_draft();
        draft.entry_date = None;
        assert_eq!(draft.validate().unwrap_err().to_string(), "Date is required");

        let mut draft = make_draft();
        draft.content.clear();
        assert_eq!(draft.validate().unwrap_err().to_string(), "Content is required");
    }

    #[test]
    fn test_into_row_trims_and_drops_blank_image() {
        let row = make_draft().into_row("user-1").unwrap();
        assert_eq!(row.title, "Exam week");
        assert_eq!(row.image_url, None);
        assert_eq!(row.user_id, "user-1");
    }

    #[test]
    fn test_snippet_truncates_long_content() {
        let long = "a".repeat(150);
        let snippet = snippet_of(&long);
        assert_eq!(snippet.len(), 103);
        assert!(snippet.ends_with("..."));
        assert_eq!(snippet_of("short"), "short");
    }

    #[test]
    fn test_draft_for_today_prefills_date() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let draft = JournalDraft::for_today(today);
        assert_eq!(draft.entry_date, Some(today));
        assert!(draft.title.is_empty());
    }
}
