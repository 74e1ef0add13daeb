use chrono::NaiveDateTime;
use serde::Serialize;

use super::StudyType;

/// A registered account. The password hash never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub is_admin: bool,
}

/// A word from the shared pool with the names of every category linking it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Word {
    pub id: i64,
    pub english: String,
    pub meaning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_sentence: Option<String>,
    pub wrong_count: i64,
    pub created_at: NaiveDateTime,
    /// One sorted entry per link, so two owners' same-named categories both appear.
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub owner: String,
    pub created_at: NaiveDateTime,
}

/// A category with its creator's display name and how many words it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    #[serde(flatten)]
    pub category: Category,
    pub creator_name: String,
    pub word_count: i64,
}

/// One study attempt, joined with the word's lemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub user_id: String,
    pub word_id: i64,
    pub english: String,
    pub is_correct: bool,
    pub study_type: StudyType,
    pub studied_at: NaiveDateTime,
}
