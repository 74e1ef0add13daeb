use std::fmt;

use clap::ValueEnum;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// How a word was studied. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyType {
    #[default]
    Flashcard,
    Quiz,
    Spelling,
    Listening,
}

impl StudyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudyType::Flashcard => "flashcard",
            StudyType::Quiz => "quiz",
            StudyType::Spelling => "spelling",
            StudyType::Listening => "listening",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "flashcard" => Some(StudyType::Flashcard),
            "quiz" => Some(StudyType::Quiz),
            "spelling" => Some(StudyType::Spelling),
            "listening" => Some(StudyType::Listening),
            _ => None,
        }
    }
}

impl fmt::Display for StudyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for StudyType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for StudyType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        StudyType::parse(text).ok_or_else(|| {
            FromSqlError::Other(format!("unknown study type '{}'", text).into())
        })
    }
}
