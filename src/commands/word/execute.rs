use std::error::Error;

use serde::Serialize;

use super::{WordAction, WordCmd};
use crate::commands::{Execute, Session};
use crate::db::StoreError;
use crate::stores::{AddOutcome, WordStore};
use crate::types::Word;

/// Result of a word command
#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum WordResult {
    Added {
        word_id: i64,
        english: String,
        outcome: AddOutcome,
    },
    Updated {
        word_id: i64,
        updated: bool,
    },
    Deleted {
        word_id: i64,
        deleted: bool,
    },
    Details {
        word: Word,
    },
    Listed {
        title: String,
        words: Vec<Word>,
    },
    Missed {
        word_id: i64,
        wrong_count: i64,
    },
}

fn not_found(word_id: i64) -> StoreError {
    StoreError::NotFound {
        entity: "Word",
        id: word_id.to_string(),
    }
}

impl Execute for WordCmd {
    type Output = WordResult;

    fn execute(self, session: &Session<'_>) -> Result<Self::Output, Box<dyn Error>> {
        let words = WordStore::with_policy(session.db, session.on_duplicate);

        let result = match self.action {
            WordAction::Add(args) => {
                let policy = args.on_duplicate.unwrap_or(session.on_duplicate);
                let (word_id, outcome) = WordStore::with_policy(session.db, policy).add_detailed(
                    &args.english,
                    &args.meaning,
                    args.pos.as_deref(),
                    args.example.as_deref(),
                )?;
                WordResult::Added {
                    word_id,
                    english: args.english.trim().to_string(),
                    outcome,
                }
            }
            WordAction::Update(args) => WordResult::Updated {
                word_id: args.word_id,
                updated: words.update(
                    args.word_id,
                    &args.english,
                    &args.meaning,
                    args.pos.as_deref(),
                    args.example.as_deref(),
                )?,
            },
            WordAction::Delete(args) => WordResult::Deleted {
                word_id: args.word_id,
                deleted: words.delete(args.word_id)?,
            },
            WordAction::Show(args) => {
                let word = words
                    .get_details(args.word_id)?
                    .ok_or_else(|| not_found(args.word_id))?;
                WordResult::Details { word }
            }
            WordAction::List => WordResult::Listed {
                title: "All words".to_string(),
                words: words.get_all()?,
            },
            WordAction::Search(args) => WordResult::Listed {
                title: format!("Search: {}", args.keyword),
                words: words.search(&args.keyword)?,
            },
            WordAction::Wrong(args) => WordResult::Listed {
                title: format!("Missed at least {} time(s)", args.min),
                words: words.get_by_wrong_count(args.min)?,
            },
            WordAction::Miss(args) => {
                if !words.increment_wrong_count(args.word_id)? {
                    return Err(not_found(args.word_id).into());
                }
                let word = words
                    .get_details(args.word_id)?
                    .ok_or_else(|| not_found(args.word_id))?;
                WordResult::Missed {
                    word_id: word.id,
                    wrong_count: word.wrong_count,
                }
            }
        };

        Ok(result)
    }
}
