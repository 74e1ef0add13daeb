use std::error::Error;

use serde::Serialize;

use super::{HistoryAction, HistoryCmd};
use crate::commands::{Execute, Session};
use crate::stores::HistoryStore;
use crate::types::{HistoryEntry, StudyType};

/// Result of a history command
#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HistoryResult {
    Recorded {
        history_id: i64,
        user_id: String,
        word_id: i64,
        is_correct: bool,
        study_type: StudyType,
    },
    Listed {
        user_id: String,
        entries: Vec<HistoryEntry>,
    },
}

impl Execute for HistoryCmd {
    type Output = HistoryResult;

    fn execute(self, session: &Session<'_>) -> Result<Self::Output, Box<dyn Error>> {
        let history = HistoryStore::new(session.db);

        let result = match self.action {
            HistoryAction::Record(args) => {
                let history_id =
                    history.record_answer(&args.user, args.word_id, args.correct, args.study_type)?;
                HistoryResult::Recorded {
                    history_id,
                    user_id: args.user,
                    word_id: args.word_id,
                    is_correct: args.correct,
                    study_type: args.study_type,
                }
            }
            HistoryAction::List(args) => HistoryResult::Listed {
                entries: history.for_user(&args.user, args.limit)?,
                user_id: args.user,
            },
        };

        Ok(result)
    }
}
