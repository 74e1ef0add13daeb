//! Output formatting for history command results.

use super::execute::HistoryResult;
use crate::output::Outputable;

impl Outputable for HistoryResult {
    fn to_table(&self) -> String {
        match self {
            HistoryResult::Recorded {
                history_id,
                user_id,
                word_id,
                is_correct,
                study_type,
            } => {
                let mark = if *is_correct { "correct" } else { "wrong" };
                format!(
                    "Recorded #{}: {} answered word {} ({}, {})",
                    history_id, user_id, word_id, study_type, mark
                )
            }
            HistoryResult::Listed { user_id, entries } => {
                if entries.is_empty() {
                    return format!("No study history for {}.", user_id);
                }
                let mut lines = vec![format!("Study history: {} ({})", user_id, entries.len()), String::new()];
                for entry in entries {
                    lines.push(format!(
                        "  {} {} [{}] {} ({})",
                        entry.studied_at.format("%Y-%m-%d %H:%M:%S"),
                        if entry.is_correct { "✓" } else { "✗" },
                        entry.word_id,
                        entry.english,
                        entry.study_type,
                    ));
                }
                lines.join("\n")
            }
        }
    }
}
