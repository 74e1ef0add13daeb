//! Output formatting for word command results.

use super::execute::WordResult;
use crate::output::{Outputable, word_list_table};
use crate::stores::AddOutcome;
use crate::types::Word;

impl Outputable for WordResult {
    fn to_table(&self) -> String {
        match self {
            WordResult::Added {
                word_id,
                english,
                outcome,
            } => {
                let verb = match outcome {
                    AddOutcome::Inserted => "Added",
                    AddOutcome::Existing => "Kept existing",
                    AddOutcome::Updated => "Updated existing",
                };
                format!("{} [{}] {}", verb, word_id, english)
            }
            WordResult::Updated { word_id, updated } => {
                if *updated {
                    format!("Updated word {}", word_id)
                } else {
                    format!("Word {} not found.", word_id)
                }
            }
            WordResult::Deleted { word_id, deleted } => {
                if *deleted {
                    format!("Deleted word {}", word_id)
                } else {
                    format!("Word {} not found.", word_id)
                }
            }
            WordResult::Details { word } => details_table(word),
            WordResult::Listed { title, words } => word_list_table(title, words, "No words found."),
            WordResult::Missed {
                word_id,
                wrong_count,
            } => format!("Word {} missed {} time(s)", word_id, wrong_count),
        }
    }
}

fn details_table(word: &Word) -> String {
    let mut lines = vec![format!("{} [{}]", word.english, word.id), String::new()];
    lines.push(format!("  Meaning: {}", word.meaning));
    if let Some(pos) = &word.part_of_speech {
        lines.push(format!("  Part of speech: {}", pos));
    }
    if let Some(example) = &word.example_sentence {
        lines.push(format!("  Example: {}", example));
    }
    lines.push(format!("  Wrong count: {}", word.wrong_count));
    let categories = if word.categories.is_empty() {
        "(none)".to_string()
    } else {
        word.categories.join(", ")
    };
    lines.push(format!("  Categories: {}", categories));
    lines.push(format!("  Added: {}", word.created_at.format("%Y-%m-%d %H:%M:%S")));
    lines.join("\n")
}
