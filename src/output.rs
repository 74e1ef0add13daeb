//! Output formatting for command results.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.

use clap::ValueEnum;
use serde::Serialize;

use crate::types::Word;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

/// One table line for a word: `[id] english (pos) - meaning  {categories}`.
pub fn word_line(word: &Word) -> String {
    let mut line = format!("[{}] {}", word.id, word.english);
    if let Some(pos) = &word.part_of_speech {
        line.push_str(&format!(" ({})", pos));
    }
    line.push_str(&format!(" - {}", word.meaning));
    if word.wrong_count > 0 {
        line.push_str(&format!("  missed {}x", word.wrong_count));
    }
    if !word.categories.is_empty() {
        line.push_str(&format!("  {{{}}}", word.categories.join(", ")));
    }
    line
}

/// Render a titled word list, or `empty` when there are none.
pub fn word_list_table(title: &str, words: &[Word], empty: &str) -> String {
    let mut lines = vec![title.to_string(), String::new()];
    if words.is_empty() {
        lines.push(empty.to_string());
        return lines.join("\n");
    }

    lines.push(format!("Words ({}):", words.len()));
    for word in words {
        lines.push(format!("  {}", word_line(word)));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_word;
    use rstest::rstest;

    #[rstest]
    fn test_word_line_full() {
        let mut word = sample_word(1, "apple", "사과");
        word.part_of_speech = Some("명사".to_string());
        word.wrong_count = 2;
        word.categories = vec!["과일".to_string(), "회사".to_string()];
        assert_eq!(word_line(&word), "[1] apple (명사) - 사과  missed 2x  {과일, 회사}");
    }

    #[rstest]
    fn test_word_line_minimal() {
        let word = sample_word(7, "happy", "행복한");
        assert_eq!(word_line(&word), "[7] happy - 행복한");
    }

    #[rstest]
    fn test_word_list_empty() {
        assert_eq!(
            word_list_table("Words", &[], "No words found."),
            "Words\n\nNo words found."
        );
    }
}
