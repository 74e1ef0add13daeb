//! Test fixtures.
//!
//! ## Available Fixtures
//!
//! - [`WORDS_CSV`] - Sample import file
//!
//! ## Usage
//!
//! ```ignore
//! use crate::fixtures;
//!
//! let db = crate::test_utils::open_test_db();
//! WordStore::new(&db).import_reader(fixtures::WORDS_CSV.as_bytes(), "alice", &categories)?;
//! ```

use chrono::NaiveDateTime;

use crate::types::Word;

/// Sample word list.
///
/// Contains:
/// - 5 rows, 4 distinct lemmas
/// - `apple` twice, first under `과일`, then under `회사` with another meaning
/// - `happy` without a category
pub const WORDS_CSV: &str = include_str!("words.csv");

/// Fixed timestamp for hand-built records.
pub fn timestamp() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2024-03-01 09:30:00", "%Y-%m-%d %H:%M:%S")
        .expect("valid timestamp")
}

/// A word with no optional fields, no misses and no categories.
pub fn sample_word(id: i64, english: &str, meaning: &str) -> Word {
    Word {
        id,
        english: english.to_string(),
        meaning: meaning.to_string(),
        part_of_speech: None,
        example_sentence: None,
        wrong_count: 0,
        created_at: timestamp(),
        categories: Vec::new(),
    }
}
