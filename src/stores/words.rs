//! The shared word pool.
//!
//! Words are global: any user's categories may reference them. Read paths
//! decode each row into a [`Word`] carrying the names of every category that
//! links it, computed by a correlated subquery.

use clap::ValueEnum;
use rusqlite::{Row, params};
use serde::{Deserialize, Serialize};

use crate::db::{Database, StoreError, StoreResult, prefix_pattern};
use crate::types::Word;

/// Separator for aggregated category names. A control character cannot
/// appear in a name typed by a user.
const NAME_SEPARATOR: char = '\u{1f}';

pub(crate) const WORD_SELECT: &str = "\
SELECT w.word_id, w.english, w.meaning, w.part_of_speech, w.example_sentence, \
       w.wrong_count, w.created_at, \
       (SELECT group_concat(c.name, char(31)) \
          FROM Category c JOIN WordCategory wc ON wc.category_id = c.category_id \
         WHERE wc.word_id = w.word_id) AS categories \
FROM Word w";

/// What `add` does when a word with the same lemma already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Return the existing id without writing
    #[default]
    Keep,
    /// Replace meaning, part of speech and example of the existing row
    Overwrite,
    /// Fail with a duplicate-key error
    Reject,
}

/// How `add_detailed` resolved a lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddOutcome {
    Inserted,
    Existing,
    Updated,
}

pub struct WordStore<'a> {
    db: &'a Database,
    on_duplicate: DuplicatePolicy,
}

impl<'a> WordStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self::with_policy(db, DuplicatePolicy::default())
    }

    pub fn with_policy(db: &'a Database, on_duplicate: DuplicatePolicy) -> Self {
        Self { db, on_duplicate }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.on_duplicate
    }

    /// Add a word and return its id, honoring the duplicate policy.
    pub fn add(
        &self,
        english: &str,
        meaning: &str,
        part_of_speech: Option<&str>,
        example: Option<&str>,
    ) -> StoreResult<i64> {
        self.add_detailed(english, meaning, part_of_speech, example)
            .map(|(id, _)| id)
    }

    pub fn add_detailed(
        &self,
        english: &str,
        meaning: &str,
        part_of_speech: Option<&str>,
        example: Option<&str>,
    ) -> StoreResult<(i64, AddOutcome)> {
        let english = required("english", english)?;
        let meaning = required("meaning", meaning)?;
        let part_of_speech = optional(part_of_speech);
        let example = optional(example);

        self.db.unit_of_work(|db| {
            let existing: Option<i64> = db.fetch_one(
                "SELECT word_id FROM Word WHERE english = ?1 ORDER BY word_id LIMIT 1",
                params![english],
                |row| row.get(0),
            )?;

            match (existing, self.on_duplicate) {
                (None, _) => {
                    db.execute(
                        "INSERT INTO Word (english, meaning, part_of_speech, example_sentence) \
                         VALUES (?1, ?2, ?3, ?4)",
                        params![english, meaning, part_of_speech, example],
                    )?;
                    let id = db.last_insert_id();
                    tracing::debug!(word_id = id, english, "inserted word");
                    Ok((id, AddOutcome::Inserted))
                }
                (Some(id), DuplicatePolicy::Keep) => Ok((id, AddOutcome::Existing)),
                (Some(id), DuplicatePolicy::Overwrite) => {
                    db.execute(
                        "UPDATE Word SET meaning = ?1, part_of_speech = ?2, example_sentence = ?3 \
                         WHERE word_id = ?4",
                        params![meaning, part_of_speech, example, id],
                    )?;
                    tracing::debug!(word_id = id, english, "overwrote word");
                    Ok((id, AddOutcome::Updated))
                }
                (Some(_), DuplicatePolicy::Reject) => Err(StoreError::DuplicateKey {
                    entity: "Word".to_string(),
                    key: english.to_string(),
                }),
            }
        })
    }

    /// Replace every editable field of a word. Returns whether it existed.
    ///
    /// Under [`DuplicatePolicy::Reject`] a lemma already used by another word
    /// fails with [`StoreError::DuplicateKey`] and nothing changes. The other
    /// policies update unconditionally, so a renamed word can share its lemma
    /// and `add` then resolves to the lowest id.
    pub fn update(
        &self,
        word_id: i64,
        english: &str,
        meaning: &str,
        part_of_speech: Option<&str>,
        example: Option<&str>,
    ) -> StoreResult<bool> {
        let english = required("english", english)?;
        let meaning = required("meaning", meaning)?;
        let changed = self.db.unit_of_work(|db| {
            if self.on_duplicate == DuplicatePolicy::Reject {
                let clash: Option<i64> = db.fetch_one(
                    "SELECT word_id FROM Word WHERE english = ?1 AND word_id <> ?2 LIMIT 1",
                    params![english, word_id],
                    |row| row.get(0),
                )?;
                if clash.is_some() {
                    return Err(StoreError::DuplicateKey {
                        entity: "Word".to_string(),
                        key: english.to_string(),
                    });
                }
            }
            db.execute(
                "UPDATE Word SET english = ?1, meaning = ?2, part_of_speech = ?3, example_sentence = ?4 \
                 WHERE word_id = ?5",
                params![english, meaning, optional(part_of_speech), optional(example), word_id],
            )
        })?;
        Ok(changed > 0)
    }

    /// Delete a word. Its history and category links go with it.
    pub fn delete(&self, word_id: i64) -> StoreResult<bool> {
        let changed = self.db.unit_of_work(|db| {
            db.execute("DELETE FROM Word WHERE word_id = ?1", params![word_id])
        })?;
        if changed > 0 {
            tracing::debug!(word_id, "deleted word");
        }
        Ok(changed > 0)
    }

    pub fn increment_wrong_count(&self, word_id: i64) -> StoreResult<bool> {
        let changed = self.db.unit_of_work(|db| {
            db.execute(
                "UPDATE Word SET wrong_count = wrong_count + 1 WHERE word_id = ?1",
                params![word_id],
            )
        })?;
        Ok(changed > 0)
    }

    pub fn get_all(&self) -> StoreResult<Vec<Word>> {
        self.db.fetch_all(
            &format!("{} ORDER BY w.word_id", WORD_SELECT),
            [],
            word_from_row,
        )
    }

    pub fn get_details(&self, word_id: i64) -> StoreResult<Option<Word>> {
        self.db.fetch_one(
            &format!("{} WHERE w.word_id = ?1", WORD_SELECT),
            params![word_id],
            word_from_row,
        )
    }

    /// Words whose lemma or meaning starts with `keyword`, by lemma.
    pub fn search(&self, keyword: &str) -> StoreResult<Vec<Word>> {
        let pattern = prefix_pattern(keyword.trim());
        self.db.fetch_all(
            &format!(
                "{} WHERE w.english LIKE ?1 ESCAPE '\\' OR w.meaning LIKE ?1 ESCAPE '\\' \
                 ORDER BY w.english, w.word_id",
                WORD_SELECT
            ),
            params![pattern],
            word_from_row,
        )
    }

    /// Words missed at least `min_count` times, most missed first.
    pub fn get_by_wrong_count(&self, min_count: i64) -> StoreResult<Vec<Word>> {
        self.db.fetch_all(
            &format!(
                "{} WHERE w.wrong_count >= ?1 ORDER BY w.wrong_count DESC, w.word_id",
                WORD_SELECT
            ),
            params![min_count],
            word_from_row,
        )
    }
}

fn required<'s>(field: &str, value: &'s str) -> StoreResult<&'s str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StoreError::invalid_input(format!("{} must not be blank", field)));
    }
    Ok(value)
}

fn optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub(crate) fn word_from_row(row: &Row<'_>) -> rusqlite::Result<Word> {
    let joined: Option<String> = row.get(7)?;
    let mut categories: Vec<String> = joined
        .as_deref()
        .map(|names| names.split(NAME_SEPARATOR).map(str::to_string).collect())
        .unwrap_or_default();
    categories.sort();

    Ok(Word {
        id: row.get(0)?,
        english: row.get(1)?,
        meaning: row.get(2)?,
        part_of_speech: row.get(3)?,
        example_sentence: row.get(4)?,
        wrong_count: row.get(5)?,
        created_at: row.get(6)?,
        categories,
    })
}
