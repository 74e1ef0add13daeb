//! Per-user categories and their word associations.
//!
//! Every write that depends on ownership takes the acting user explicitly and
//! checks it against the stored owner. Deleting a category removes its
//! association rows but never the words themselves.

use rusqlite::{Row, params, params_from_iter};

use super::words::{WORD_SELECT, word_from_row};
use crate::db::{Database, StoreError, StoreResult};
use crate::types::{Category, CategorySummary, Word};

const CATEGORY_SELECT: &str =
    "SELECT c.category_id, c.name, c.user_id, c.created_at FROM Category c";

pub struct CategoryStore<'a> {
    db: &'a Database,
}

impl<'a> CategoryStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create a category for `owner`.
    ///
    /// There is no pre-check: an existing `(owner, name)` pair surfaces as
    /// [`StoreError::DuplicateKey`] from the unique constraint.
    pub fn create(&self, owner: &str, name: &str) -> StoreResult<i64> {
        let name = normalize_name(name)?;
        let id = self
            .db
            .unit_of_work(|db| {
                db.execute(
                    "INSERT INTO Category (name, user_id) VALUES (?1, ?2)",
                    params![name, owner],
                )?;
                Ok(db.last_insert_id())
            })
            .map_err(|e| e.with_key(name))?;

        tracing::debug!(category_id = id, owner, name, "created category");
        Ok(id)
    }

    /// Return the id of `owner`'s category called `name`, creating it first
    /// when absent. Calling this twice with the same arguments yields the
    /// same id and one row.
    pub fn get_or_create(&self, owner: &str, name: &str) -> StoreResult<i64> {
        let name = normalize_name(name)?;
        self.db.unit_of_work(|db| {
            if let Some(id) = find_id(db, owner, name)? {
                return Ok(id);
            }

            db.execute(
                "INSERT OR IGNORE INTO Category (name, user_id) VALUES (?1, ?2)",
                params![name, owner],
            )?;

            let id = find_id(db, owner, name)?.ok_or_else(|| StoreError::NotFound {
                entity: "Category",
                id: name.to_string(),
            })?;
            tracing::debug!(category_id = id, owner, name, "created category");
            Ok(id)
        })
    }

    /// Delete a category owned by `owner`.
    ///
    /// Returns `false` without touching anything when the category is absent
    /// or belongs to someone else.
    pub fn delete(&self, category_id: i64, owner: &str) -> StoreResult<bool> {
        self.db.unit_of_work(|db| {
            if !owned_by(db, category_id, owner)? {
                return Ok(false);
            }

            db.execute(
                "DELETE FROM WordCategory WHERE category_id = ?1",
                params![category_id],
            )?;
            db.execute(
                "DELETE FROM Category WHERE category_id = ?1 AND user_id = ?2",
                params![category_id, owner],
            )?;
            tracing::debug!(category_id, owner, "deleted category");
            Ok(true)
        })
    }

    /// Link a word to a category. Returns whether a new link was made.
    pub fn add_word_to_category(&self, category_id: i64, word_id: i64) -> StoreResult<bool> {
        let changed = self.db.unit_of_work(|db| {
            db.execute(
                "INSERT OR IGNORE INTO WordCategory (category_id, word_id) VALUES (?1, ?2)",
                params![category_id, word_id],
            )
        })?;
        Ok(changed > 0)
    }

    pub fn remove_word_from_category(&self, category_id: i64, word_id: i64) -> StoreResult<bool> {
        let changed = self.db.unit_of_work(|db| {
            db.execute(
                "DELETE FROM WordCategory WHERE category_id = ?1 AND word_id = ?2",
                params![category_id, word_id],
            )
        })?;
        Ok(changed > 0)
    }

    /// Rename a category owned by `owner`.
    ///
    /// Fails with [`StoreError::DuplicateKey`] when another of the owner's
    /// categories already uses `new_name`; both rows are left unchanged.
    /// Returns `false` when the caller is not the owner.
    pub fn rename(&self, category_id: i64, new_name: &str, owner: &str) -> StoreResult<bool> {
        let new_name = normalize_name(new_name)?;
        self.db
            .unit_of_work(|db| {
                if !owned_by(db, category_id, owner)? {
                    return Ok(false);
                }

                let clash: Option<i64> = db.fetch_one(
                    "SELECT category_id FROM Category WHERE user_id = ?1 AND name = ?2 AND category_id != ?3",
                    params![owner, new_name, category_id],
                    |row| row.get(0),
                )?;
                if clash.is_some() {
                    return Err(StoreError::DuplicateKey {
                        entity: "Category".to_string(),
                        key: new_name.to_string(),
                    });
                }

                let changed = db.execute(
                    "UPDATE Category SET name = ?1 WHERE category_id = ?2 AND user_id = ?3",
                    params![new_name, category_id, owner],
                )?;
                Ok(changed > 0)
            })
            .map_err(|e| e.with_key(new_name))
    }

    pub fn get(&self, category_id: i64) -> StoreResult<Option<Category>> {
        self.db.fetch_one(
            &format!("{} WHERE c.category_id = ?1", CATEGORY_SELECT),
            params![category_id],
            category_from_row,
        )
    }

    /// Words linked to the category, ordered by word id.
    pub fn words_in(&self, category_id: i64) -> StoreResult<Vec<Word>> {
        self.db.fetch_all(
            &format!(
                "{} WHERE w.word_id IN (SELECT word_id FROM WordCategory WHERE category_id = ?1) \
                 ORDER BY w.word_id",
                WORD_SELECT
            ),
            params![category_id],
            word_from_row,
        )
    }

    /// Distinct words linked to any of the given categories.
    pub fn words_in_any(&self, category_ids: &[i64]) -> StoreResult<Vec<Word>> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = (1..=category_ids.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        self.db.fetch_all(
            &format!(
                "{} WHERE w.word_id IN (SELECT word_id FROM WordCategory WHERE category_id IN ({})) \
                 ORDER BY w.word_id",
                WORD_SELECT, placeholders
            ),
            params_from_iter(category_ids.iter()),
            word_from_row,
        )
    }

    pub fn categories_of_word(&self, word_id: i64) -> StoreResult<Vec<Category>> {
        self.db.fetch_all(
            &format!(
                "{} JOIN WordCategory wc ON wc.category_id = c.category_id \
                 WHERE wc.word_id = ?1 ORDER BY c.name, c.category_id",
                CATEGORY_SELECT
            ),
            params![word_id],
            category_from_row,
        )
    }

    pub fn categories_of_owner(&self, owner: &str) -> StoreResult<Vec<Category>> {
        self.db.fetch_all(
            &format!(
                "{} WHERE c.user_id = ?1 ORDER BY c.name, c.category_id",
                CATEGORY_SELECT
            ),
            params![owner],
            category_from_row,
        )
    }

    /// Every category with its creator's name and word count, by name.
    pub fn summaries(&self) -> StoreResult<Vec<CategorySummary>> {
        self.db.fetch_all(
            "SELECT c.category_id, c.name, c.user_id, c.created_at, u.username, COUNT(wc.word_id) \
             FROM Category c \
             JOIN User u ON u.user_id = c.user_id \
             LEFT JOIN WordCategory wc ON wc.category_id = c.category_id \
             GROUP BY c.category_id \
             ORDER BY c.name, c.category_id",
            [],
            |row| {
                Ok(CategorySummary {
                    category: category_from_row(row)?,
                    creator_name: row.get(4)?,
                    word_count: row.get(5)?,
                })
            },
        )
    }
}

fn normalize_name(name: &str) -> StoreResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::invalid_input("category name must not be blank"));
    }
    Ok(name)
}

fn find_id(db: &Database, owner: &str, name: &str) -> StoreResult<Option<i64>> {
    db.fetch_one(
        "SELECT category_id FROM Category WHERE user_id = ?1 AND name = ?2",
        params![owner, name],
        |row| row.get(0),
    )
}

fn owned_by(db: &Database, category_id: i64, owner: &str) -> StoreResult<bool> {
    let stored: Option<String> = db.fetch_one(
        "SELECT user_id FROM Category WHERE category_id = ?1",
        params![category_id],
        |row| row.get(0),
    )?;

    match stored {
        Some(stored) if stored == owner => Ok(true),
        Some(stored) => {
            tracing::warn!(category_id, owner, stored_owner = %stored, "category owned by another user");
            Ok(false)
        }
        None => {
            tracing::warn!(category_id, "category not found");
            Ok(false)
        }
    }
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        owner: row.get(2)?,
        created_at: row.get(3)?,
    })
}
