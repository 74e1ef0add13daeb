//! Table definitions and idempotent schema creation.

use rusqlite::params;

use super::connection::Database;
use super::error::StoreResult;

pub const SCHEMA_USER: &str = r#"
CREATE TABLE IF NOT EXISTS User (
    user_id TEXT PRIMARY KEY,
    password TEXT NOT NULL,
    username TEXT NOT NULL,
    is_admin INTEGER NOT NULL DEFAULT 0
)
"#;

pub const SCHEMA_CATEGORY: &str = r#"
CREATE TABLE IF NOT EXISTS Category (
    category_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    user_id TEXT NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES User(user_id) ON DELETE CASCADE,
    UNIQUE (user_id, name)
)
"#;

pub const SCHEMA_WORD: &str = r#"
CREATE TABLE IF NOT EXISTS Word (
    word_id INTEGER PRIMARY KEY AUTOINCREMENT,
    english TEXT NOT NULL,
    meaning TEXT NOT NULL,
    part_of_speech TEXT,
    example_sentence TEXT,
    wrong_count INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE INDEX IF NOT EXISTS idx_word_english ON Word(english);
"#;

pub const SCHEMA_WORD_CATEGORY: &str = r#"
CREATE TABLE IF NOT EXISTS WordCategory (
    category_id INTEGER NOT NULL,
    word_id INTEGER NOT NULL,
    PRIMARY KEY (category_id, word_id),
    FOREIGN KEY (category_id) REFERENCES Category(category_id) ON DELETE CASCADE,
    FOREIGN KEY (word_id) REFERENCES Word(word_id) ON DELETE CASCADE
)
"#;

pub const SCHEMA_WORD_HISTORY: &str = r#"
CREATE TABLE IF NOT EXISTS WordHistory (
    history_id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    word_id INTEGER NOT NULL,
    is_correct INTEGER NOT NULL,
    study_type TEXT NOT NULL,
    studied_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES User(user_id) ON DELETE CASCADE,
    FOREIGN KEY (word_id) REFERENCES Word(word_id) ON DELETE CASCADE
)
"#;

/// Tables in creation order. Referenced tables come first.
const TABLES: [(&str, &str); 5] = [
    ("User", SCHEMA_USER),
    ("Category", SCHEMA_CATEGORY),
    ("Word", SCHEMA_WORD),
    ("WordCategory", SCHEMA_WORD_CATEGORY),
    ("WordHistory", SCHEMA_WORD_HISTORY),
];

/// Outcome of creating one table.
#[derive(Debug, Clone)]
pub struct TableStatus {
    pub table: String,
    pub created: bool,
}

/// Get list of all table names managed by this schema
pub fn table_names() -> Vec<&'static str> {
    TABLES.iter().map(|(name, _)| *name).collect()
}

pub fn table_exists(db: &Database, table: &str) -> StoreResult<bool> {
    let found: Option<i64> = db.fetch_one(
        "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
        params![table],
        |row| row.get(0),
    )?;
    Ok(found.is_some())
}

/// Create every table that is not yet present.
///
/// Foreign keys are off while the tables are created and switched back on
/// afterwards, whether or not creation succeeded.
pub fn create_schema(db: &Database) -> StoreResult<Vec<TableStatus>> {
    db.set_foreign_keys(false)?;
    let result = db.unit_of_work(|db| {
        let mut statuses = Vec::with_capacity(TABLES.len());
        for (table, ddl) in TABLES {
            let existed = table_exists(db, table)?;
            db.execute_batch(ddl)?;
            statuses.push(TableStatus {
                table: table.to_string(),
                created: !existed,
            });
        }
        Ok(statuses)
    });
    db.set_foreign_keys(true)?;

    let statuses = result?;
    let created = statuses.iter().filter(|s| s.created).count();
    tracing::info!(created, total = statuses.len(), "schema ready");
    Ok(statuses)
}
