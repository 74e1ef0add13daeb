//! Shared test utilities for store, execute and config tests.

use std::io::Write;

use rusqlite::params;
use tempfile::NamedTempFile;

use crate::db::{Database, schema};
use crate::fixtures;
use crate::stores::{CategoryStore, WordStore};

/// Create a temporary file containing the given content.
pub fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    create_temp_file(content, ".json")
}

pub fn create_temp_csv(content: &str) -> NamedTempFile {
    create_temp_file(content, ".csv")
}

/// In-memory database with the full schema.
pub fn open_test_db() -> Database {
    let db = Database::open_in_memory().expect("Failed to open in-memory db");
    schema::create_schema(&db).expect("Schema creation should succeed");
    db
}

/// Insert users directly, each with its id as display name.
///
/// The stored password is not a valid hash, so these users cannot log in.
pub fn seed_users(db: &Database, user_ids: &[&str]) {
    for user_id in user_ids {
        db.execute(
            "INSERT INTO User (user_id, password, username, is_admin) VALUES (?1, 'x', ?1, 0)",
            params![user_id],
        )
        .expect("Failed to seed user");
    }
}

/// Database holding user `alice` and the sample word list imported into her
/// categories.
pub fn sample_db() -> Database {
    let db = open_test_db();
    seed_users(&db, &["alice", "bob"]);
    WordStore::new(&db)
        .import_reader(
            fixtures::WORDS_CSV.as_bytes(),
            "alice",
            &CategoryStore::new(&db),
        )
        .expect("Import should succeed");
    db
}
