//! Store error taxonomy.
//!
//! Every store operation returns [`StoreError`] on failure. Raw SQLite faults
//! are classified on conversion so that a uniqueness violation arrives as
//! [`StoreError::DuplicateKey`] and other constraint failures as
//! [`StoreError::ConstraintViolation`], instead of one opaque database error.

use std::path::PathBuf;

use rusqlite::ErrorCode;
use rusqlite::ffi;
use thiserror::Error;

/// Errors returned by the connection manager and the stores.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{entity} '{key}' already exists")]
    DuplicateKey { entity: String, key: String },

    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing column '{name}' in CSV header")]
    MissingColumn { name: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] argon2::password_hash::Error),

    #[error("Database error: {0}")]
    Database(rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Replace the key of a duplicate-key error with a caller-facing value.
    ///
    /// SQLite only reports the violated columns; stores know the actual key.
    pub fn with_key(self, key: impl Into<String>) -> Self {
        match self {
            Self::DuplicateKey { entity, .. } => Self::DuplicateKey {
                entity,
                key: key.into(),
            },
            other => other,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        let rusqlite::Error::SqliteFailure(failure, message) = &err else {
            return Self::Database(err);
        };

        if failure.code != ErrorCode::ConstraintViolation {
            return Self::Database(err);
        }

        let message = message.clone().unwrap_or_else(|| failure.to_string());
        match failure.extended_code {
            ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                let (entity, key) = parse_unique_violation(&message);
                Self::DuplicateKey { entity, key }
            }
            _ => Self::ConstraintViolation { message },
        }
    }
}

/// Split "UNIQUE constraint failed: Category.user_id, Category.name" into
/// the table name and the violated column list.
fn parse_unique_violation(message: &str) -> (String, String) {
    let columns = message
        .split_once(':')
        .map(|(_, rest)| rest.trim())
        .unwrap_or(message);

    let mut entity = String::new();
    let mut keys = Vec::new();
    for qualified in columns.split(',').map(str::trim) {
        match qualified.split_once('.') {
            Some((table, column)) => {
                if entity.is_empty() {
                    entity = table.to_string();
                }
                keys.push(column.to_string());
            }
            None => keys.push(qualified.to_string()),
        }
    }

    if entity.is_empty() {
        entity = "row".to_string();
    }
    (entity, keys.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("UNIQUE constraint failed: User.user_id", "User", "user_id")]
    #[case(
        "UNIQUE constraint failed: Category.user_id, Category.name",
        "Category",
        "user_id, name"
    )]
    #[case("constraint failed", "row", "constraint failed")]
    fn test_parse_unique_violation(#[case] message: &str, #[case] entity: &str, #[case] key: &str) {
        let (parsed_entity, parsed_key) = parse_unique_violation(message);
        assert_eq!(parsed_entity, entity);
        assert_eq!(parsed_key, key);
    }

    #[rstest]
    fn test_with_key_replaces_duplicate_key() {
        let err = StoreError::DuplicateKey {
            entity: "User".to_string(),
            key: "user_id".to_string(),
        }
        .with_key("alice");
        assert_eq!(err.to_string(), "User 'alice' already exists");
    }

    #[rstest]
    fn test_with_key_leaves_other_errors() {
        let err = StoreError::invalid_input("blank").with_key("alice");
        assert!(matches!(err, StoreError::InvalidInput { .. }));
    }

    #[rstest]
    fn test_unique_violation_classified_as_duplicate() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT UNIQUE); INSERT INTO t VALUES ('a');")
            .unwrap();
        let err: StoreError = conn
            .execute("INSERT INTO t VALUES ('a')", [])
            .unwrap_err()
            .into();
        match err {
            StoreError::DuplicateKey { entity, key } => {
                assert_eq!(entity, "t");
                assert_eq!(key, "name");
            }
            other => panic!("Expected DuplicateKey, got {:?}", other),
        }
    }

    #[rstest]
    fn test_not_null_violation_classified_as_constraint() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT NOT NULL);").unwrap();
        let err: StoreError = conn
            .execute("INSERT INTO t VALUES (NULL)", [])
            .unwrap_err()
            .into();
        assert!(matches!(err, StoreError::ConstraintViolation { .. }));
    }

    #[rstest]
    fn test_create_dir_message_names_directory() {
        let err = StoreError::CreateDir {
            path: PathBuf::from("/locked/data"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let message = err.to_string();
        assert!(message.starts_with("Failed to create directory '/locked/data'"));
        assert!(!message.contains("Failed to read"));
    }

    #[rstest]
    fn test_other_failures_stay_database_errors() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let err: StoreError = conn
            .execute("SELECT * FROM missing_table", [])
            .unwrap_err()
            .into();
        assert!(matches!(err, StoreError::Database(_)));
    }
}
