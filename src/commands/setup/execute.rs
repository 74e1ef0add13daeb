use std::error::Error;

use serde::Serialize;

use super::SetupCmd;
use crate::commands::{Execute, Session};
use crate::db::schema;

/// State of one table after setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TableState {
    #[serde(rename = "created")]
    Created,
    #[serde(rename = "exists")]
    AlreadyExists,
    #[serde(rename = "would_create")]
    WouldCreate,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableStatus {
    pub name: String,
    pub status: TableState,
}

/// Result of the setup command execution
#[derive(Debug, Serialize)]
pub struct SetupResult {
    pub database: String,
    pub tables: Vec<TableStatus>,
    pub created_new: bool,
    pub dry_run: bool,
}

impl Execute for SetupCmd {
    type Output = SetupResult;

    fn execute(self, session: &Session<'_>) -> Result<Self::Output, Box<dyn Error>> {
        let database = session.db.path().display().to_string();

        if self.dry_run {
            let mut tables = Vec::new();
            for name in schema::table_names() {
                let status = if schema::table_exists(session.db, name)? {
                    TableState::AlreadyExists
                } else {
                    TableState::WouldCreate
                };
                tables.push(TableStatus {
                    name: name.to_string(),
                    status,
                });
            }

            return Ok(SetupResult {
                database,
                tables,
                created_new: false,
                dry_run: true,
            });
        }

        let tables: Vec<TableStatus> = schema::create_schema(session.db)?
            .into_iter()
            .map(|t| TableStatus {
                name: t.table,
                status: if t.created {
                    TableState::Created
                } else {
                    TableState::AlreadyExists
                },
            })
            .collect();

        let created_new = tables.iter().any(|t| t.status == TableState::Created);

        Ok(SetupResult {
            database,
            tables,
            created_new,
            dry_run: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn db_dir() -> TempDir {
        TempDir::new().expect("Failed to create temp dir")
    }

    #[rstest]
    fn test_setup_creates_all_tables(db_dir: TempDir) {
        let db = Database::open(db_dir.path().join("words.sqlite")).unwrap();
        let result = SetupCmd { dry_run: false }
            .execute(&Session::new(&db))
            .expect("Setup should succeed");

        assert_eq!(result.tables.len(), 5);
        assert!(result.tables.iter().all(|t| t.status == TableState::Created));
        assert!(result.created_new);
        assert!(result.database.ends_with("words.sqlite"));
    }

    #[rstest]
    fn test_setup_idempotent(db_dir: TempDir) {
        let db = Database::open(db_dir.path().join("words.sqlite")).unwrap();
        SetupCmd { dry_run: false }
            .execute(&Session::new(&db))
            .expect("First setup should succeed");
        let second = SetupCmd { dry_run: false }
            .execute(&Session::new(&db))
            .expect("Second setup should succeed");

        assert!(second
            .tables
            .iter()
            .all(|t| t.status == TableState::AlreadyExists));
        assert!(!second.created_new);
    }

    #[rstest]
    fn test_setup_dry_run_changes_nothing() {
        let db = Database::open_in_memory().unwrap();
        let result = SetupCmd { dry_run: true }
            .execute(&Session::new(&db))
            .expect("Setup should succeed");

        assert!(result.dry_run);
        assert!(result.tables.iter().all(|t| t.status == TableState::WouldCreate));
        assert!(!schema::table_exists(&db, "Word").unwrap());
    }

    #[rstest]
    fn test_setup_table_names() {
        let db = Database::open_in_memory().unwrap();
        let result = SetupCmd { dry_run: true }
            .execute(&Session::new(&db))
            .unwrap();
        let names: Vec<_> = result.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["User", "Category", "Word", "WordCategory", "WordHistory"]);
    }
}
