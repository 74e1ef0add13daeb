//! Connection manager.
//!
//! Wraps a single SQLite connection with foreign keys enforced and offers
//! the statement helpers the stores build on: parameterised execution,
//! single-row and multi-row fetches, and explicit transactions.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension, Params, Row};

use super::error::{StoreError, StoreResult};

pub const IN_MEMORY: &str = ":memory:";

pub struct Database {
    conn: Connection,
    path: PathBuf,
}

impl Database {
    /// Open (creating if needed) the database file at `path`.
    ///
    /// Missing parent directories are created. Foreign-key enforcement is
    /// switched on before the handle is returned.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path)?;
        tracing::debug!(path = %path.display(), "opened database");
        Self::configure(conn, path.to_path_buf())
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::configure(conn, PathBuf::from(IN_MEMORY))
    }

    fn configure(conn: Connection, path: PathBuf) -> StoreResult<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self { conn, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run one parameterised statement, returning the affected row count.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> StoreResult<usize> {
        Ok(self.conn.execute(sql, params)?)
    }

    pub fn execute_batch(&self, sql: &str) -> StoreResult<()> {
        Ok(self.conn.execute_batch(sql)?)
    }

    /// Fetch at most one row. Absence is `Ok(None)`, never an error.
    pub fn fetch_one<T, P, F>(&self, sql: &str, params: P, map: F) -> StoreResult<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        Ok(self.conn.query_row(sql, params, map).optional()?)
    }

    /// Fetch every row, in the order the statement yields them.
    pub fn fetch_all<T, P, F>(&self, sql: &str, params: P, map: F) -> StoreResult<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, map)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn last_insert_id(&self) -> i64 {
        self.conn.last_insert_rowid()
    }

    pub fn begin(&self) -> StoreResult<()> {
        self.execute_batch("BEGIN")
    }

    pub fn commit(&self) -> StoreResult<()> {
        self.execute_batch("COMMIT")
    }

    pub fn rollback(&self) -> StoreResult<()> {
        self.execute_batch("ROLLBACK")
    }

    pub fn in_transaction(&self) -> bool {
        !self.conn.is_autocommit()
    }

    /// Run `work` atomically.
    ///
    /// Inside an open transaction the work joins it and the outer owner
    /// decides the outcome. Otherwise a transaction is opened here, committed
    /// on success and rolled back on any error.
    pub fn unit_of_work<T, F>(&self, work: F) -> StoreResult<T>
    where
        F: FnOnce(&Database) -> StoreResult<T>,
    {
        if self.in_transaction() {
            return work(self);
        }

        self.begin()?;
        match work(self) {
            Ok(value) => match self.commit() {
                Ok(()) => Ok(value),
                Err(err) => {
                    self.rollback_quietly();
                    Err(err)
                }
            },
            Err(err) => {
                self.rollback_quietly();
                Err(err)
            }
        }
    }

    fn rollback_quietly(&self) {
        if let Err(err) = self.rollback() {
            tracing::error!(error = %err, "rollback failed");
        }
    }

    /// Toggle foreign-key enforcement. Has no effect inside a transaction.
    pub fn set_foreign_keys(&self, enabled: bool) -> StoreResult<()> {
        Ok(self.conn.pragma_update(None, "foreign_keys", enabled)?)
    }

    pub fn foreign_keys_enabled(&self) -> StoreResult<bool> {
        Ok(self
            .conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))?)
    }
}
