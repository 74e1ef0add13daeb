//! Accounts and authentication.

use rusqlite::{Row, params};

use super::password::{hash_password, verify_password};
use crate::db::{Database, StoreError, StoreResult};
use crate::types::User;

pub struct UserStore<'a> {
    db: &'a Database,
}

impl<'a> UserStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Register a new account and return its id.
    ///
    /// A taken id surfaces from the primary-key constraint as
    /// [`StoreError::DuplicateKey`].
    pub fn register(
        &self,
        user_id: &str,
        password: &str,
        username: &str,
        is_admin: bool,
    ) -> StoreResult<String> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(StoreError::invalid_input("user id must not be blank"));
        }
        if password.is_empty() {
            return Err(StoreError::invalid_input("password must not be blank"));
        }

        let hashed = hash_password(password)?;
        self.db
            .unit_of_work(|db| {
                db.execute(
                    "INSERT INTO User (user_id, password, username, is_admin) VALUES (?1, ?2, ?3, ?4)",
                    params![user_id, hashed, username.trim(), is_admin],
                )
            })
            .map_err(|e| e.with_key(user_id))?;

        tracing::debug!(user_id, "registered user");
        Ok(user_id.to_string())
    }

    /// `Some(user)` when the credentials match, `None` otherwise.
    pub fn login(&self, user_id: &str, password: &str) -> StoreResult<Option<User>> {
        let row = self.db.fetch_one(
            "SELECT user_id, username, is_admin, password FROM User WHERE user_id = ?1",
            params![user_id.trim()],
            |row| Ok((user_from_row(row)?, row.get::<_, String>(3)?)),
        )?;

        Ok(row.and_then(|(user, stored)| verify_password(password, &stored).then_some(user)))
    }

    pub fn exists(&self, user_id: &str) -> StoreResult<bool> {
        Ok(self.get(user_id)?.is_some())
    }

    pub fn get(&self, user_id: &str) -> StoreResult<Option<User>> {
        self.db.fetch_one(
            "SELECT user_id, username, is_admin FROM User WHERE user_id = ?1",
            params![user_id.trim()],
            user_from_row,
        )
    }
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        user_id: row.get(0)?,
        username: row.get(1)?,
        is_admin: row.get(2)?,
    })
}
