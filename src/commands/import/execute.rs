use std::error::Error;

use serde::Serialize;

use super::ImportCmd;
use crate::commands::{Execute, Session};
use crate::db::StoreError;
use crate::stores::{CategoryStore, DuplicatePolicy, ImportSummary, UserStore, WordStore};

/// Result of the import command execution
#[derive(Debug, Serialize)]
pub struct ImportResult {
    pub file: String,
    pub owner: String,
    pub on_duplicate: DuplicatePolicy,
    #[serde(flatten)]
    pub summary: ImportSummary,
}

impl Execute for ImportCmd {
    type Output = ImportResult;

    fn execute(self, session: &Session<'_>) -> Result<Self::Output, Box<dyn Error>> {
        if !UserStore::new(session.db).exists(&self.user)? {
            return Err(StoreError::NotFound {
                entity: "User",
                id: self.user,
            }
            .into());
        }

        let policy = self.on_duplicate.unwrap_or(session.on_duplicate);
        let words = WordStore::with_policy(session.db, policy);
        let summary = words.import_csv(&self.file, &self.user, &CategoryStore::new(session.db))?;

        Ok(ImportResult {
            file: self.file.display().to_string(),
            owner: self.user,
            on_duplicate: policy,
            summary,
        })
    }
}
