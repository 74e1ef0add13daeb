//! Configuration file handling.
//!
//! Reads `.wordbook.json` from the current directory (or an explicit path).
//! The file is optional; every field has a default.
//!
//! ```json
//! {
//!   "database": { "type": "sqlite", "path": "./wordbook.sqlite" },
//!   "import": { "on_duplicate": "keep" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::resolve_db_path;
use crate::db::Database;
use crate::db::schema::create_schema;
use crate::stores::DuplicatePolicy;

pub const CONFIG_FILE_NAME: &str = ".wordbook.json";

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Database location. Resolved from well-known paths when absent.
    #[serde(default)]
    pub database: Option<DatabaseConfigFile>,

    #[serde(default)]
    pub import: ImportConfig,
}

/// Database backends, tagged by a lowercase `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DatabaseConfigFile {
    /// SQLite file
    Sqlite { path: PathBuf },
    /// In-memory database, discarded on exit. The schema is created on open
    /// because nothing survives from one run to the next.
    #[serde(rename = "memory")]
    Mem,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportConfig {
    /// What to do when an imported or added lemma already exists
    #[serde(default)]
    pub on_duplicate: DuplicatePolicy,
}

impl ConfigFile {
    /// Load `.wordbook.json` from the current directory, or defaults when
    /// there is no such file.
    pub fn load() -> Result<Self, Box<dyn Error>> {
        let config_path = PathBuf::from(CONFIG_FILE_NAME);
        if !config_path.exists() {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load an explicitly named configuration file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

        let config: ConfigFile = serde_json::from_str(&content)
            .map_err(|e| format!("Invalid JSON in {}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Open the configured database. An explicit path wins over the file.
    pub fn open_database(&self, db_override: Option<PathBuf>) -> Result<Database, Box<dyn Error>> {
        let db = match (db_override, &self.database) {
            (Some(path), _) => Database::open(path)?,
            (None, Some(DatabaseConfigFile::Sqlite { path })) => Database::open(path)?,
            (None, Some(DatabaseConfigFile::Mem)) => {
                let db = Database::open_in_memory()?;
                create_schema(&db)?;
                db
            }
            (None, None) => Database::open(resolve_db_path(None))?,
        };
        Ok(db)
    }
}
