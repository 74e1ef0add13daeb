//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and database path
//! resolution. Individual command definitions are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Command;
use crate::output::OutputFormat;

const PROJECT_DB: &str = ".wordbook/wordbook.sqlite";
const LOCAL_DB: &str = "./wordbook.sqlite";

#[derive(Parser, Debug)]
#[command(name = "wordbook", author, version, about = "Vocabulary study database", long_about = None)]
pub struct Args {
    /// Path to the SQLite database file
    ///
    /// Overrides the configuration file. If neither is given, searches in:
    ///   1. .wordbook/wordbook.sqlite (project-local)
    ///   2. ./wordbook.sqlite (current directory)
    ///   3. ~/.wordbook/wordbook.sqlite (user-global)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Configuration file (defaults to ./.wordbook.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Resolve database path by checking multiple locations in order of preference
pub fn resolve_db_path(explicit_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit_path {
        return path;
    }

    let project_db = PathBuf::from(PROJECT_DB);
    if project_db.exists() {
        return project_db;
    }

    let local_db = PathBuf::from(LOCAL_DB);
    if local_db.exists() {
        return local_db;
    }

    if let Some(home_dir) = home::home_dir() {
        let global_db = home_dir.join(".wordbook/wordbook.sqlite");
        if global_db.exists() {
            return global_db;
        }
    }

    // Created on first open
    project_db
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/tmp/elsewhere.sqlite");
        assert_eq!(resolve_db_path(Some(path.clone())), path);
    }

    #[rstest]
    fn test_global_options() {
        let args = Args::try_parse_from([
            "wordbook", "setup", "--db", "x.sqlite", "-o", "json", "--config", "c.json",
        ])
        .unwrap();
        assert_eq!(args.db, Some(PathBuf::from("x.sqlite")));
        assert_eq!(args.config, Some(PathBuf::from("c.json")));
        assert!(matches!(args.format, OutputFormat::Json));
    }

    #[rstest]
    fn test_format_defaults_to_table() {
        let args = Args::try_parse_from(["wordbook", "setup"]).unwrap();
        assert!(matches!(args.format, OutputFormat::Table));
        assert!(args.db.is_none());
    }

    #[rstest]
    fn test_invalid_format_rejected() {
        assert!(Args::try_parse_from(["wordbook", "-o", "xml", "setup"]).is_err());
    }
}
