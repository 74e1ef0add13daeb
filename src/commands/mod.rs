//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing (`mod.rs`)
//! - An `Execute` impl producing a serializable result (`execute.rs`)
//! - An `Outputable` impl rendering that result as a table (`output.rs`)

pub mod category;
pub mod history;
pub mod import;
pub mod setup;
pub mod user;
pub mod word;

pub use category::CategoryCmd;
pub use history::HistoryCmd;
pub use import::ImportCmd;
pub use setup::SetupCmd;
pub use user::UserCmd;
pub use word::WordCmd;

use clap::Subcommand;
use std::error::Error;

use crate::db::Database;
use crate::output::{OutputFormat, Outputable};
use crate::stores::DuplicatePolicy;

/// What every command executes against: the open database and the
/// configured defaults.
pub struct Session<'a> {
    pub db: &'a Database,
    pub on_duplicate: DuplicatePolicy,
}

impl<'a> Session<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self {
            db,
            on_duplicate: DuplicatePolicy::default(),
        }
    }

    pub fn with_policy(db: &'a Database, on_duplicate: DuplicatePolicy) -> Self {
        Self { db, on_duplicate }
    }
}

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, session: &Session<'_>) -> Result<Self::Output, Box<dyn Error>>;
}

/// Execute a command and format its result.
pub trait CommandRunner {
    fn run(self, session: &Session<'_>, format: OutputFormat) -> Result<String, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database schema
    Setup(SetupCmd),

    /// Register accounts and check credentials
    User(UserCmd),

    /// Add, edit, look up and search words
    Word(WordCmd),

    /// Manage per-user categories and their words
    Category(CategoryCmd),

    /// Import words from a CSV file
    Import(ImportCmd),

    /// Record and review study attempts
    History(HistoryCmd),

    /// Catch-all for unknown commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, session: &Session<'_>, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Setup(cmd) => cmd.run(session, format),
            Command::User(cmd) => cmd.run(session, format),
            Command::Word(cmd) => cmd.run(session, format),
            Command::Category(cmd) => cmd.run(session, format),
            Command::Import(cmd) => cmd.run(session, format),
            Command::History(cmd) => cmd.run(session, format),
            Command::Unknown(args) => {
                Err(format!("Unknown command: {}", args.first().unwrap_or(&String::new())).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    #[rstest]
    fn test_unknown_command_errors() {
        let args = Args::try_parse_from(["wordbook", "quiz"]).unwrap();
        let db = Database::open_in_memory().unwrap();
        let err = args
            .command
            .run(&Session::new(&db), OutputFormat::Table)
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: quiz");
    }

    #[rstest]
    fn test_session_policy() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(Session::new(&db).on_duplicate, DuplicatePolicy::Keep);
        assert_eq!(
            Session::with_policy(&db, DuplicatePolicy::Reject).on_duplicate,
            DuplicatePolicy::Reject
        );
    }
}
