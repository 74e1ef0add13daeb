mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute, Session};
use crate::output::{OutputFormat, Outputable};

pub use execute::{SetupResult, TableState, TableStatus};

/// Create database schema without importing data
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  wordbook setup                        # Create schema at the resolved path
  wordbook setup --db ./words.sqlite    # Create schema in a specific file
  wordbook setup --dry-run              # Show what would be created")]
pub struct SetupCmd {
    /// Show what would be created without doing it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl CommandRunner for SetupCmd {
    fn run(self, session: &Session<'_>, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(session)?;
        Ok(result.format(format))
    }
}
