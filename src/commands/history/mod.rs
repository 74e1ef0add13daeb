mod execute;
mod output;

use std::error::Error;

use clap::{Args, Subcommand};

use crate::commands::{CommandRunner, Execute, Session};
use crate::output::{OutputFormat, Outputable};
use crate::types::StudyType;

pub use execute::HistoryResult;

/// Record and review study attempts
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  wordbook history record 3 --user alice --correct
  wordbook history record 3 --user alice --type spelling
  wordbook history list --user alice --limit 10")]
pub struct HistoryCmd {
    #[command(subcommand)]
    pub action: HistoryAction,
}

#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// Log one answer; a wrong answer also bumps the word's miss count
    Record(RecordArgs),
    /// Show a user's most recent attempts
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Word that was studied
    pub word_id: i64,

    #[arg(short, long)]
    pub user: String,

    /// The answer was right
    #[arg(long, default_value_t = false)]
    pub correct: bool,

    /// How the word was studied
    #[arg(short = 't', long = "type", value_enum, default_value_t = StudyType::Flashcard)]
    pub study_type: StudyType,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(short, long)]
    pub user: String,

    /// Maximum number of entries to show
    #[arg(short, long, default_value = "20", value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub limit: u32,
}

impl CommandRunner for HistoryCmd {
    fn run(self, session: &Session<'_>, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(session)?;
        Ok(result.format(format))
    }
}
