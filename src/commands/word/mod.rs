mod execute;
mod output;
mod output_tests;

use std::error::Error;

use clap::{Args, Subcommand};

use crate::commands::{CommandRunner, Execute, Session};
use crate::output::{OutputFormat, Outputable};
use crate::stores::DuplicatePolicy;

pub use execute::WordResult;

/// Add, edit, look up and search words
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  wordbook word add apple 사과 --pos 명사 --example 'This is an apple.'
  wordbook word search app           # Lemma or meaning starting with 'app'
  wordbook word wrong --min 2        # Words missed at least twice
  wordbook word miss 12              # Count one more miss for word 12")]
pub struct WordCmd {
    #[command(subcommand)]
    pub action: WordAction,
}

#[derive(Subcommand, Debug)]
pub enum WordAction {
    /// Add a word (an existing lemma is handled by the duplicate policy)
    Add(AddArgs),
    /// Replace every field of a word
    Update(UpdateArgs),
    /// Delete a word with its history and category links
    Delete(WordIdArgs),
    /// Show one word in detail
    Show(WordIdArgs),
    /// List every word
    List,
    /// Find words whose lemma or meaning starts with a keyword
    Search(SearchArgs),
    /// List words missed at least a number of times
    Wrong(WrongArgs),
    /// Count one more miss for a word
    Miss(WordIdArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// English lemma
    pub english: String,

    pub meaning: String,

    /// Part of speech
    #[arg(long)]
    pub pos: Option<String>,

    /// Example sentence
    #[arg(long)]
    pub example: Option<String>,

    /// Override the configured duplicate policy
    #[arg(long, value_enum)]
    pub on_duplicate: Option<DuplicatePolicy>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub word_id: i64,

    pub english: String,

    pub meaning: String,

    #[arg(long)]
    pub pos: Option<String>,

    #[arg(long)]
    pub example: Option<String>,
}

#[derive(Args, Debug)]
pub struct WordIdArgs {
    pub word_id: i64,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    pub keyword: String,
}

#[derive(Args, Debug)]
pub struct WrongArgs {
    /// Minimum number of misses
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(0..))]
    pub min: i64,
}

impl CommandRunner for WordCmd {
    fn run(self, session: &Session<'_>, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(session)?;
        Ok(result.format(format))
    }
}
