mod execute;
mod execute_tests;
mod output;

use std::error::Error;

use clap::{Args, Subcommand};

use crate::commands::{CommandRunner, Execute, Session};
use crate::output::{OutputFormat, Outputable};

pub use execute::CategoryResult;

/// Manage per-user categories and their words
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  wordbook category create 과일 --user alice
  wordbook category list --user alice
  wordbook category link 3 12             # Put word 12 into category 3
  wordbook category words 3 4             # Words in category 3 or 4
  wordbook category rename 3 음식 --user alice")]
pub struct CategoryCmd {
    #[command(subcommand)]
    pub action: CategoryAction,
}

#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    /// Create a category
    Create(CreateArgs),
    /// List a user's categories
    List(OwnerArgs),
    /// Delete a category (its words are kept)
    Delete(OwnedCategoryArgs),
    /// Rename a category
    Rename(RenameArgs),
    /// Put a word into a category
    Link(LinkArgs),
    /// Take a word out of a category
    Unlink(LinkArgs),
    /// List the words in one or more categories
    Words(WordsArgs),
    /// List the categories a word belongs to
    OfWord(OfWordArgs),
    /// Every category with its creator and word count
    Summary,
}

#[derive(Args, Debug)]
pub struct OwnerArgs {
    /// Owning user id
    #[arg(long)]
    pub user: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    pub name: String,

    /// Owning user id
    #[arg(long)]
    pub user: String,

    /// Return the existing category instead of failing when the name is taken
    #[arg(long, default_value_t = false)]
    pub if_missing: bool,
}

#[derive(Args, Debug)]
pub struct OwnedCategoryArgs {
    pub category_id: i64,

    /// Acting user id (must own the category)
    #[arg(long)]
    pub user: String,
}

#[derive(Args, Debug)]
pub struct RenameArgs {
    pub category_id: i64,

    pub name: String,

    /// Acting user id (must own the category)
    #[arg(long)]
    pub user: String,
}

#[derive(Args, Debug)]
pub struct LinkArgs {
    pub category_id: i64,

    pub word_id: i64,
}

#[derive(Args, Debug)]
pub struct WordsArgs {
    /// One or more category ids
    #[arg(required = true, num_args = 1..)]
    pub category_ids: Vec<i64>,
}

#[derive(Args, Debug)]
pub struct OfWordArgs {
    pub word_id: i64,
}

impl CommandRunner for CategoryCmd {
    fn run(self, session: &Session<'_>, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(session)?;
        Ok(result.format(format))
    }
}
