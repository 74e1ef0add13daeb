mod execute;
mod output;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use crate::commands::{CommandRunner, Execute, Session};
use crate::output::{OutputFormat, Outputable};
use crate::stores::DuplicatePolicy;

pub use execute::ImportResult;

fn validate_file_exists(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("File not found: {}", path.display()))
    }
}

/// Import words from a CSV file
#[derive(Args, Debug)]
#[command(after_help = "\
The file needs a header row with 'english' and 'meaning'; 'part_of_speech',
'example_sentence' and 'category' are optional. Categories are created for
the importing user as needed.

Examples:
  wordbook import -f words.csv --user alice
  wordbook import -f words.csv --user alice --on-duplicate overwrite")]
pub struct ImportCmd {
    /// Path to the CSV file
    #[arg(short, long, value_parser = validate_file_exists)]
    pub file: PathBuf,

    /// User who owns the categories named in the file
    #[arg(short, long)]
    pub user: String,

    /// Override the configured duplicate policy
    #[arg(long, value_enum)]
    pub on_duplicate: Option<DuplicatePolicy>,
}

impl CommandRunner for ImportCmd {
    fn run(self, session: &Session<'_>, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(session)?;
        Ok(result.format(format))
    }
}
