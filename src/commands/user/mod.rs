mod execute;
mod execute_tests;
mod output;

use std::error::Error;

use clap::{Args, Subcommand};

use crate::commands::{CommandRunner, Execute, Session};
use crate::output::{OutputFormat, Outputable};

pub use execute::UserResult;

/// Register accounts and check credentials
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  wordbook user register --user-id alice --password pw --name Alice
  wordbook user register --user-id admin --password root --name Admin --admin
  wordbook user login --user-id alice --password pw")]
pub struct UserCmd {
    #[command(subcommand)]
    pub action: UserAction,
}

#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Create a new account
    Register(RegisterArgs),
    /// Check a user id and password
    Login(LoginArgs),
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Login id (must be unique)
    #[arg(long)]
    pub user_id: String,

    #[arg(long)]
    pub password: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// Grant administrator rights
    #[arg(long, default_value_t = false)]
    pub admin: bool,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub user_id: String,

    #[arg(long)]
    pub password: String,
}

impl CommandRunner for UserCmd {
    fn run(self, session: &Session<'_>, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(session)?;
        Ok(result.format(format))
    }
}
