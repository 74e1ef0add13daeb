//! wordbook library - vocabulary study data layer
//!
//! Provides the SQLite-backed stores for users, words, categories and study
//! history, plus the command execution and output formatting used by the CLI.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod output;
pub mod stores;
pub mod types;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
