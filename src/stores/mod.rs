//! Stores over the vocabulary schema.
//!
//! Each store borrows a [`Database`](crate::db::Database); there is no global
//! instance. Construct the stores you need from one open database:
//!
//! ```no_run
//! use wordbook::db::{Database, schema};
//! use wordbook::stores::{CategoryStore, WordStore};
//!
//! let db = Database::open("wordbook.sqlite")?;
//! schema::create_schema(&db)?;
//! let words = WordStore::new(&db);
//! let categories = CategoryStore::new(&db);
//! let id = words.add("apple", "사과", Some("명사"), None)?;
//! # Ok::<(), wordbook::db::StoreError>(())
//! ```

mod categories;
mod history;
mod import;
mod password;
mod users;
mod words;

pub use categories::CategoryStore;
pub use history::HistoryStore;
pub use import::ImportSummary;
pub use users::UserStore;
pub use words::{AddOutcome, DuplicatePolicy, WordStore};
