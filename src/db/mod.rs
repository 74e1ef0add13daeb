//! SQLite access layer.
//!
//! - Connection management (file-backed or in-memory for tests)
//! - Statement execution with parameter binding and typed row decoding
//! - Unit-of-work transactions
//! - Schema creation
//!
//! Integers come back from SQLite as `i64`, so ids and counts stay `i64`
//! throughout instead of being narrowed.

mod connection;
mod error;
mod escape;
pub mod schema;

pub use connection::{Database, IN_MEMORY};
pub use error::{StoreError, StoreResult};
pub use escape::{escape_like, prefix_pattern};
