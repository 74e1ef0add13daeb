//! Shared record types decoded from the vocabulary database.

mod records;
mod study;

pub use records::{Category, CategorySummary, HistoryEntry, User, Word};
pub use study::StudyType;
