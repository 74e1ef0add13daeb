//! Bulk CSV import into the word pool.
//!
//! The file is header-first with `english` and `meaning` required and
//! `part_of_speech`, `example_sentence` and `category` optional. Problems
//! with single rows are logged and counted; only a missing file or a header
//! without the required columns aborts the import.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};

use super::categories::CategoryStore;
use super::words::{AddOutcome, WordStore};
use crate::db::{StoreError, StoreResult};

const REQUIRED_COLUMNS: [&str; 2] = ["english", "meaning"];
const BOM: char = '\u{feff}';

/// Counters reported after an import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub rows_processed: usize,
    pub rows_skipped: usize,
    pub words_inserted: usize,
    pub words_existing: usize,
    pub words_updated: usize,
    pub links_created: usize,
    pub row_failures: usize,
}

#[derive(Debug, Deserialize)]
struct CsvWordRow {
    #[serde(default)]
    english: String,
    #[serde(default)]
    meaning: String,
    #[serde(default)]
    part_of_speech: Option<String>,
    #[serde(default)]
    example_sentence: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

impl WordStore<'_> {
    /// Import words from the CSV file at `path`, filing them into `owner`'s
    /// categories.
    pub fn import_csv(
        &self,
        path: &Path,
        owner: &str,
        categories: &CategoryStore<'_>,
    ) -> StoreResult<ImportSummary> {
        let file = File::open(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let summary = self.import_reader(file, owner, categories)?;
        tracing::info!(
            path = %path.display(),
            owner,
            processed = summary.rows_processed,
            inserted = summary.words_inserted,
            existing = summary.words_existing,
            updated = summary.words_updated,
            links = summary.links_created,
            skipped = summary.rows_skipped,
            failures = summary.row_failures,
            "import finished"
        );
        Ok(summary)
    }

    /// Import from any reader producing CSV text.
    ///
    /// A category is linked only when the row inserted or updated its word.
    /// A duplicate lemma kept as-is therefore leaves the first row's
    /// category as the only link.
    pub fn import_reader<R: Read>(
        &self,
        input: R,
        owner: &str,
        categories: &CategoryStore<'_>,
    ) -> StoreResult<ImportSummary> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(input);

        let headers = normalize_headers(reader.headers()?);
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(StoreError::MissingColumn {
                    name: column.to_string(),
                });
            }
        }
        reader.set_headers(headers);

        let mut summary = ImportSummary::default();
        for (index, record) in reader.deserialize::<CsvWordRow>().enumerate() {
            let line = index + 2;
            summary.rows_processed += 1;

            let row = match record {
                Ok(row) => row,
                Err(err) => {
                    tracing::warn!(line, error = %err, "unreadable CSV row");
                    summary.row_failures += 1;
                    continue;
                }
            };

            let english = row.english.trim();
            let meaning = row.meaning.trim();
            if english.is_empty() || meaning.is_empty() {
                tracing::warn!(line, "skipping row without english or meaning");
                summary.rows_skipped += 1;
                continue;
            }

            let (word_id, outcome) = match self.add_detailed(
                english,
                meaning,
                row.part_of_speech.as_deref(),
                row.example_sentence.as_deref(),
            ) {
                Ok(added) => added,
                Err(err) => {
                    tracing::warn!(line, english, error = %err, "failed to add word");
                    summary.row_failures += 1;
                    continue;
                }
            };

            match outcome {
                AddOutcome::Inserted => summary.words_inserted += 1,
                AddOutcome::Updated => summary.words_updated += 1,
                AddOutcome::Existing => {
                    summary.words_existing += 1;
                    continue;
                }
            }

            let Some(category) = row
                .category
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
            else {
                continue;
            };

            let linked = categories
                .get_or_create(owner, category)
                .and_then(|category_id| categories.add_word_to_category(category_id, word_id));
            match linked {
                Ok(true) => summary.links_created += 1,
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!(line, english, category, error = %err, "failed to link word");
                    summary.row_failures += 1;
                }
            }
        }

        Ok(summary)
    }
}

/// Strip a leading byte-order mark and surrounding whitespace from header
/// names.
fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|h| h.trim_start_matches(BOM).trim())
        .collect()
}
