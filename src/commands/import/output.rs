//! Output formatting for import command results.

use super::execute::ImportResult;
use crate::output::Outputable;

impl Outputable for ImportResult {
    fn to_table(&self) -> String {
        let summary = &self.summary;
        let mut output = String::new();

        output.push_str(&format!("Import Summary: {} (owner: {})\n", self.file, self.owner));
        output.push_str(&format!("  Rows: {}\n", summary.rows_processed));
        output.push_str(&format!("  Inserted: {}\n", summary.words_inserted));
        output.push_str(&format!("  Already present: {}\n", summary.words_existing));
        output.push_str(&format!("  Updated: {}\n", summary.words_updated));
        output.push_str(&format!("  Category links: {}\n", summary.links_created));
        output.push_str(&format!("  Skipped: {}\n", summary.rows_skipped));
        output.push_str(&format!("  Failed: {}", summary.row_failures));

        output
    }
}
