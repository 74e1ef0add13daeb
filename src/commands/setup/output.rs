//! Output formatting for setup command results.

use super::execute::{SetupResult, TableState};
use crate::output::Outputable;

impl Outputable for SetupResult {
    fn to_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Database Setup: {}\n\n", self.database));

        if self.dry_run {
            output.push_str("Schema creation (dry-run):\n");
        } else {
            output.push_str("Schema creation:\n");
        }

        for table in &self.tables {
            let (symbol, status_text) = match table.status {
                TableState::Created => ("✓", "created"),
                TableState::AlreadyExists => ("✓", "exists"),
                TableState::WouldCreate => ("→", "would create"),
            };
            output.push_str(&format!("  {} {} ({})\n", symbol, table.name, status_text));
        }

        if self.dry_run {
            output.push_str("\nNo changes made (dry-run mode).");
        } else if self.created_new {
            output.push_str("\nDatabase ready.");
        } else {
            output.push_str("\nDatabase already configured.");
        }

        output
    }
}
