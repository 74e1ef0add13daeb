//! Output formatting for category command results.

use super::execute::CategoryResult;
use crate::output::{Outputable, word_list_table};

impl Outputable for CategoryResult {
    fn to_table(&self) -> String {
        match self {
            CategoryResult::Created {
                category_id,
                name,
                owner,
            } => format!("Category [{}] {} (owner: {})", category_id, name, owner),
            CategoryResult::Listed { title, categories } => {
                let mut lines = vec![title.clone(), String::new()];
                if categories.is_empty() {
                    lines.push("No categories found.".to_string());
                } else {
                    lines.push(format!("Categories ({}):", categories.len()));
                    for c in categories {
                        lines.push(format!("  [{}] {} (owner: {})", c.id, c.name, c.owner));
                    }
                }
                lines.join("\n")
            }
            CategoryResult::Deleted {
                category_id,
                deleted,
            } => {
                if *deleted {
                    format!("Deleted category {}", category_id)
                } else {
                    format!("Category {} not deleted: not found or not owned by you", category_id)
                }
            }
            CategoryResult::Renamed {
                category_id,
                name,
                renamed,
            } => {
                if *renamed {
                    format!("Renamed category {} to {}", category_id, name)
                } else {
                    format!("Category {} not renamed: not found or not owned by you", category_id)
                }
            }
            CategoryResult::Linked {
                category_id,
                word_id,
                linked,
            } => {
                if *linked {
                    format!("Linked word {} to category {}", word_id, category_id)
                } else {
                    format!("Word {} already in category {}", word_id, category_id)
                }
            }
            CategoryResult::Unlinked {
                category_id,
                word_id,
                removed,
            } => {
                if *removed {
                    format!("Removed word {} from category {}", word_id, category_id)
                } else {
                    format!("Word {} was not in category {}", word_id, category_id)
                }
            }
            CategoryResult::Words {
                category_ids,
                words,
            } => {
                let ids: Vec<String> = category_ids.iter().map(|id| id.to_string()).collect();
                let title = format!("Words in category {}", ids.join(", "));
                word_list_table(&title, words, "No words found.")
            }
            CategoryResult::Summary { categories } => {
                let mut lines = vec!["Category Summary".to_string(), String::new()];
                if categories.is_empty() {
                    lines.push("No categories found.".to_string());
                    return lines.join("\n");
                }
                for s in categories {
                    lines.push(format!(
                        "  [{}] {} by {} ({} words)",
                        s.category.id, s.category.name, s.creator_name, s.word_count
                    ));
                }
                lines.join("\n")
            }
        }
    }
}
