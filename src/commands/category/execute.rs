use std::error::Error;

use serde::Serialize;

use super::{CategoryAction, CategoryCmd};
use crate::commands::{Execute, Session};
use crate::stores::CategoryStore;
use crate::types::{Category, CategorySummary, Word};

/// Result of a category command
#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CategoryResult {
    Created {
        category_id: i64,
        name: String,
        owner: String,
    },
    Listed {
        title: String,
        categories: Vec<Category>,
    },
    Deleted {
        category_id: i64,
        deleted: bool,
    },
    Renamed {
        category_id: i64,
        name: String,
        renamed: bool,
    },
    Linked {
        category_id: i64,
        word_id: i64,
        linked: bool,
    },
    Unlinked {
        category_id: i64,
        word_id: i64,
        removed: bool,
    },
    Words {
        category_ids: Vec<i64>,
        words: Vec<Word>,
    },
    Summary {
        categories: Vec<CategorySummary>,
    },
}

impl Execute for CategoryCmd {
    type Output = CategoryResult;

    fn execute(self, session: &Session<'_>) -> Result<Self::Output, Box<dyn Error>> {
        let categories = CategoryStore::new(session.db);

        let result = match self.action {
            CategoryAction::Create(args) => {
                let category_id = if args.if_missing {
                    categories.get_or_create(&args.user, &args.name)?
                } else {
                    categories.create(&args.user, &args.name)?
                };
                CategoryResult::Created {
                    category_id,
                    name: args.name.trim().to_string(),
                    owner: args.user,
                }
            }
            CategoryAction::List(args) => CategoryResult::Listed {
                title: format!("Categories of {}", args.user),
                categories: categories.categories_of_owner(&args.user)?,
            },
            CategoryAction::Delete(args) => CategoryResult::Deleted {
                category_id: args.category_id,
                deleted: categories.delete(args.category_id, &args.user)?,
            },
            CategoryAction::Rename(args) => CategoryResult::Renamed {
                category_id: args.category_id,
                renamed: categories.rename(args.category_id, &args.name, &args.user)?,
                name: args.name.trim().to_string(),
            },
            CategoryAction::Link(args) => CategoryResult::Linked {
                category_id: args.category_id,
                word_id: args.word_id,
                linked: categories.add_word_to_category(args.category_id, args.word_id)?,
            },
            CategoryAction::Unlink(args) => CategoryResult::Unlinked {
                category_id: args.category_id,
                word_id: args.word_id,
                removed: categories.remove_word_from_category(args.category_id, args.word_id)?,
            },
            CategoryAction::Words(args) => {
                let words = match args.category_ids.as_slice() {
                    [single] => categories.words_in(*single)?,
                    many => categories.words_in_any(many)?,
                };
                CategoryResult::Words {
                    category_ids: args.category_ids,
                    words,
                }
            }
            CategoryAction::OfWord(args) => CategoryResult::Listed {
                title: format!("Categories of word {}", args.word_id),
                categories: categories.categories_of_word(args.word_id)?,
            },
            CategoryAction::Summary => CategoryResult::Summary {
                categories: categories.summaries()?,
            },
        };

        Ok(result)
    }
}
