//! Execute tests for category command.
//!
//! The sample import gives alice two categories: 과일 (id 1: apple, banana)
//! and 학습 (id 2: study).

#[cfg(test)]
mod tests {
    use super::super::execute::CategoryResult;
    use super::super::{
        CategoryAction, CategoryCmd, CreateArgs, LinkArgs, OfWordArgs, OwnedCategoryArgs,
        OwnerArgs, RenameArgs, WordsArgs,
    };
    use crate::commands::{Execute, Session};
    use crate::db::{Database, StoreError};
    use crate::test_utils::sample_db;
    use rstest::{fixture, rstest};

    #[fixture]
    fn populated_db() -> Database {
        sample_db()
    }

    fn cmd(action: CategoryAction) -> CategoryCmd {
        CategoryCmd { action }
    }

    fn create(name: &str, if_missing: bool) -> CategoryCmd {
        cmd(CategoryAction::Create(CreateArgs {
            name: name.to_string(),
            user: "alice".to_string(),
            if_missing,
        }))
    }

    crate::execute_test! {
        test_name: test_list_owner,
        fixture: populated_db,
        cmd: cmd(CategoryAction::List(OwnerArgs { user: "alice".to_string() })),
        assertions: |result| {
            match result {
                CategoryResult::Listed { categories, .. } => {
                    let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
                    assert_eq!(names, vec!["과일", "학습"]);
                }
                other => panic!("Expected Listed, got {:?}", other),
            }
        },
    }

    crate::execute_test! {
        test_name: test_create_if_missing_returns_existing,
        fixture: populated_db,
        cmd: create("과일", true),
        assertions: |result| {
            assert!(matches!(result, CategoryResult::Created { category_id: 1, .. }));
        },
    }

    #[rstest]
    fn test_create_duplicate_fails(populated_db: Database) {
        let err = create("과일", false)
            .execute(&Session::new(&populated_db))
            .unwrap_err();
        assert!(err.downcast_ref::<StoreError>().unwrap().is_duplicate());
    }

    crate::execute_test! {
        test_name: test_words_single,
        fixture: populated_db,
        cmd: cmd(CategoryAction::Words(WordsArgs { category_ids: vec![1] })),
        assertions: |result| {
            match result {
                CategoryResult::Words { words, .. } => {
                    let english: Vec<_> = words.iter().map(|w| w.english.as_str()).collect();
                    assert_eq!(english, vec!["apple", "banana"]);
                }
                other => panic!("Expected Words, got {:?}", other),
            }
        },
    }

    crate::execute_test! {
        test_name: test_words_many,
        fixture: populated_db,
        cmd: cmd(CategoryAction::Words(WordsArgs { category_ids: vec![1, 2] })),
        assertions: |result| {
            assert!(matches!(result, CategoryResult::Words { ref words, .. } if words.len() == 3));
        },
    }

    crate::execute_test! {
        test_name: test_of_word,
        fixture: populated_db,
        cmd: cmd(CategoryAction::OfWord(OfWordArgs { word_id: 3 })),
        assertions: |result| {
            assert!(matches!(result, CategoryResult::Listed { ref categories, .. } if categories[0].name == "학습"));
        },
    }

    crate::execute_test! {
        test_name: test_delete_by_other_user_refused,
        fixture: populated_db,
        cmd: cmd(CategoryAction::Delete(OwnedCategoryArgs { category_id: 1, user: "bob".to_string() })),
        assertions: |result| {
            assert!(matches!(result, CategoryResult::Deleted { deleted: false, .. }));
        },
    }

    #[rstest]
    fn test_rename_collision_is_error(populated_db: Database) {
        let err = cmd(CategoryAction::Rename(RenameArgs {
            category_id: 2,
            name: "과일".to_string(),
            user: "alice".to_string(),
        }))
        .execute(&Session::new(&populated_db))
        .unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[rstest]
    fn test_link_then_unlink(populated_db: Database) {
        let session = Session::new(&populated_db);
        let linked = cmd(CategoryAction::Link(LinkArgs { category_id: 2, word_id: 4 }))
            .execute(&session)
            .unwrap();
        assert!(matches!(linked, CategoryResult::Linked { linked: true, .. }));

        let removed = cmd(CategoryAction::Unlink(LinkArgs { category_id: 2, word_id: 4 }))
            .execute(&session)
            .unwrap();
        assert!(matches!(removed, CategoryResult::Unlinked { removed: true, .. }));
    }

    crate::execute_test! {
        test_name: test_summary_counts,
        fixture: populated_db,
        cmd: cmd(CategoryAction::Summary),
        assertions: |result| {
            match result {
                CategoryResult::Summary { categories } => {
                    let counts: Vec<_> = categories.iter().map(|s| s.word_count).collect();
                    assert_eq!(counts, vec![2, 1]);
                }
                other => panic!("Expected Summary, got {:?}", other),
            }
        },
    }

    crate::execute_empty_db_test! {
        cmd_type: CategoryCmd,
        cmd: cmd(CategoryAction::Summary),
    }
}
