//! Output formatting tests for word command.

#[cfg(test)]
mod tests {
    use super::super::execute::WordResult;
    use crate::fixtures::sample_word;
    use crate::stores::AddOutcome;
    use rstest::{fixture, rstest};

    // =========================================================================
    // Expected outputs
    // =========================================================================

    const DETAILS_TABLE: &str = "\
apple [1]

  Meaning: 사과
  Part of speech: 명사
  Example: This is an apple.
  Wrong count: 2
  Categories: 과일
  Added: 2024-03-01 09:30:00";

    const LIST_TABLE: &str = "\
Search: a

Words (2):
  [1] apple (명사) - 사과  missed 2x  {과일}
  [2] avocado - 아보카도";

    const EMPTY_LIST_TABLE: &str = "\
All words

No words found.";

    // =========================================================================
    // Fixtures
    // =========================================================================

    #[fixture]
    fn details_result() -> WordResult {
        let mut word = sample_word(1, "apple", "사과");
        word.part_of_speech = Some("명사".to_string());
        word.example_sentence = Some("This is an apple.".to_string());
        word.wrong_count = 2;
        word.categories = vec!["과일".to_string()];
        WordResult::Details { word }
    }

    #[fixture]
    fn list_result() -> WordResult {
        let mut apple = sample_word(1, "apple", "사과");
        apple.part_of_speech = Some("명사".to_string());
        apple.wrong_count = 2;
        apple.categories = vec!["과일".to_string()];
        WordResult::Listed {
            title: "Search: a".to_string(),
            words: vec![apple, sample_word(2, "avocado", "아보카도")],
        }
    }

    #[fixture]
    fn empty_list_result() -> WordResult {
        WordResult::Listed {
            title: "All words".to_string(),
            words: vec![],
        }
    }

    #[fixture]
    fn kept_result() -> WordResult {
        WordResult::Added {
            word_id: 3,
            english: "apple".to_string(),
            outcome: AddOutcome::Existing,
        }
    }

    // =========================================================================
    // Tests
    // =========================================================================

    crate::output_table_test! {
        test_name: test_details_table,
        fixture: details_result,
        fixture_type: WordResult,
        expected: DETAILS_TABLE,
    }

    crate::output_table_test! {
        test_name: test_list_table,
        fixture: list_result,
        fixture_type: WordResult,
        expected: LIST_TABLE,
    }

    crate::output_table_test! {
        test_name: test_empty_list_table,
        fixture: empty_list_result,
        fixture_type: WordResult,
        expected: EMPTY_LIST_TABLE,
    }

    crate::output_table_test! {
        test_name: test_kept_table,
        fixture: kept_result,
        fixture_type: WordResult,
        expected: "Kept existing [3] apple",
    }

    crate::output_json_test! {
        test_name: test_kept_json,
        fixture: kept_result,
        fixture_type: WordResult,
        assertions: {
            "action": "added",
            "outcome": "existing",
            "word_id": 3,
        },
    }

    crate::output_toon_test! {
        test_name: test_list_toon,
        fixture: list_result,
        fixture_type: WordResult,
        contains: ["action: listed", "apple", "avocado"],
    }

    #[rstest]
    fn test_details_json_omits_missing_optionals() {
        let result = WordResult::Details {
            word: sample_word(9, "happy", "행복한"),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value["word"].get("part_of_speech").is_none());
        assert_eq!(value["word"]["categories"], serde_json::json!([]));
    }
}
