//! Study log.

use rusqlite::params;

use super::words::WordStore;
use crate::db::{Database, StoreResult};
use crate::types::{HistoryEntry, StudyType};

pub struct HistoryStore<'a> {
    db: &'a Database,
}

impl<'a> HistoryStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Append one attempt. An unknown user or word is a constraint violation.
    pub fn record(
        &self,
        user_id: &str,
        word_id: i64,
        is_correct: bool,
        study_type: StudyType,
    ) -> StoreResult<i64> {
        self.db.unit_of_work(|db| {
            db.execute(
                "INSERT INTO WordHistory (user_id, word_id, is_correct, study_type) VALUES (?1, ?2, ?3, ?4)",
                params![user_id, word_id, is_correct, study_type],
            )?;
            Ok(db.last_insert_id())
        })
    }

    /// Record an answer and bump the word's wrong count when it was missed.
    ///
    /// Both writes go through this store's connection in one unit of work.
    pub fn record_answer(
        &self,
        user_id: &str,
        word_id: i64,
        is_correct: bool,
        study_type: StudyType,
    ) -> StoreResult<i64> {
        self.db.unit_of_work(|db| {
            let id = self.record(user_id, word_id, is_correct, study_type)?;
            if !is_correct {
                WordStore::new(db).increment_wrong_count(word_id)?;
            }
            Ok(id)
        })
    }

    /// Most recent attempts first.
    pub fn for_user(&self, user_id: &str, limit: u32) -> StoreResult<Vec<HistoryEntry>> {
        self.db.fetch_all(
            "SELECT h.history_id, h.user_id, h.word_id, w.english, h.is_correct, h.study_type, h.studied_at \
             FROM WordHistory h JOIN Word w ON w.word_id = h.word_id \
             WHERE h.user_id = ?1 \
             ORDER BY h.studied_at DESC, h.history_id DESC \
             LIMIT ?2",
            params![user_id, limit],
            |row| {
                Ok(HistoryEntry {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    word_id: row.get(2)?,
                    english: row.get(3)?,
                    is_correct: row.get(4)?,
                    study_type: row.get(5)?,
                    studied_at: row.get(6)?,
                })
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::StoreError;
    use crate::test_utils::{open_test_db, seed_users};
    use rstest::{fixture, rstest};

    #[fixture]
    fn db() -> Database {
        let db = open_test_db();
        seed_users(&db, &["alice"]);
        db
    }

    #[rstest]
    fn test_record_and_list_newest_first(db: Database) {
        let words = WordStore::new(&db);
        let apple = words.add("apple", "사과", None, None).unwrap();
        let banana = words.add("banana", "바나나", None, None).unwrap();
        let history = HistoryStore::new(&db);

        history.record("alice", apple, true, StudyType::Flashcard).unwrap();
        history.record("alice", banana, false, StudyType::Quiz).unwrap();

        let entries = history.for_user("alice", 10).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].english, "banana");
        assert_eq!(entries[0].study_type, StudyType::Quiz);
        assert!(!entries[0].is_correct);
        assert_eq!(entries[1].english, "apple");
    }

    #[rstest]
    fn test_for_user_respects_limit(db: Database) {
        let apple = WordStore::new(&db).add("apple", "사과", None, None).unwrap();
        let history = HistoryStore::new(&db);
        for _ in 0..5 {
            history.record("alice", apple, true, StudyType::Spelling).unwrap();
        }
        assert_eq!(history.for_user("alice", 3).unwrap().len(), 3);
        assert!(history.for_user("bob", 3).unwrap().is_empty());
    }

    #[rstest]
    #[case("ghost", true)]
    #[case("alice", false)]
    fn test_record_unknown_reference(db: Database, #[case] user_id: &str, #[case] word_exists: bool) {
        let word_id = if word_exists {
            WordStore::new(&db).add("apple", "사과", None, None).unwrap()
        } else {
            404
        };
        let err = HistoryStore::new(&db)
            .record(user_id, word_id, true, StudyType::Quiz)
            .unwrap_err();
        assert!(matches!(err, StoreError::ConstraintViolation { .. }));
    }

    #[rstest]
    fn test_record_answer_increments_on_miss(db: Database) {
        let words = WordStore::new(&db);
        let apple = words.add("apple", "사과", None, None).unwrap();
        let history = HistoryStore::new(&db);

        history.record_answer("alice", apple, false, StudyType::Quiz).unwrap();
        history.record_answer("alice", apple, true, StudyType::Quiz).unwrap();
        history.record_answer("alice", apple, false, StudyType::Listening).unwrap();

        assert_eq!(words.get_details(apple).unwrap().unwrap().wrong_count, 2);
        assert_eq!(history.for_user("alice", 10).unwrap().len(), 3);
    }

    #[rstest]
    fn test_record_answer_rolls_back_on_failure(db: Database) {
        let history = HistoryStore::new(&db);
        let result = history.record_answer("ghost", 404, false, StudyType::Quiz);
        assert!(result.is_err());
        assert!(!db.in_transaction());
    }

    #[rstest]
    fn test_record_answer_touches_only_its_own_database(db: Database) {
        let apple = WordStore::new(&db).add("apple", "사과", None, None).unwrap();
        let other = open_test_db();
        seed_users(&other, &["alice"]);
        let other_apple = WordStore::new(&other).add("apple", "사과", None, None).unwrap();

        HistoryStore::new(&db)
            .record_answer("alice", apple, false, StudyType::Quiz)
            .unwrap();

        assert_eq!(WordStore::new(&db).get_details(apple).unwrap().unwrap().wrong_count, 1);
        assert_eq!(WordStore::new(&other).get_details(other_apple).unwrap().unwrap().wrong_count, 0);
        assert!(HistoryStore::new(&other).for_user("alice", 10).unwrap().is_empty());
    }

    #[rstest]
    fn test_wrong_count_not_bumped_when_history_insert_fails(db: Database) {
        let apple = WordStore::new(&db).add("apple", "사과", None, None).unwrap();
        let err = HistoryStore::new(&db)
            .record_answer("ghost", apple, false, StudyType::Quiz)
            .unwrap_err();

        assert!(matches!(err, StoreError::ConstraintViolation { .. }));
        assert_eq!(WordStore::new(&db).get_details(apple).unwrap().unwrap().wrong_count, 0);
    }
}
