//! Execute tests for user command.

#[cfg(test)]
mod tests {
    use super::super::execute::UserResult;
    use super::super::{LoginArgs, RegisterArgs, UserAction, UserCmd};
    use crate::commands::{Execute, Session};
    use crate::db::{Database, StoreError};
    use crate::test_utils::open_test_db;
    use rstest::{fixture, rstest};

    #[fixture]
    fn registered_db() -> Database {
        let db = open_test_db();
        register("alice", "pw").execute(&Session::new(&db)).unwrap();
        db
    }

    fn register(user_id: &str, password: &str) -> UserCmd {
        UserCmd {
            action: UserAction::Register(RegisterArgs {
                user_id: user_id.to_string(),
                password: password.to_string(),
                name: "Alice".to_string(),
                admin: false,
            }),
        }
    }

    fn login(user_id: &str, password: &str) -> UserCmd {
        UserCmd {
            action: UserAction::Login(LoginArgs {
                user_id: user_id.to_string(),
                password: password.to_string(),
            }),
        }
    }

    crate::execute_test! {
        test_name: test_login_success,
        fixture: registered_db,
        cmd: login("alice", "pw"),
        assertions: |result| {
            match result {
                UserResult::Login { authenticated, user, .. } => {
                    assert!(authenticated);
                    assert_eq!(user.unwrap().username, "Alice");
                }
                other => panic!("Expected Login, got {:?}", other),
            }
        },
    }

    crate::execute_test! {
        test_name: test_login_wrong_password,
        fixture: registered_db,
        cmd: login("alice", "nope"),
        assertions: |result| {
            assert!(matches!(result, UserResult::Login { authenticated: false, user: None, .. }));
        },
    }

    #[rstest]
    fn test_duplicate_register_is_error(registered_db: Database) {
        let err = register("alice", "other")
            .execute(&Session::new(&registered_db))
            .unwrap_err();
        let store_err = err.downcast_ref::<StoreError>().expect("StoreError");
        assert!(store_err.is_duplicate());
    }

    crate::execute_empty_db_test! {
        cmd_type: UserCmd,
        cmd: login("alice", "pw"),
    }
}
