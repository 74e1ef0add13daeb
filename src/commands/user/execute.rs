use std::error::Error;

use serde::Serialize;

use super::{UserAction, UserCmd};
use crate::commands::{Execute, Session};
use crate::stores::UserStore;
use crate::types::User;

/// Result of a user command
#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserResult {
    Registered {
        user_id: String,
        is_admin: bool,
    },
    Login {
        user_id: String,
        authenticated: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        user: Option<User>,
    },
}

impl Execute for UserCmd {
    type Output = UserResult;

    fn execute(self, session: &Session<'_>) -> Result<Self::Output, Box<dyn Error>> {
        let users = UserStore::new(session.db);

        match self.action {
            UserAction::Register(args) => {
                let user_id = users.register(&args.user_id, &args.password, &args.name, args.admin)?;
                Ok(UserResult::Registered {
                    user_id,
                    is_admin: args.admin,
                })
            }
            UserAction::Login(args) => {
                let user = users.login(&args.user_id, &args.password)?;
                if user.is_none() {
                    tracing::warn!(user_id = %args.user_id, "login failed");
                }
                Ok(UserResult::Login {
                    user_id: args.user_id,
                    authenticated: user.is_some(),
                    user,
                })
            }
        }
    }
}
