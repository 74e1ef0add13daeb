//! Output formatting for user command results.

use super::execute::UserResult;
use crate::output::Outputable;

impl Outputable for UserResult {
    fn to_table(&self) -> String {
        match self {
            UserResult::Registered { user_id, is_admin } => {
                let role = if *is_admin { "admin" } else { "user" };
                format!("Registered {} ({})", user_id, role)
            }
            UserResult::Login {
                user_id,
                user: Some(user),
                ..
            } => {
                let role = if user.is_admin { ", admin" } else { "" };
                format!("Login ok: {} ({}{})", user_id, user.username, role)
            }
            UserResult::Login { user_id, .. } => {
                format!("Login failed for {}: unknown user or wrong password", user_id)
            }
        }
    }
}
