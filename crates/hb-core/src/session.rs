//! Authenticated session record.
//!
//! At most one session exists per client; its presence in the store means
//! a user is logged in, absence means anonymous.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;
use crate::user::{Role, User};

/// The currently authenticated user, minus the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl Session {
    /// Build a session from a matched user record, dropping the password.
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}
