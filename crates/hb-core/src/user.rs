//! User accounts for the demo credential check.
//!
//! Passwords are stored and compared in plaintext against the seeded
//! collection; there is no real authentication security in scope.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

/// The single demo account seeded into an absent user collection.
pub fn demo_user() -> User {
    User {
        id: UserId::new(1),
        email: "demo@hotel.com".into(),
        password: "demo123".into(),
        name: "Demo User".into(),
        role: Role::User,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn user_round_trips_through_json() {
        let user = demo_user();
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
