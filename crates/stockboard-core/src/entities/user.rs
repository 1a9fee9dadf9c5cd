//! User entity - an application account that can author comments

use chrono::{DateTime, Utc};

/// User account. Identity ids are opaque strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: String, username: String, email: String) -> Self {
        Self {
            id,
            username,
            email,
            created_at: Utc::now(),
        }
    }
}
