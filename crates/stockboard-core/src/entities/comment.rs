//! Comment entity - a user's note attached to a stock

use chrono::{DateTime, Utc};

/// Persisted comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_on: DateTime<Utc>,
    pub stock_id: i32,
    pub app_user_id: String,
}

impl Comment {
    /// Apply an edit. Only title and content are mutable.
    pub fn apply(&mut self, changes: CommentChanges) {
        self.title = changes.title;
        self.content = changes.content;
    }
}

/// A comment that has not been stored yet (no id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub title: String,
    pub content: String,
    pub created_on: DateTime<Utc>,
    pub stock_id: i32,
    pub app_user_id: String,
}

impl NewComment {
    /// Create a new comment stamped with the current time
    pub fn new(title: String, content: String, stock_id: i32, app_user_id: String) -> Self {
        Self {
            title,
            content,
            created_on: Utc::now(),
            stock_id,
            app_user_id,
        }
    }

    /// Attach a store-assigned id
    pub fn into_comment(self, id: i32) -> Comment {
        Comment {
            id,
            title: self.title,
            content: self.content,
            created_on: self.created_on,
            stock_id: self.stock_id,
            app_user_id: self.app_user_id,
        }
    }
}

/// Editable comment fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentChanges {
    pub title: String,
    pub content: String,
}
