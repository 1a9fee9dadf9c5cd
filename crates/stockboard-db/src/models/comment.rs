//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_on: DateTime<Utc>,
    pub stock_id: i32,
    pub app_user_id: String,
}
