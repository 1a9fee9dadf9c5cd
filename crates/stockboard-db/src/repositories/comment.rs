//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stockboard_core::entities::{Comment, CommentChanges, NewComment};
use stockboard_core::traits::{CommentRepository, RepoResult};

use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, title, content, created_on, stock_id, app_user_id
            FROM comments
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, title, content, created_on, stock_id, app_user_id
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Comment::from))
    }

    #[instrument(skip(self, comment), fields(stock_id = comment.stock_id))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        // Return the stored row so `created_on` carries the column's precision
        let row = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (title, content, created_on, stock_id, app_user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, content, created_on, stock_id, app_user_id
            ",
        )
        .bind(&comment.title)
        .bind(&comment.content)
        .bind(comment.created_on)
        .bind(comment.stock_id)
        .bind(&comment.app_user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Comment::from(row))
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: i32, changes: &CommentChanges) -> RepoResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentModel>(
            r"
            UPDATE comments
            SET title = $2, content = $3
            WHERE id = $1
            RETURNING id, title, content, created_on, stock_id, app_user_id
            ",
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.content)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> RepoResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentModel>(
            r"
            DELETE FROM comments
            WHERE id = $1
            RETURNING id, title, content, created_on, stock_id, app_user_id
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Comment::from))
    }
}
