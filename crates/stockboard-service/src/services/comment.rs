//! Comment service
//!
//! CRUD over comments. Creating a comment on a symbol the store has never seen
//! imports the stock from market data first.

use stockboard_core::entities::{CommentChanges, NewComment, Stock, User};
use stockboard_core::error::DomainError;
use stockboard_core::value_objects::Symbol;
use tracing::{info, instrument, warn};

use crate::dto::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const COMMENT_NOT_FOUND: &str = "Comment not found";
const COMMENT_DOES_NOT_EXIST: &str = "Comment does not exist";

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All comments in store order
    #[instrument(skip(self))]
    pub async fn list_comments(&self) -> ServiceResult<Vec<CommentResponse>> {
        let comments = self.ctx.comment_repo().find_all().await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_comment(&self, id: i32) -> ServiceResult<CommentResponse> {
        self.ctx
            .comment_repo()
            .find_by_id(id)
            .await?
            .map(CommentResponse::from)
            .ok_or_else(|| ServiceError::not_found(COMMENT_NOT_FOUND))
    }

    /// Create a comment on `symbol` authored by `username`
    ///
    /// The author is resolved before any stock lookup, so an unknown author
    /// never reaches market data. At most one stock is imported and exactly
    /// one comment is written. An unknown symbol writes nothing.
    #[instrument(skip(self, request), fields(symbol = %symbol))]
    pub async fn create_comment(
        &self,
        symbol: &Symbol,
        username: &str,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let author = self.resolve_author(username).await?;
        let stock = self.resolve_stock(symbol).await?;

        let draft = NewComment::new(request.title, request.content, stock.id, author.id);
        let comment = self.ctx.comment_repo().create(&draft).await?;

        info!(comment_id = comment.id, stock_id = stock.id, "Comment created");
        Ok(CommentResponse::from(comment))
    }

    /// Replace title and content. Never creates a comment.
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        id: i32,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let changes = CommentChanges::from(request);
        let comment = self
            .ctx
            .comment_repo()
            .update(id, &changes)
            .await?
            .ok_or_else(|| ServiceError::not_found(COMMENT_NOT_FOUND))?;

        info!(comment_id = comment.id, "Comment updated");
        Ok(CommentResponse::from(comment))
    }

    /// Remove a comment and return what was removed
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, id: i32) -> ServiceResult<CommentResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .delete(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(COMMENT_DOES_NOT_EXIST))?;

        info!(comment_id = comment.id, "Comment deleted");
        Ok(CommentResponse::from(comment))
    }

    /// Local stock, or one imported from market data
    async fn resolve_stock(&self, symbol: &Symbol) -> ServiceResult<Stock> {
        if let Some(stock) = self.ctx.stock_repo().find_by_symbol(symbol).await? {
            return Ok(stock);
        }

        let Some(draft) = self.ctx.market_client().find_by_symbol(symbol).await? else {
            warn!("Rejected comment on unknown stock");
            return Err(DomainError::UnknownStock(symbol.clone()).into());
        };

        let stock = self.ctx.stock_repo().create(&draft).await?;
        info!(stock_id = stock.id, "Stock imported from market data");
        Ok(stock)
    }

    async fn resolve_author(&self, username: &str) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                warn!(username, "Authenticated user has no account");
                DomainError::IdentityNotResolved(username.to_string()).into()
            })
    }
}
