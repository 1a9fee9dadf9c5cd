//! Entity to DTO mappers

use stockboard_common::auth::TokenPair;
use stockboard_core::entities::{Comment, User};

use super::responses::{AuthResponse, CommentResponse};

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            title: comment.title.clone(),
            content: comment.content.clone(),
            created_on: comment.created_on,
            stock_id: comment.stock_id,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            title: comment.title,
            content: comment.content,
            created_on: comment.created_on,
            stock_id: comment.stock_id,
        }
    }
}

impl AuthResponse {
    /// Combine an account with a freshly issued token pair
    pub fn new(user: &User, tokens: TokenPair) -> Self {
        Self {
            user_name: user.username.clone(),
            email: user.email.clone(),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
        }
    }
}
