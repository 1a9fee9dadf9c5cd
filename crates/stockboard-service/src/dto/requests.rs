//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

use stockboard_core::entities::CommentChanges;

// ============================================================================
// Comment Requests
// ============================================================================

/// Body of `POST /api/controller/{symbol}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 280, message = "Title must be 1-280 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 280, message = "Content must be 1-280 characters"))]
    pub content: String,
}

/// Body of `PUT /api/controller/{id}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 280, message = "Title must be 1-280 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 280, message = "Content must be 1-280 characters"))]
    pub content: String,
}

impl From<UpdateCommentRequest> for CommentChanges {
    fn from(request: UpdateCommentRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
        }
    }
}

// ============================================================================
// Account Requests
// ============================================================================

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// Account login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}
