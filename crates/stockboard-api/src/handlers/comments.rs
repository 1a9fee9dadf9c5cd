//! Comment handlers
//!
//! Endpoints under `/api/controller`.

use axum::{extract::State, Json};
use stockboard_service::{
    dto::{CommentResponse, CreateCommentRequest, UpdateCommentRequest},
    CommentService,
};

use crate::extractors::{AuthUser, CommentId, SymbolPath, ValidatedJson};
use crate::response::{ApiResult, CreatedAt};
use crate::state::AppState;

/// List all comments
///
/// GET /api/controller
pub async fn list_comments(State(state): State<AppState>) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service.list_comments().await?;
    Ok(Json(comments))
}

/// Get a comment by id
///
/// GET /api/controller/:id
pub async fn get_comment(
    State(state): State<AppState>,
    CommentId(id): CommentId,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service.get_comment(id).await?;
    Ok(Json(comment))
}

/// Post a comment on a stock
///
/// POST /api/controller/:symbol
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    SymbolPath(symbol): SymbolPath,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<CreatedAt<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service
        .create_comment(&symbol, &auth.username, request)
        .await?;
    Ok(CreatedAt::new(format!("/api/controller/{}", comment.id), comment))
}

/// Replace a comment's title and content
///
/// PUT /api/controller/:id
pub async fn update_comment(
    State(state): State<AppState>,
    CommentId(id): CommentId,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service.update_comment(id, request).await?;
    Ok(Json(comment))
}

/// Delete a comment
///
/// DELETE /api/controller/:id
pub async fn delete_comment(
    State(state): State<AppState>,
    CommentId(id): CommentId,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service.delete_comment(id).await?;
    Ok(Json(comment))
}
