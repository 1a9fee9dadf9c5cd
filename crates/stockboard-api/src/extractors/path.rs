//! Path parameter extractors
//!
//! The comment routes share one `/:id` segment; these extractors give it a
//! type per handler.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use stockboard_core::Symbol;

use crate::response::ApiError;

async fn single_segment<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<String, ApiError> {
    let Path(raw) = Path::<String>::from_request_parts(parts, state)
        .await
        .map_err(|e| ApiError::invalid_path(e.body_text()))?;
    Ok(raw)
}

/// Comment id: a positive 32-bit integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentId(pub i32);

impl CommentId {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(ApiError::invalid_path(format!(
                "Comment id must be a positive integer, got {raw:?}"
            ))),
        }
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CommentId {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Self::parse(&single_segment(parts, state).await?)
    }
}

/// Ticker symbol, normalized to uppercase
///
/// The segment must be letters only; surrounding whitespace is rejected here
/// even though `Symbol::parse` would trim it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolPath(pub Symbol);

impl SymbolPath {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        if raw.trim() != raw {
            return Err(ApiError::invalid_path(format!(
                "Invalid symbol {raw:?}: surrounding whitespace"
            )));
        }
        Symbol::parse(raw)
            .map(SymbolPath)
            .map_err(|e| ApiError::invalid_path(format!("Invalid symbol {raw:?}: {e}")))
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for SymbolPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Self::parse(&single_segment(parts, state).await?)
    }
}
