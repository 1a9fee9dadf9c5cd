//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Symbol;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("This stock doesn't exist: {0}")]
    UnknownStock(Symbol),

    // =========================================================================
    // Identity Errors
    // =========================================================================
    #[error("Authenticated user could not be resolved: {0}")]
    IdentityNotResolved(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username or email already in use")]
    UserAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Market data provider error: {0}")]
    MarketDataError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Validation
            Self::UnknownStock(_) => "VALIDATION_ERROR",

            // Identity
            Self::IdentityNotResolved(_) => "IDENTITY_ERROR",

            // Conflict
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::MarketDataError(_) => "MARKET_DATA_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::UnknownStock(_))
    }

    /// Check if the caller's identity could not be established
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::IdentityNotResolved(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UserAlreadyExists)
    }

    /// Check if an upstream provider failed
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::MarketDataError(_))
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        if self.is_validation() {
            400
        } else if self.is_authentication() {
            401
        } else if self.is_conflict() {
            409
        } else if self.is_upstream() {
            502
        } else {
            500
        }
    }
}
