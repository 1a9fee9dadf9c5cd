//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Comment, CommentChanges, NewComment, NewStock, Stock, User};
use crate::error::DomainError;
use crate::value_objects::Symbol;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List every comment (no ordering guarantee)
    async fn find_all(&self) -> RepoResult<Vec<Comment>>;

    /// Find comment by ID
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Comment>>;

    /// Store a new comment and return it with its assigned id
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;

    /// Update title/content of an existing comment. Never inserts.
    async fn update(&self, id: i32, changes: &CommentChanges) -> RepoResult<Option<Comment>>;

    /// Remove a comment, returning what was removed
    async fn delete(&self, id: i32) -> RepoResult<Option<Comment>>;
}

// ============================================================================
// Stock Repository
// ============================================================================

#[async_trait]
pub trait StockRepository: Send + Sync {
    /// Find stock by ticker symbol
    async fn find_by_symbol(&self, symbol: &Symbol) -> RepoResult<Option<Stock>>;

    /// Store a new stock. Returns the existing row if the symbol is already taken.
    async fn create(&self, stock: &NewStock) -> RepoResult<Stock>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: &str) -> RepoResult<Option<String>>;
}
