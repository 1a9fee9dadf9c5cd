//! # stockboard-core
//!
//! Domain layer containing entities, value objects, and collaborator traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Comment, CommentChanges, NewComment, NewStock, Stock, User};
pub use error::DomainError;
pub use traits::{
    CommentRepository, MarketDataClient, RepoResult, StockRepository, UserRepository,
};
pub use value_objects::{Symbol, SymbolParseError};
