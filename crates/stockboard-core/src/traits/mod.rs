//! Collaborator traits implemented by infrastructure crates

mod market;
mod repositories;

pub use market::MarketDataClient;
pub use repositories::{CommentRepository, RepoResult, StockRepository, UserRepository};
