//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in stockboard-core.

mod comment;
mod error;
mod stock;
mod user;

pub use comment::PgCommentRepository;
pub use stock::PgStockRepository;
pub use user::PgUserRepository;
