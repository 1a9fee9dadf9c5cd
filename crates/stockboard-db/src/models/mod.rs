//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod stock;
mod user;

pub use comment::CommentModel;
pub use stock::StockModel;
pub use user::UserModel;
