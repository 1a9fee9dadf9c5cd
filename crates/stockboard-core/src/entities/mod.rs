//! Domain entities - core business objects

mod comment;
mod stock;
mod user;

pub use comment::{Comment, CommentChanges, NewComment};
pub use stock::{NewStock, Stock};
pub use user::User;
