//! Business logic services
//!
//! Services borrow a [`ServiceContext`] per request and orchestrate the
//! collaborators it holds.

pub mod account;
pub mod comment;
pub mod context;
pub mod error;

#[cfg(test)]
pub(crate) mod testing;

pub use account::AccountService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
