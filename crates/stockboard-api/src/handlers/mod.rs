//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod account;
pub mod comments;
pub mod health;
