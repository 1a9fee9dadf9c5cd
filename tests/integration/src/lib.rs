//! Integration test utilities for the stockboard API
//!
//! Runs the real router over HTTP with in-memory collaborators in place of
//! PostgreSQL and the market data provider.

pub mod helpers;
pub mod memory;

pub use fixtures::*;
pub use helpers::*;
pub use memory::*;
