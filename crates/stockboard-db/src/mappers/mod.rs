//! Entity to model mappers
//!
//! `From`/`TryFrom` conversions from database rows to domain entities.

mod comment;
mod stock;
mod user;
