//! # stockboard-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AccountService, CommentService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
