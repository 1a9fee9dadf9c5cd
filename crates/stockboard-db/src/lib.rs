//! # stockboard-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! - Connection pool management and schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ```rust,ignore
//! use stockboard_db::{create_pool, ensure_schema, PgCommentRepository};
//!
//! let pool = create_pool(&config.database).await?;
//! ensure_schema(&pool).await?;
//! let comments = PgCommentRepository::new(pool);
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_lazy_pool, create_pool, ensure_schema, ping, PgPool, PoolTimeouts};
pub use repositories::{PgCommentRepository, PgStockRepository, PgUserRepository};
