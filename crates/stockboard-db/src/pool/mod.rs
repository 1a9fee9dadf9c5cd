//! Database connection pool management

mod postgres;
mod schema;

pub use postgres::{create_lazy_pool, create_pool, PoolTimeouts};
pub use schema::{ensure_schema, ping};

pub use sqlx::postgres::PgPool;
