//! Stock database model

use sqlx::FromRow;

/// Database model for stocks table
#[derive(Debug, Clone, FromRow)]
pub struct StockModel {
    pub id: i32,
    pub symbol: String,
    pub company_name: String,
    pub purchase: f64,
    pub last_div: f64,
    pub industry: String,
    pub market_cap: i64,
}
