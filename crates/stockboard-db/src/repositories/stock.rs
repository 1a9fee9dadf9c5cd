//! PostgreSQL implementation of StockRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stockboard_core::entities::{NewStock, Stock};
use stockboard_core::traits::{RepoResult, StockRepository};
use stockboard_core::value_objects::Symbol;

use crate::models::StockModel;

use super::error::map_db_error;

/// PostgreSQL implementation of StockRepository
#[derive(Clone)]
pub struct PgStockRepository {
    pool: PgPool,
}

impl PgStockRepository {
    /// Create a new PgStockRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StockRepository for PgStockRepository {
    #[instrument(skip(self), fields(symbol = %symbol))]
    async fn find_by_symbol(&self, symbol: &Symbol) -> RepoResult<Option<Stock>> {
        let row = sqlx::query_as::<_, StockModel>(
            r"
            SELECT id, symbol, company_name, purchase, last_div, industry, market_cap
            FROM stocks
            WHERE symbol = $1
            ",
        )
        .bind(symbol.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Stock::try_from).transpose()
    }

    /// Insert a stock, or return the stored row when the symbol already exists
    #[instrument(skip(self, stock), fields(symbol = %stock.symbol))]
    async fn create(&self, stock: &NewStock) -> RepoResult<Stock> {
        let row = sqlx::query_as::<_, StockModel>(
            r"
            INSERT INTO stocks (symbol, company_name, purchase, last_div, industry, market_cap)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (symbol) DO UPDATE SET symbol = EXCLUDED.symbol
            RETURNING id, symbol, company_name, purchase, last_div, industry, market_cap
            ",
        )
        .bind(stock.symbol.as_str())
        .bind(&stock.company_name)
        .bind(stock.purchase)
        .bind(stock.last_div)
        .bind(&stock.industry)
        .bind(stock.market_cap)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Stock::try_from(row)
    }
}
