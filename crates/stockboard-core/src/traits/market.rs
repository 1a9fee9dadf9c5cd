//! Market data port - lookup of company data from an external provider

use async_trait::async_trait;

use crate::entities::NewStock;
use crate::value_objects::Symbol;

use super::repositories::RepoResult;

#[async_trait]
pub trait MarketDataClient: Send + Sync {
    /// Look up a stock by symbol.
    ///
    /// `Ok(None)` means the provider has no such symbol. Transport and
    /// provider faults are returned as `DomainError::MarketDataError`.
    async fn find_by_symbol(&self, symbol: &Symbol) -> RepoResult<Option<NewStock>>;
}
