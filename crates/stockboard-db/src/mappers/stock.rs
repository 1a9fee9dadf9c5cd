//! Stock entity <-> model mapper

use stockboard_core::entities::Stock;
use stockboard_core::error::DomainError;
use stockboard_core::value_objects::Symbol;

use crate::models::StockModel;

/// Rows with a symbol that no longer parses are reported as storage corruption
impl TryFrom<StockModel> for Stock {
    type Error = DomainError;

    fn try_from(model: StockModel) -> Result<Self, Self::Error> {
        let symbol = Symbol::parse(&model.symbol).map_err(|e| {
            DomainError::DatabaseError(format!(
                "stock {} has invalid symbol {:?}: {e}",
                model.id, model.symbol
            ))
        })?;

        Ok(Stock {
            id: model.id,
            symbol,
            company_name: model.company_name,
            purchase: model.purchase,
            last_div: model.last_div,
            industry: model.industry,
            market_cap: model.market_cap,
        })
    }
}
