//! Company profile payload returned by `/api/v3/profile/{symbol}`

use serde::Deserialize;
use stockboard_core::entities::NewStock;
use stockboard_core::value_objects::Symbol;

/// One element of the profile response array. Unused fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FmpProfile {
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub last_div: Option<f64>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub mkt_cap: Option<f64>,
}

impl FmpProfile {
    /// Build a stock draft stored under the symbol that was requested
    pub fn into_new_stock(self, symbol: Symbol) -> NewStock {
        NewStock {
            company_name: self.company_name.unwrap_or_else(|| self.symbol.clone()),
            purchase: self.price.unwrap_or_default(),
            last_div: self.last_div.unwrap_or_default(),
            industry: self.industry.unwrap_or_default(),
            market_cap: self.mkt_cap.map_or(0, |cap| cap.round() as i64),
            symbol,
        }
    }
}
