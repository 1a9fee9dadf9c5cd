//! Stock entity - a traded company known to the application

use crate::value_objects::Symbol;

/// Persisted stock
#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    pub id: i32,
    pub symbol: Symbol,
    pub company_name: String,
    pub purchase: f64,
    pub last_div: f64,
    pub industry: String,
    pub market_cap: i64,
}

/// A stock that has not been stored yet, usually imported from market data
#[derive(Debug, Clone, PartialEq)]
pub struct NewStock {
    pub symbol: Symbol,
    pub company_name: String,
    pub purchase: f64,
    pub last_div: f64,
    pub industry: String,
    pub market_cap: i64,
}

impl NewStock {
    /// Create a stock with only a symbol and company name
    pub fn new(symbol: Symbol, company_name: impl Into<String>) -> Self {
        Self {
            symbol,
            company_name: company_name.into(),
            purchase: 0.0,
            last_div: 0.0,
            industry: String::new(),
            market_cap: 0,
        }
    }

    /// Attach a store-assigned id
    pub fn into_stock(self, id: i32) -> Stock {
        Stock {
            id,
            symbol: self.symbol,
            company_name: self.company_name,
            purchase: self.purchase,
            last_div: self.last_div,
            industry: self.industry,
            market_cap: self.market_cap,
        }
    }
}
