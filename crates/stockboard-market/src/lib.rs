//! # stockboard-market
//!
//! Market data integration. [`FmpClient`] looks up company profiles on
//! Financial Modeling Prep and implements `stockboard_core::MarketDataClient`.

pub mod fmp;

pub use fmp::{FmpClient, FmpProfile};
