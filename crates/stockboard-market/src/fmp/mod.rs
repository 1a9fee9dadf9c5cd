//! Financial Modeling Prep provider

mod client;
mod profile;

pub use client::FmpClient;
pub use profile::FmpProfile;
