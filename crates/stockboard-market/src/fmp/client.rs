//! Financial Modeling Prep HTTP client

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{Client, StatusCode};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use stockboard_common::MarketDataConfig;
use stockboard_core::entities::NewStock;
use stockboard_core::error::DomainError;
use stockboard_core::traits::{MarketDataClient, RepoResult};
use stockboard_core::value_objects::Symbol;

use super::profile::FmpProfile;

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Company profile lookups against FMP, throttled client-side
#[derive(Clone)]
pub struct FmpClient {
    client: Client,
    base_url: String,
    api_key: String,
    rate_limiter: SharedRateLimiter,
}

impl FmpClient {
    /// Build a client from configuration
    ///
    /// A `requests_per_minute` of zero is treated as one.
    pub fn new(config: &MarketDataConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let per_minute = NonZeroU32::new(config.requests_per_minute).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_minute(per_minute)));

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            rate_limiter,
        })
    }

    fn profile_url(&self, symbol: &Symbol) -> String {
        format!("{}/api/v3/profile/{}", self.base_url, symbol)
    }

    /// Fetch the profile list for a symbol. `None` when FMP answers 404.
    async fn fetch_profiles(&self, symbol: &Symbol) -> RepoResult<Option<Vec<FmpProfile>>> {
        self.rate_limiter.until_ready().await;

        let response = self
            .client
            .get(self.profile_url(symbol))
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| upstream_error("request failed", e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            warn!(%status, "Market data provider returned an error status");
            return Err(DomainError::MarketDataError(format!("HTTP error: {status}")));
        }

        let profiles = response
            .json::<Vec<FmpProfile>>()
            .await
            .map_err(|e| upstream_error("invalid response body", e))?;

        Ok(Some(profiles))
    }
}

fn upstream_error(context: &str, err: reqwest::Error) -> DomainError {
    // The request URL carries the API key in its query string
    let detail = if err.is_timeout() {
        "timed out".to_string()
    } else {
        err.without_url().to_string()
    };
    warn!(error = %detail, "{context}");
    DomainError::MarketDataError(format!("{context}: {detail}"))
}

#[async_trait]
impl MarketDataClient for FmpClient {
    #[instrument(skip(self), fields(symbol = %symbol))]
    async fn find_by_symbol(&self, symbol: &Symbol) -> RepoResult<Option<NewStock>> {
        let Some(profiles) = self.fetch_profiles(symbol).await? else {
            debug!("Symbol unknown to market data provider");
            return Ok(None);
        };

        let stock = profiles
            .into_iter()
            .next()
            .map(|profile| profile.into_new_stock(symbol.clone()));

        if stock.is_none() {
            debug!("Market data provider returned no profiles");
        }
        Ok(stock)
    }
}

impl std::fmt::Debug for FmpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FmpClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
