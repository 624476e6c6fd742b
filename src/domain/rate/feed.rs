//! HTTP rate feed against a CoinGecko-style simple-price endpoint.

use std::time::Duration;

use reqwest::Client;

use crate::domain::rate::wire::PriceResponse;
use crate::domain::rate::{ExchangeRate, RateSource};
use crate::error::RateError;
use crate::network::{DEFAULT_ASSET_ID, DEFAULT_FIAT_CURRENCY, DEFAULT_RATE_API_URL};

/// Behavior knobs for the feed.
///
/// Retries default to zero: a missed rate only degrades the fiat display,
/// so the conservative default is a single bounded attempt.
#[derive(Debug, Clone)]
pub struct RateFeedConfig {
    pub base_url: String,
    pub asset_id: String,
    pub fiat_currency: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Extra attempts after the first failure.
    pub max_retries: u32,
    /// Delay before the first retry; doubles per attempt.
    pub retry_delay: Duration,
}

impl Default for RateFeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RATE_API_URL.to_string(),
            asset_id: DEFAULT_ASSET_ID.to_string(),
            fiat_currency: DEFAULT_FIAT_CURRENCY.to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 0,
            retry_delay: Duration::from_millis(250),
        }
    }
}

impl RateFeedConfig {
    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.retry_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// Rate feed backed by the public simple-price HTTP endpoint.
pub struct CoinGeckoFeed {
    config: RateFeedConfig,
    client: Client,
}

impl CoinGeckoFeed {
    pub fn new(config: RateFeedConfig) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(config.timeout);
        }

        Self {
            client: builder.build().expect("Failed to build HTTP client"),
            config,
        }
    }

    fn price_url(&self) -> String {
        format!(
            "{}/simple/price?ids={}&vs_currencies={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.config.asset_id),
            urlencoding::encode(&self.config.fiat_currency),
        )
    }

    async fn fetch_once(&self) -> Result<ExchangeRate, RateError> {
        let resp = self.client.get(self.price_url()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(RateError::Malformed {
                detail: format!("price endpoint returned status {}", status.as_u16()),
            });
        }

        let parsed: PriceResponse = resp.json().await.map_err(|e| RateError::Malformed {
            detail: e.to_string(),
        })?;
        let rate = parsed.rate_for(&self.config.asset_id, &self.config.fiat_currency)?;
        ExchangeRate::new(rate)
    }
}

#[async_trait::async_trait]
impl RateSource for CoinGeckoFeed {
    async fn fetch_rate(&self) -> Result<ExchangeRate, RateError> {
        let mut attempt = 0;
        loop {
            match self.fetch_once().await {
                Ok(rate) => return Ok(rate),
                Err(e) if attempt < self.config.max_retries => {
                    let delay = self.config.delay_for_attempt(attempt);
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = self.config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "rate fetch failed, retrying: {}",
                        e
                    );
                    futures_timer::Delay::new(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
