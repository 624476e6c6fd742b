//! Network constants for the teller SDK.

/// Default price API base URL (CoinGecko simple-price endpoint family).
pub const DEFAULT_RATE_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Default asset identifier used when querying the price API.
pub const DEFAULT_ASSET_ID: &str = "ethereum";

/// Default fiat currency used when querying the price API.
pub const DEFAULT_FIAT_CURRENCY: &str = "usd";
