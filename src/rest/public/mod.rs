//! Public REST API endpoints.
//!
//! These need no account permissions and are allowed on read-only clients.
//! CoinSpot still expects them signed, so credentials are required.

use serde_json::{Map, Value};

use crate::error::CoinspotError;
use crate::rest::CoinspotRestClient;
use crate::rest::endpoints::Endpoint;

impl CoinspotRestClient {
    /// Get the latest buy, sell and last prices for every coin.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinspot_api_client::rest::CoinspotRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinspotRestClient::new("key", "secret", true);
    ///     let latest = client.latest_prices().await?;
    ///     println!("BTC last: {}", latest["prices"]["btc"]["last"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn latest_prices(&self) -> Result<Value, CoinspotError> {
        self.request(Endpoint::LatestPrices, None, Map::new()).await
    }
}
