//! Full-access REST API endpoints.
//!
//! These endpoints need a full-access API key. A client built with
//! `read_only(true)` rejects them locally with
//! [`CoinspotError::ReadOnly`](crate::error::CoinspotError::ReadOnly).

mod types;

pub use types::*;

use serde_json::{Map, Value};

use crate::error::CoinspotError;
use crate::rest::CoinspotRestClient;
use crate::rest::client::to_body;
use crate::rest::endpoints::Endpoint;
use crate::types::CoinBalance;

impl CoinspotRestClient {
    /// List balances for every coin held.
    ///
    /// Needs a full-access client even though the path is under `/api/ro/`.
    ///
    /// CoinSpot's `balances` array of single-key objects is flattened into
    /// one [`CoinBalance`] per coin, in response order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinspot_api_client::rest::CoinspotRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinspotRestClient::new("key", "secret", false);
    ///
    ///     for balance in client.balances().await? {
    ///         println!("{}: {:?} (AUD {:?})", balance.name, balance.balance(), balance.aud_balance());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn balances(&self) -> Result<Vec<CoinBalance>, CoinspotError> {
        let response = self.request(Endpoint::Balances, None, Map::new()).await?;
        CoinBalance::from_response(&response)
    }

    /// List open orders for a coin.
    ///
    /// The response is tagged with `coin`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinspot_api_client::rest::CoinspotRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinspotRestClient::new("key", "secret", false);
    ///
    ///     let orders = client.orders("BTC").await?;
    ///     println!("{} buy orders", orders["buyorders"].as_array().map_or(0, Vec::len));
    ///     Ok(())
    /// }
    /// ```
    pub async fn orders(&self, cointype: &str) -> Result<Value, CoinspotError> {
        self.coin_call(Endpoint::Orders, cointype).await
    }

    /// List completed orders for a coin.
    pub async fn order_history(&self, cointype: &str) -> Result<Value, CoinspotError> {
        self.coin_call(Endpoint::OrderHistory, cointype).await
    }

    /// Get the deposit address for a coin.
    pub async fn coin_deposit(&self, cointype: &str) -> Result<Value, CoinspotError> {
        self.coin_call(Endpoint::CoinDeposit, cointype).await
    }

    /// Quick buy quote: the rate per coin and the estimated wait in hours.
    pub async fn quote_buy(&self, request: &QuoteRequest) -> Result<Value, CoinspotError> {
        self.request(Endpoint::QuoteBuy, Some(&request.cointype), to_body(request)?)
            .await
    }

    /// Quick sell quote: the rate per coin and the estimated wait in hours.
    pub async fn quote_sell(&self, request: &QuoteRequest) -> Result<Value, CoinspotError> {
        self.request(Endpoint::QuoteSell, Some(&request.cointype), to_body(request)?)
            .await
    }

    /// List the account's open buy and sell orders.
    pub async fn my_orders(&self) -> Result<Value, CoinspotError> {
        self.request(Endpoint::MyOrders, None, Map::new()).await
    }

    /// Place a limit buy order.
    pub async fn buy(&self, request: &OrderRequest) -> Result<Value, CoinspotError> {
        self.request(Endpoint::Buy, Some(&request.cointype), to_body(request)?)
            .await
    }

    /// Place a limit sell order.
    pub async fn sell(&self, request: &OrderRequest) -> Result<Value, CoinspotError> {
        self.request(Endpoint::Sell, Some(&request.cointype), to_body(request)?)
            .await
    }

    /// Cancel a buy order by ID.
    pub async fn buy_cancel(&self, id: &str) -> Result<Value, CoinspotError> {
        self.request(
            Endpoint::BuyCancel,
            None,
            to_body(&CancelOrderRequest::new(id))?,
        )
        .await
    }

    /// Cancel a sell order by ID.
    pub async fn sell_cancel(&self, id: &str) -> Result<Value, CoinspotError> {
        self.request(
            Endpoint::SellCancel,
            None,
            to_body(&CancelOrderRequest::new(id))?,
        )
        .await
    }

    async fn coin_call(&self, endpoint: Endpoint, cointype: &str) -> Result<Value, CoinspotError> {
        self.request(endpoint, Some(cointype), to_body(&CoinRequest::new(cointype))?)
            .await
    }
}
