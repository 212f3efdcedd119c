//! Trait definition for the CoinSpot REST API client.
//!
//! [`CoinspotClient`] abstracts every endpoint method, so code can be
//! written against the trait and tested with a mock implementation, or
//! wrapped by a decorator.
//!
//! # Example
//!
//! ```rust,ignore
//! use coinspot_api_client::rest::{CoinspotClient, CoinspotRestClient};
//!
//! async fn total_aud<C: CoinspotClient>(client: &C) -> Result<rust_decimal::Decimal, coinspot_api_client::CoinspotError> {
//!     let balances = client.balances().await?;
//!     Ok(balances.iter().filter_map(|b| b.aud_balance()).sum())
//! }
//! ```

use std::future::Future;

use serde_json::Value;

use crate::error::CoinspotError;
use crate::rest::CoinspotRestClient;
use crate::rest::private::{OrderRequest, QuoteRequest};
use crate::types::{CoinBalance, DateRange};

/// Trait defining all CoinSpot REST API operations.
///
/// All methods are async and return `Result<T, CoinspotError>`.
pub trait CoinspotClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Latest prices for every coin.
    fn latest_prices(&self) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    // ========== Full-Access Endpoints ==========

    /// Open orders for a coin.
    fn orders(&self, cointype: &str) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// Completed orders for a coin.
    fn order_history(
        &self,
        cointype: &str,
    ) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// Deposit address for a coin.
    fn coin_deposit(
        &self,
        cointype: &str,
    ) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// Quick buy quote.
    fn quote_buy(
        &self,
        request: &QuoteRequest,
    ) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// Quick sell quote.
    fn quote_sell(
        &self,
        request: &QuoteRequest,
    ) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// The account's open orders.
    fn my_orders(&self) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// Place a buy order.
    fn buy(
        &self,
        request: &OrderRequest,
    ) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// Place a sell order.
    fn sell(
        &self,
        request: &OrderRequest,
    ) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// Cancel a buy order.
    fn buy_cancel(&self, id: &str) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// Cancel a sell order.
    fn sell_cancel(&self, id: &str) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    // ========== Read-Only Endpoints ==========

    /// Flattened balances for every coin. Needs a full-access client.
    fn balances(&self) -> impl Future<Output = Result<Vec<CoinBalance>, CoinspotError>> + Send;

    /// Balance for one coin.
    fn coin_balance(
        &self,
        cointype: &str,
    ) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// AUD deposit history.
    fn deposit_history(
        &self,
        range: &DateRange,
    ) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// AUD withdrawal history.
    fn withdrawal_history(
        &self,
        range: &DateRange,
    ) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// Order history across all coins.
    fn transaction_history(
        &self,
        range: &DateRange,
    ) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// Order history for one coin.
    fn coin_transaction_history(
        &self,
        cointype: &str,
        range: &DateRange,
    ) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// Order history for several coins, in input order.
    fn coins_transaction_history<S: AsRef<str> + Sync>(
        &self,
        coins: &[S],
        range: &DateRange,
    ) -> impl Future<Output = Result<Vec<Value>, CoinspotError>> + Send;

    /// Open orders across all coins.
    fn open_transactions(&self) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// Open orders for one coin.
    fn coin_open_transactions(
        &self,
        cointype: &str,
    ) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// Coin send and receive history.
    fn send_receive(&self) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// Affiliate payments.
    fn affiliate_payments(&self) -> impl Future<Output = Result<Value, CoinspotError>> + Send;

    /// Referral payments.
    fn referral_payments(&self) -> impl Future<Output = Result<Value, CoinspotError>> + Send;
}

impl CoinspotClient for CoinspotRestClient {
    async fn latest_prices(&self) -> Result<Value, CoinspotError> {
        CoinspotRestClient::latest_prices(self).await
    }

    async fn orders(&self, cointype: &str) -> Result<Value, CoinspotError> {
        CoinspotRestClient::orders(self, cointype).await
    }

    async fn order_history(&self, cointype: &str) -> Result<Value, CoinspotError> {
        CoinspotRestClient::order_history(self, cointype).await
    }

    async fn coin_deposit(&self, cointype: &str) -> Result<Value, CoinspotError> {
        CoinspotRestClient::coin_deposit(self, cointype).await
    }

    async fn quote_buy(&self, request: &QuoteRequest) -> Result<Value, CoinspotError> {
        CoinspotRestClient::quote_buy(self, request).await
    }

    async fn quote_sell(&self, request: &QuoteRequest) -> Result<Value, CoinspotError> {
        CoinspotRestClient::quote_sell(self, request).await
    }

    async fn my_orders(&self) -> Result<Value, CoinspotError> {
        CoinspotRestClient::my_orders(self).await
    }

    async fn buy(&self, request: &OrderRequest) -> Result<Value, CoinspotError> {
        CoinspotRestClient::buy(self, request).await
    }

    async fn sell(&self, request: &OrderRequest) -> Result<Value, CoinspotError> {
        CoinspotRestClient::sell(self, request).await
    }

    async fn buy_cancel(&self, id: &str) -> Result<Value, CoinspotError> {
        CoinspotRestClient::buy_cancel(self, id).await
    }

    async fn sell_cancel(&self, id: &str) -> Result<Value, CoinspotError> {
        CoinspotRestClient::sell_cancel(self, id).await
    }

    async fn balances(&self) -> Result<Vec<CoinBalance>, CoinspotError> {
        CoinspotRestClient::balances(self).await
    }

    async fn coin_balance(&self, cointype: &str) -> Result<Value, CoinspotError> {
        CoinspotRestClient::coin_balance(self, cointype).await
    }

    async fn deposit_history(&self, range: &DateRange) -> Result<Value, CoinspotError> {
        CoinspotRestClient::deposit_history(self, range).await
    }

    async fn withdrawal_history(&self, range: &DateRange) -> Result<Value, CoinspotError> {
        CoinspotRestClient::withdrawal_history(self, range).await
    }

    async fn transaction_history(&self, range: &DateRange) -> Result<Value, CoinspotError> {
        CoinspotRestClient::transaction_history(self, range).await
    }

    async fn coin_transaction_history(
        &self,
        cointype: &str,
        range: &DateRange,
    ) -> Result<Value, CoinspotError> {
        CoinspotRestClient::coin_transaction_history(self, cointype, range).await
    }

    async fn coins_transaction_history<S: AsRef<str> + Sync>(
        &self,
        coins: &[S],
        range: &DateRange,
    ) -> Result<Vec<Value>, CoinspotError> {
        CoinspotRestClient::coins_transaction_history(self, coins, range).await
    }

    async fn open_transactions(&self) -> Result<Value, CoinspotError> {
        CoinspotRestClient::open_transactions(self).await
    }

    async fn coin_open_transactions(&self, cointype: &str) -> Result<Value, CoinspotError> {
        CoinspotRestClient::coin_open_transactions(self, cointype).await
    }

    async fn send_receive(&self) -> Result<Value, CoinspotError> {
        CoinspotRestClient::send_receive(self).await
    }

    async fn affiliate_payments(&self) -> Result<Value, CoinspotError> {
        CoinspotRestClient::affiliate_payments(self).await
    }

    async fn referral_payments(&self) -> Result<Value, CoinspotError> {
        CoinspotRestClient::referral_payments(self).await
    }
}
