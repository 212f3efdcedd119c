//! Read-only REST API endpoints.
//!
//! Per-coin balances and account history under `/api/ro/`. These work
//! with a read-only API key and on a client built with `read_only(true)`.

use std::time::Duration;

use futures_util::future::try_join_all;
use serde_json::{Map, Value};

use crate::error::CoinspotError;
use crate::rest::CoinspotRestClient;
use crate::rest::client::to_body;
use crate::rest::endpoints::Endpoint;
use crate::types::DateRange;

impl CoinspotRestClient {
    /// Get the balance, AUD value and rate for one coin.
    pub async fn coin_balance(&self, cointype: &str) -> Result<Value, CoinspotError> {
        self.request(Endpoint::CoinBalance, Some(cointype), Map::new())
            .await
    }

    /// List AUD deposits, optionally filtered by date.
    pub async fn deposit_history(&self, range: &DateRange) -> Result<Value, CoinspotError> {
        self.request(Endpoint::DepositHistory, None, to_body(range)?)
            .await
    }

    /// List AUD withdrawals, optionally filtered by date.
    pub async fn withdrawal_history(&self, range: &DateRange) -> Result<Value, CoinspotError> {
        self.request(Endpoint::WithdrawalHistory, None, to_body(range)?)
            .await
    }

    /// List buy and sell order history across all coins.
    pub async fn transaction_history(&self, range: &DateRange) -> Result<Value, CoinspotError> {
        self.request(Endpoint::TransactionHistory, None, to_body(range)?)
            .await
    }

    /// List buy and sell order history for one coin.
    pub async fn coin_transaction_history(
        &self,
        cointype: &str,
        range: &DateRange,
    ) -> Result<Value, CoinspotError> {
        self.request(
            Endpoint::CoinTransactionHistory,
            Some(cointype),
            to_body(range)?,
        )
        .await
    }

    /// Transaction history for several coins at once.
    ///
    /// One request is issued per coin; the i-th is dispatched `i` stagger
    /// intervals after the first (see
    /// [`fanout_stagger`](crate::rest::CoinspotRestClientBuilder::fanout_stagger)),
    /// then all are awaited together. Results are in input order, each
    /// tagged with its `coin`.
    ///
    /// Fails as a whole if any single request fails.
    pub async fn coins_transaction_history<S>(
        &self,
        coins: &[S],
        range: &DateRange,
    ) -> Result<Vec<Value>, CoinspotError>
    where
        S: AsRef<str> + Sync,
    {
        let stagger = self.fanout_stagger();
        tracing::debug!(
            coins = coins.len(),
            stagger_ms = u64::try_from(stagger.as_millis()).unwrap_or(u64::MAX),
            "fanning out coin transaction history"
        );

        let calls = coins.iter().enumerate().map(|(idx, coin)| async move {
            let delay = dispatch_delay(stagger, idx);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            self.coin_transaction_history(coin.as_ref(), range).await
        });
        try_join_all(calls).await
    }

    /// List open buy and sell orders across all coins.
    pub async fn open_transactions(&self) -> Result<Value, CoinspotError> {
        self.request(Endpoint::OpenTransactions, None, Map::new())
            .await
    }

    /// List open buy and sell orders for one coin.
    pub async fn coin_open_transactions(&self, cointype: &str) -> Result<Value, CoinspotError> {
        self.request(Endpoint::CoinOpenTransactions, Some(cointype), Map::new())
            .await
    }

    /// List coin send and receive history.
    pub async fn send_receive(&self) -> Result<Value, CoinspotError> {
        self.request(Endpoint::SendReceive, None, Map::new()).await
    }

    /// List completed affiliate payments.
    pub async fn affiliate_payments(&self) -> Result<Value, CoinspotError> {
        self.request(Endpoint::AffiliatePayments, None, Map::new())
            .await
    }

    /// List completed referral payments.
    pub async fn referral_payments(&self) -> Result<Value, CoinspotError> {
        self.request(Endpoint::ReferralPayments, None, Map::new())
            .await
    }
}

fn dispatch_delay(stagger: Duration, idx: usize) -> Duration {
    stagger.saturating_mul(u32::try_from(idx).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_delay_scales_with_index() {
        let stagger = Duration::from_millis(100);
        assert_eq!(dispatch_delay(stagger, 0), Duration::ZERO);
        assert_eq!(dispatch_delay(stagger, 3), Duration::from_millis(300));
        assert_eq!(dispatch_delay(Duration::ZERO, 7), Duration::ZERO);
    }
}
