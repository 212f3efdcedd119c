//! Request types for full-access endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

/// A request scoped to a single coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoinRequest {
    /// Coin symbol, e.g. `BTC`, `LTC`, `DOGE`.
    pub cointype: String,
}

impl CoinRequest {
    /// Create a new coin request.
    pub fn new(cointype: impl Into<String>) -> Self {
        Self {
            cointype: cointype.into(),
        }
    }
}

/// Request for a quick buy or sell quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteRequest {
    /// Coin symbol.
    pub cointype: String,
    /// Amount of coins to quote for.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl QuoteRequest {
    /// Create a new quote request.
    pub fn new(cointype: impl Into<String>, amount: Decimal) -> Self {
        Self {
            cointype: cointype.into(),
            amount,
        }
    }
}

/// Request to place a limit buy or sell order.
///
/// CoinSpot accepts at most 8 decimal places for `amount` and 6 for `rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    /// Coin symbol.
    pub cointype: String,
    /// Amount of coins to buy or sell.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Rate in AUD per coin.
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
}

impl OrderRequest {
    /// Maximum decimal places accepted for `amount`.
    pub const AMOUNT_SCALE: u32 = 8;
    /// Maximum decimal places accepted for `rate`.
    pub const RATE_SCALE: u32 = 6;

    /// Create a new order request.
    ///
    /// `amount` and `rate` are rounded to the precision CoinSpot accepts.
    pub fn new(cointype: impl Into<String>, amount: Decimal, rate: Decimal) -> Self {
        Self {
            cointype: cointype.into(),
            amount: amount.round_dp(Self::AMOUNT_SCALE),
            rate: rate.round_dp(Self::RATE_SCALE),
        }
    }
}

/// Request to cancel an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CancelOrderRequest {
    /// The order ID.
    pub id: String,
}

impl CancelOrderRequest {
    /// Create a new cancel request.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
