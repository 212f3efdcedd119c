//! Common types used across the CoinSpot client library.

pub mod balance;
pub mod date_range;
pub mod serde_helpers;

pub use balance::CoinBalance;
pub use date_range::DateRange;
