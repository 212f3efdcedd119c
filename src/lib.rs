//! # CoinSpot Client
//!
//! An async Rust client library for the CoinSpot exchange REST API.
//!
//! ## Features
//!
//! - Every CoinSpot endpoint: prices, orders, quotes, balances and history
//! - HMAC-SHA512 request signing with strictly increasing nonces
//! - Read-only mode that refuses full-access endpoints locally
//! - Staggered multi-coin history fan-out
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coinspot_api_client::rest::CoinspotRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinspotRestClient::new("api_key", "api_secret", true);
//!     let latest = client.latest_prices().await?;
//!     println!("Latest prices: {}", latest);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, CoinspotError};
pub use rest::{CoinspotClient, CoinspotRestClient};
pub use types::{CoinBalance, DateRange};

/// Result type alias using CoinspotError
pub type Result<T> = std::result::Result<T, CoinspotError>;
