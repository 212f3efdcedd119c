//! CoinSpot REST API client.
//!
//! Provides access to every CoinSpot REST endpoint through a single
//! signing primitive.
//!
//! # Trait-based API
//!
//! The [`CoinspotClient`] trait abstracts all REST API operations, enabling:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., a caching or throttling wrapper)
//! - Alternative implementations
//!
//! ```rust,ignore
//! use coinspot_api_client::rest::{CoinspotClient, CoinspotRestClient};
//!
//! async fn use_client<C: CoinspotClient>(client: &C) -> Result<(), coinspot_api_client::CoinspotError> {
//!     let latest = client.latest_prices().await?;
//!     println!("Latest: {latest}");
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
pub mod private;
pub mod public;
pub mod readonly;
mod traits;

pub use client::{
    CoinspotRestClient, CoinspotRestClientBuilder, DEFAULT_FANOUT_STAGGER, DEFAULT_TIMEOUT,
};
pub use endpoints::{Access, COINSPOT_BASE_URL, Endpoint};
pub use traits::CoinspotClient;
