//! Nonce generation for CoinSpot API authentication.
//!
//! CoinSpot rejects a signed request whose nonce is not greater than the
//! last one it accepted for the key.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for signed requests.
///
/// The nonce must be strictly increasing for each request.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    ///
    /// This value must be greater than any previously returned value.
    fn next_nonce(&self) -> u64;
}

/// A counter seeded from wall-clock time that increments by one per request.
///
/// The seed is milliseconds since the UNIX epoch at construction, so a new
/// client normally starts above whatever nonce an earlier process used.
pub struct IncreasingNonce {
    last_nonce: AtomicU64,
}

impl IncreasingNonce {
    /// Create a provider seeded from the current time in milliseconds.
    pub fn new() -> Self {
        Self::starting_at(Self::current_time_millis())
    }

    /// Create a provider whose first nonce will be `seed + 1`.
    pub fn starting_at(seed: u64) -> Self {
        Self {
            last_nonce: AtomicU64::new(seed),
        }
    }

    /// The most recently issued nonce (or the seed if none was issued yet).
    pub fn last(&self) -> u64 {
        self.last_nonce.load(Ordering::SeqCst)
    }

    fn current_time_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

impl Default for IncreasingNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for IncreasingNonce {
    fn next_nonce(&self) -> u64 {
        self.last_nonce.fetch_add(1, Ordering::SeqCst) + 1
    }
}
