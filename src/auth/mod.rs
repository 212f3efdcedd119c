//! Authentication module for the CoinSpot API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation for replay attack prevention
//! - HMAC-SHA512 signature generation for signed requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::{
    API_KEY_VAR, API_SECRET_VAR, Credentials, CredentialsProvider, EnvCredentials,
    READ_ONLY_API_KEY_VAR, READ_ONLY_API_SECRET_VAR, StaticCredentials,
};
pub use nonce::{IncreasingNonce, NonceProvider};
pub use signature::sign_request;
