//! Credential management for CoinSpot API authentication.
//!
//! CoinSpot issues two kinds of keys: full-access keys and read-only keys
//! (which only work against `/api/ro/` and the public feed). Both are a
//! key/secret pair and are handled the same way here.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use crate::error::CoinspotError;

/// Environment variable holding a full-access API key.
pub const API_KEY_VAR: &str = "COINSPOT_API_KEY";
/// Environment variable holding a full-access API secret.
pub const API_SECRET_VAR: &str = "COINSPOT_API_SECRET";
/// Environment variable holding a read-only API key.
pub const READ_ONLY_API_KEY_VAR: &str = "COINSPOT_RO_API_KEY";
/// Environment variable holding a read-only API secret.
pub const READ_ONLY_API_SECRET_VAR: &str = "COINSPOT_RO_API_SECRET";

/// An API key and its secret.
///
/// Neither is printed by `Debug`: the key is shortened to a prefix and
/// the secret is redacted.
#[derive(Clone)]
pub struct Credentials {
    /// The API key, sent in the `key` header
    pub api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// The secret, used as the raw HMAC key.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    fn key_hint(&self) -> String {
        let prefix: String = self.api_key.chars().take(4).collect();
        format!("{prefix}…")
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.key_hint())
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this to pull credentials from a secrets manager or similar.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Credentials held directly in memory.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret),
        }
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl<P: CredentialsProvider + ?Sized> CredentialsProvider for Arc<P> {
    fn get_credentials(&self) -> &Credentials {
        (**self).get_credentials()
    }
}

/// Credentials read from environment variables once, at construction.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Read a full-access key from `COINSPOT_API_KEY` / `COINSPOT_API_SECRET`.
    pub fn from_env() -> Result<Self, CoinspotError> {
        Self::from_env_vars(API_KEY_VAR, API_SECRET_VAR)
    }

    /// Read a read-only key from `COINSPOT_RO_API_KEY` / `COINSPOT_RO_API_SECRET`.
    pub fn read_only_from_env() -> Result<Self, CoinspotError> {
        Self::from_env_vars(READ_ONLY_API_KEY_VAR, READ_ONLY_API_SECRET_VAR)
    }

    /// Read credentials from custom environment variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, CoinspotError> {
        let read = |var: &str| {
            std::env::var(var)
                .map_err(|_| CoinspotError::Auth(format!("Environment variable {var} not set")))
        };

        Ok(Self {
            credentials: Credentials::new(read(key_var)?, read(secret_var)?),
        })
    }

    /// Like [`from_env`](Self::from_env), returning `None` if either variable is unset.
    pub fn try_from_env() -> Option<Self> {
        Self::from_env().ok()
    }

    /// Like [`read_only_from_env`](Self::read_only_from_env), returning `None` if either variable is unset.
    pub fn try_read_only_from_env() -> Option<Self> {
        Self::read_only_from_env().ok()
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
