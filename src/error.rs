//! Error types for the CoinSpot client library.

use thiserror::Error;

/// The main error type for all CoinSpot client operations.
#[derive(Error, Debug)]
pub enum CoinspotError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// The response body was not valid JSON, or the request body could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// CoinSpot answered with `"status": "error"`
    #[error("CoinSpot API error: {0}")]
    Api(ApiError),

    /// A private endpoint was called on a client configured as read-only.
    ///
    /// This is raised locally; no request reaches the exchange.
    #[error("Client running in read-only mode")]
    ReadOnly,

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// A request parameter was rejected before sending
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The response parsed as JSON but did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for signed endpoints")]
    MissingCredentials,
}

impl CoinspotError {
    /// Whether this error came from the transport layer (network failure,
    /// timeout, or a body that was not JSON).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::HttpMiddleware(_) | Self::Json(_) | Self::Url(_) | Self::Timeout
        )
    }

    /// The exchange error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    pub(crate) fn from_middleware(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => Self::from_reqwest(e),
            other => Self::HttpMiddleware(other),
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

/// An error reported by CoinSpot in the response body.
///
/// CoinSpot signals failures with `{"status": "error", "message": "..."}`.
/// The message is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The `message` field of the response
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl ApiError {
    /// Create a new API error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extract an API error from a parsed response body.
    ///
    /// Returns `None` unless the body is an object whose `status` is `"error"`.
    pub fn from_body(body: &serde_json::Value) -> Option<Self> {
        if body.get("status").and_then(serde_json::Value::as_str) != Some("error") {
            return None;
        }
        let message = match body.get("message") {
            Some(serde_json::Value::String(m)) => m.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Some(Self::new(message))
    }

    /// Check if this is an invalid nonce error.
    pub fn is_invalid_nonce(&self) -> bool {
        self.message.to_lowercase().contains("nonce")
    }

    /// Check if this is an invalid signature or key error.
    pub fn is_invalid_signature(&self) -> bool {
        let message = self.message.to_lowercase();
        message.contains("invalid sign") || message.contains("invalid key")
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        let message = self.message.to_lowercase();
        message.contains("rate limit") || message.contains("too many requests")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_from_body() {
        let body = json!({"status": "error", "message": "bad nonce"});
        let error = ApiError::from_body(&body).unwrap();
        assert_eq!(error.message, "bad nonce");
        assert!(error.is_invalid_nonce());
        assert!(!error.is_rate_limit());
    }

    #[test]
    fn test_api_error_ignores_success_body() {
        assert!(ApiError::from_body(&json!({"status": "ok", "prices": {}})).is_none());
        assert!(ApiError::from_body(&json!([1, 2, 3])).is_none());
    }

    #[test]
    fn test_api_error_display() {
        let err = CoinspotError::Api(ApiError::new("Invalid signature"));
        assert_eq!(err.to_string(), "CoinSpot API error: Invalid signature");
        assert!(err.api_error().unwrap().is_invalid_signature());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_read_only_is_not_transport() {
        assert!(!CoinspotError::ReadOnly.is_transport());
        assert!(CoinspotError::Timeout.is_transport());
    }
}
