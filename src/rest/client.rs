//! CoinSpot REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::auth::{
    CredentialsProvider, IncreasingNonce, NonceProvider, StaticCredentials, sign_request,
};
use crate::error::{ApiError, CoinspotError};
use crate::rest::endpoints::{Access, COINSPOT_BASE_URL, Endpoint};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default delay between dispatches of a multi-coin fan-out.
pub const DEFAULT_FANOUT_STAGGER: Duration = Duration::from_millis(100);

/// The CoinSpot REST API client.
///
/// Every call is a single signed POST: the JSON body is stamped with the
/// next nonce, signed with HMAC-SHA512 and sent with `key`/`sign` headers.
/// There are no retries.
///
/// # Example
///
/// ```rust,no_run
/// use coinspot_api_client::rest::CoinspotRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinspotRestClient::new("api_key", "api_secret", false);
///
///     let prices = client.latest_prices().await?;
///     println!("Prices: {prices}");
///
///     for balance in client.balances().await? {
///         println!("{}: {:?}", balance.name, balance.balance());
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinspotRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
    read_only: bool,
    fanout_stagger: Duration,
}

impl CoinspotRestClient {
    /// Create a client from an API key and secret.
    ///
    /// With `read_only` set, endpoints that need a full-access key are
    /// rejected locally with [`CoinspotError::ReadOnly`].
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>, read_only: bool) -> Self {
        Self::builder()
            .credentials(Arc::new(StaticCredentials::new(api_key, api_secret)))
            .read_only(read_only)
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> CoinspotRestClientBuilder {
        CoinspotRestClientBuilder::new()
    }

    /// Whether the client rejects [`Access::Private`] endpoints.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub(crate) fn fanout_stagger(&self) -> Duration {
        self.fanout_stagger
    }

    /// Call a catalogued endpoint.
    ///
    /// `coin` fills the path of coin-scoped endpoints and, when given, is set
    /// as the `coin` field of the response.
    pub async fn request(
        &self,
        endpoint: Endpoint,
        coin: Option<&str>,
        body: Map<String, Value>,
    ) -> Result<Value, CoinspotError> {
        let path = endpoint.path(coin)?;
        self.signed_post(&path, endpoint.access(), body, coin).await
    }

    /// Sign and send a JSON body to `path`.
    ///
    /// This is the primitive every endpoint method goes through:
    /// 1. read-only guard for [`Access::Private`],
    /// 2. `nonce` injected into `body`,
    /// 3. `sign` = hex HMAC-SHA512 of the serialized body,
    /// 4. POST with `key`/`sign` headers,
    /// 5. `status: "error"` bodies turned into [`CoinspotError::Api`],
    /// 6. `coin_tag` set as the response's `coin` field.
    pub async fn signed_post(
        &self,
        path: &str,
        access: Access,
        mut body: Map<String, Value>,
        coin_tag: Option<&str>,
    ) -> Result<Value, CoinspotError> {
        self.guard_read_only(path, access)?;

        let credentials = self
            .credentials
            .as_ref()
            .ok_or(CoinspotError::MissingCredentials)?;
        let creds = credentials.get_credentials();

        let nonce = self.nonce_provider.next_nonce();
        body.insert("nonce".to_string(), Value::from(nonce));

        let payload = serde_json::to_string(&body)?;
        let signature = sign_request(creds, &payload)?;

        let url = Url::parse(&format!("{}{}", self.base_url, path))?;
        tracing::debug!(path, nonce, "sending signed request");

        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header("sign", signature)
            .header("key", &creds.api_key)
            .body(payload)
            .send()
            .await
            .map_err(CoinspotError::from_middleware)?;

        let mut parsed = self.parse_response(response).await?;
        if let (Some(coin), Value::Object(object)) = (coin_tag, &mut parsed) {
            object.insert("coin".to_string(), Value::String(coin.to_string()));
        }
        Ok(parsed)
    }

    fn guard_read_only(&self, path: &str, access: Access) -> Result<(), CoinspotError> {
        if self.read_only && !access.allowed_when_read_only() {
            tracing::debug!(path, "rejecting private endpoint on read-only client");
            return Err(CoinspotError::ReadOnly);
        }
        Ok(())
    }

    /// Parse a response from the CoinSpot API.
    async fn parse_response(&self, response: reqwest::Response) -> Result<Value, CoinspotError> {
        let status = response.status();
        let body = response.text().await.map_err(CoinspotError::from_reqwest)?;

        let parsed: Value = serde_json::from_str(&body)?;

        if let Some(api_error) = ApiError::from_body(&parsed) {
            tracing::warn!(error = %api_error, "CoinSpot returned an error");
            return Err(CoinspotError::Api(api_error));
        }

        if !status.is_success() {
            return Err(CoinspotError::InvalidResponse(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        Ok(parsed)
    }
}

/// Serialize a request struct into the JSON object sent as the body.
pub(crate) fn to_body<T: Serialize + ?Sized>(params: &T) -> Result<Map<String, Value>, CoinspotError> {
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(CoinspotError::InvalidParameters(format!(
            "Request body must be a JSON object, got {other}"
        ))),
    }
}

impl std::fmt::Debug for CoinspotRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinspotRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("read_only", &self.read_only)
            .finish()
    }
}

/// Builder for [`CoinspotRestClient`].
pub struct CoinspotRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    read_only: bool,
    user_agent: Option<String>,
    timeout: Duration,
    fanout_stagger: Duration,
}

impl CoinspotRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: COINSPOT_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            read_only: false,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
            fanout_stagger: DEFAULT_FANOUT_STAGGER,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the credentials provider for signed requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    ///
    /// Share one provider between clients that use the same API key.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Reject endpoints that need a full-access key.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the delay between dispatches in multi-coin calls.
    pub fn fanout_stagger(mut self, stagger: Duration) -> Self {
        self.fanout_stagger = stagger;
        self
    }

    /// Build the client.
    pub fn build(self) -> CoinspotRestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("coinspot-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("coinspot-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(IncreasingNonce::new()));

        CoinspotRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
            read_only: self.read_only,
            fanout_stagger: self.fanout_stagger,
        }
    }
}

impl Default for CoinspotRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
