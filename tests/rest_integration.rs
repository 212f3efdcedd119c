use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use time::macros::date;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coinspot_api_client::auth::{
    Credentials, IncreasingNonce, NonceProvider, StaticCredentials, sign_request,
};
use coinspot_api_client::error::CoinspotError;
use coinspot_api_client::rest::CoinspotRestClient;
use coinspot_api_client::rest::private::{OrderRequest, QuoteRequest};
use coinspot_api_client::types::DateRange;

const GOLDEN_SIGNATURE: &str = "2f65a81486992ce095b9ea5a3233424826363271c661ca457a9456b1a471f7ae9d6c140434ea61b9ead6e479c2d460d70e80366c199bcf50b8a974cb1b35264a";

struct FixedNonce(u64);

impl NonceProvider for FixedNonce {
    fn next_nonce(&self) -> u64 {
        self.0
    }
}

fn build_client(server: &MockServer) -> CoinspotRestClient {
    let credentials = Arc::new(StaticCredentials::new("test_key", "test_secret"));
    CoinspotRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .build()
}

fn build_client_with_nonce(server: &MockServer, nonce: Arc<dyn NonceProvider>) -> CoinspotRestClient {
    let credentials = Arc::new(StaticCredentials::new("test_key", "test_secret"));
    CoinspotRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .nonce_provider(nonce)
        .build()
}

fn ok_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"}))
}

fn received_nonce(request: &wiremock::Request) -> u64 {
    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    body["nonce"].as_u64().unwrap()
}

#[tokio::test]
async fn test_signed_request_matches_golden_vector() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "status": "ok",
        "buyorders": [{"amount": 1.5, "rate": 42000}],
        "sellorders": []
    });

    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(header("content-type", "application/json"))
        .and(header("key", "test_key"))
        .and(header("sign", GOLDEN_SIGNATURE))
        .and(body_string(r#"{"cointype":"BTC","nonce":123}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client_with_nonce(&server, Arc::new(IncreasingNonce::starting_at(122)));
    let orders = client.orders("BTC").await.unwrap();

    assert_eq!(orders["coin"], "BTC");
    assert_eq!(orders["buyorders"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_nonces_strictly_increase_and_signatures_verify() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/my/orders"))
        .respond_with(ok_response())
        .expect(5)
        .mount(&server)
        .await;

    let client = build_client(&server);
    for _ in 0..5 {
        assert_ok!(client.my_orders().await);
    }

    let requests = server.received_requests().await.unwrap();
    let nonces: Vec<u64> = requests.iter().map(received_nonce).collect();
    for window in nonces.windows(2) {
        assert!(window[1] > window[0], "nonces must increase: {nonces:?}");
    }

    let credentials = Credentials::new("test_key", "test_secret");
    for request in &requests {
        let body = std::str::from_utf8(&request.body).unwrap();
        let sign = request.headers.get("sign").unwrap().to_str().unwrap();
        assert_eq!(sign, sign_request(&credentials, body).unwrap());
    }
}

#[tokio::test]
async fn test_concurrent_calls_get_unique_nonces() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ro/my/sendreceive"))
        .respond_with(ok_response())
        .mount(&server)
        .await;

    let client = build_client(&server);
    let calls = (0..8).map(|_| client.send_receive());
    let results = futures_util::future::join_all(calls).await;
    assert!(results.iter().all(Result::is_ok));

    let requests = server.received_requests().await.unwrap();
    let mut nonces: Vec<u64> = requests.iter().map(received_nonce).collect();
    nonces.sort_unstable();
    nonces.dedup();
    assert_eq!(nonces.len(), 8);
}

#[tokio::test]
async fn test_exchange_error_surfaces_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/my/buy/cancel"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "error", "message": "bad nonce"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = assert_err!(client.buy_cancel("order-1").await);

    match err {
        CoinspotError::Api(api) => {
            assert_eq!(api.message, "bad nonce");
            assert!(api.is_invalid_nonce());
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_exchange_error_with_http_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/my/sell/cancel"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"status": "error", "message": "Invalid id"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = assert_err!(client.sell_cancel("nope").await);
    assert_eq!(err.api_error().unwrap().message, "Invalid id");
}

#[tokio::test]
async fn test_non_json_body_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pubapi/latest"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = assert_err!(client.latest_prices().await);
    assert!(matches!(err, CoinspotError::Json(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_http_failure_without_error_status_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/my/orders"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = assert_err!(client.my_orders().await);
    assert!(matches!(err, CoinspotError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 1.
    let client = CoinspotRestClient::builder()
        .base_url("http://127.0.0.1:1")
        .credentials(Arc::new(StaticCredentials::new("test_key", "test_secret")))
        .build();

    let err = assert_err!(client.my_orders().await);
    assert!(err.is_transport(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_request_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/my/orders"))
        .respond_with(ok_response().set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let client = CoinspotRestClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new("test_key", "test_secret")))
        .timeout(Duration::from_millis(50))
        .build();

    let err = assert_err!(client.my_orders().await);
    assert!(matches!(err, CoinspotError::Timeout), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_missing_credentials() {
    let server = MockServer::start().await;
    let client = CoinspotRestClient::builder().base_url(server.uri()).build();

    let err = assert_err!(client.latest_prices().await);
    assert!(matches!(err, CoinspotError::MissingCredentials));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_quote_buy_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/quote/buy"))
        .and(body_json(serde_json::json!({
            "cointype": "LTC",
            "amount": 0.5,
            "nonce": 777
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "ok", "quote": 95.5, "timeframe": 0})),
        )
        .mount(&server)
        .await;

    let client = build_client_with_nonce(&server, Arc::new(FixedNonce(777)));
    let quote = client
        .quote_buy(&QuoteRequest::new("LTC", Decimal::new(5, 1)))
        .await
        .unwrap();

    assert_eq!(quote["coin"], "LTC");
    assert_eq!(quote["timeframe"], 0);
}

#[tokio::test]
async fn test_quote_sell_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/quote/sell"))
        .respond_with(ok_response())
        .mount(&server)
        .await;

    let client = build_client(&server);
    let quote = assert_ok!(client.quote_sell(&QuoteRequest::new("DOGE", Decimal::from(100))).await);
    assert_eq!(quote["coin"], "DOGE");
}

#[tokio::test]
async fn test_place_buy_and_sell_orders() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/my/buy"))
        .and(body_json(serde_json::json!({
            "cointype": "BTC",
            "amount": 0.01,
            "rate": 45000.5,
            "nonce": 9
        })))
        .respond_with(ok_response())
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/my/sell"))
        .respond_with(ok_response())
        .mount(&server)
        .await;

    let client = build_client_with_nonce(&server, Arc::new(FixedNonce(9)));
    let order = OrderRequest::new(
        "BTC",
        Decimal::from_str("0.01").unwrap(),
        Decimal::from_str("45000.5").unwrap(),
    );
    let placed = client.buy(&order).await.unwrap();
    assert_eq!(placed["coin"], "BTC");

    let sold = client.sell(&order).await.unwrap();
    assert_eq!(sold["coin"], "BTC");
}

#[tokio::test]
async fn test_order_history_and_deposit_address() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/orders/history"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "ok", "orders": []})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/my/coin/deposit"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "ok", "address": "Dxyz"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);

    let history = client.order_history("ETH").await.unwrap();
    assert_eq!(history["coin"], "ETH");

    let deposit = client.coin_deposit("DOGE").await.unwrap();
    assert_eq!(deposit["address"], "Dxyz");
    assert_eq!(deposit["coin"], "DOGE");
}

#[tokio::test]
async fn test_history_without_coin_is_not_tagged() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ro/my/deposits"))
        .and(body_json(serde_json::json!({
            "startdate": "2024-01-01",
            "enddate": "2024-03-31",
            "nonce": 5
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "ok", "deposits": []})),
        )
        .mount(&server)
        .await;

    let client = build_client_with_nonce(&server, Arc::new(FixedNonce(5)));
    let range = DateRange::between(date!(2024 - 01 - 01), date!(2024 - 03 - 31));
    let deposits = client.deposit_history(&range).await.unwrap();

    assert!(deposits.get("coin").is_none());
    assert!(deposits["deposits"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unbounded_history_sends_only_nonce() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ro/my/withdrawals"))
        .and(body_string(r#"{"nonce":11}"#))
        .respond_with(ok_response())
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/ro/my/transactions"))
        .and(body_string(r#"{"nonce":11}"#))
        .respond_with(ok_response())
        .mount(&server)
        .await;

    let client = build_client_with_nonce(&server, Arc::new(FixedNonce(11)));
    assert_ok!(client.withdrawal_history(&DateRange::all()).await);
    assert_ok!(client.transaction_history(&DateRange::all()).await);
}

#[tokio::test]
async fn test_invalid_coin_symbol_is_rejected_locally() {
    let server = MockServer::start().await;
    let client = build_client(&server);

    let err = assert_err!(client.coin_balance("BTC/../../buy").await);
    assert!(matches!(err, CoinspotError::InvalidParameters(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
