use std::sync::Arc;

use coinspot_api_client::auth::EnvCredentials;
use coinspot_api_client::rest::CoinspotRestClient;
use coinspot_api_client::types::DateRange;

fn live_tests_enabled() -> bool {
    std::env::var("COINSPOT_LIVE_TESTS").ok().as_deref() == Some("1")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[tokio::test]
#[ignore]
async fn live_read_only_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }
    init_tracing();

    let credentials = match EnvCredentials::try_read_only_from_env().or_else(EnvCredentials::try_from_env) {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = CoinspotRestClient::builder()
        .credentials(Arc::new(credentials))
        .read_only(true)
        .build();

    let latest = client.latest_prices().await?;
    assert_eq!(latest["status"], "ok");

    let _balance = client.coin_balance("BTC").await?;
    assert!(matches!(
        client.balances().await,
        Err(coinspot_api_client::CoinspotError::ReadOnly)
    ));
    let history = client
        .coins_transaction_history(&["BTC", "ETH"], &DateRange::all())
        .await?;
    assert_eq!(history.len(), 2);

    Ok(())
}
