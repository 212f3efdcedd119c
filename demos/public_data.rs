//! Example: Fetching the latest CoinSpot prices.
//!
//! CoinSpot signs every request, including the public price feed, so
//! credentials are still required.
//!
//! Run with: cargo run --example public_data

use std::sync::Arc;

use coinspot_api_client::auth::EnvCredentials;
use coinspot_api_client::rest::CoinspotRestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = match EnvCredentials::try_read_only_from_env().or_else(EnvCredentials::try_from_env) {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set COINSPOT_RO_API_KEY/COINSPOT_RO_API_SECRET (or the full-access pair) to run this example.");
            return Ok(());
        }
    };

    let client = CoinspotRestClient::builder()
        .credentials(credentials)
        .read_only(true)
        .build();

    println!("=== Latest Prices ===");
    let latest = client.latest_prices().await?;
    if let Some(prices) = latest["prices"].as_object() {
        for (coin, quote) in prices.iter().take(10) {
            println!(
                "{:>6}: bid {} ask {} last {}",
                coin.to_uppercase(),
                quote["bid"],
                quote["ask"],
                quote["last"]
            );
        }
    }

    Ok(())
}
