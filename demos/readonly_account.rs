//! Example: Read-only account endpoints.
//!
//! Run with: cargo run --example readonly_account

use std::sync::Arc;

use coinspot_api_client::auth::{EnvCredentials, IncreasingNonce};
use coinspot_api_client::rest::CoinspotRestClient;
use coinspot_api_client::types::DateRange;
use coinspot_api_client::CoinspotError;
use time::macros::date;

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
        .nonce_provider(Arc::new(IncreasingNonce::new()))
        .user_agent("coinspot-api-client-examples/readonly_account")
        .read_only(true)
        .build();

    println!("=== BTC balance ===");
    let btc = client.coin_balance("BTC").await?;
    println!("{}", btc["balance"]);

    println!("\n=== Deposits in 2024 ===");
    let range = DateRange::between(date!(2024 - 01 - 01), date!(2024 - 12 - 31));
    let deposits = client.deposit_history(&range).await?;
    println!("{}", deposits["deposits"]);

    println!("\n=== Transaction history per coin ===");
    let coins = ["BTC", "ETH", "LTC"];
    for history in client.coins_transaction_history(&coins, &range).await? {
        let buys = history["buyorders"].as_array().map_or(0, Vec::len);
        let sells = history["sellorders"].as_array().map_or(0, Vec::len);
        println!("{:>6}: {} buys, {} sells", history["coin"], buys, sells);
    }

    println!("\n=== Read-only guard ===");
    match client.my_orders().await {
        Err(CoinspotError::ReadOnly) => println!("my_orders rejected locally, as expected"),
        other => println!("Unexpected: {other:?}"),
    }
    match client.balances().await {
        Err(CoinspotError::ReadOnly) => println!("balances needs a full-access client"),
        other => println!("Unexpected: {other:?}"),
    }

    Ok(())
}
