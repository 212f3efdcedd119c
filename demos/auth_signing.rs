//! Example: Credentials, nonces and request signing.
//!
//! Run with: cargo run --example auth_signing

use coinspot_api_client::auth::{
    Credentials, CredentialsProvider, EnvCredentials, IncreasingNonce, NonceProvider,
    StaticCredentials, sign_request,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Static credentials (typically used in tests or explicit config).
    let static_creds = StaticCredentials::new("api_key", "api_secret");
    println!("Static key: {}", static_creds.get_credentials().api_key);
    println!("Debug output is redacted: {:?}", static_creds.get_credentials());

    if let Some(env_creds) = EnvCredentials::try_from_env() {
        println!(
            "Loaded env credentials: {}",
            env_creds.get_credentials().api_key
        );
    } else {
        println!("Set COINSPOT_API_KEY and COINSPOT_API_SECRET to load env credentials.");
    }

    // Seeded from the clock in milliseconds, then +1 per request.
    let nonce = IncreasingNonce::new();
    let next_nonce = nonce.next_nonce();
    println!("Next nonce: {}", next_nonce);

    // The signature covers the exact JSON text sent as the body.
    let credentials = Credentials::new("api_key", "api_secret");
    let body = format!(r#"{{"cointype":"BTC","nonce":{next_nonce}}}"#);
    let signature = sign_request(&credentials, &body)?;
    println!("Body: {}", body);
    println!("sign: {}", signature);

    Ok(())
}
