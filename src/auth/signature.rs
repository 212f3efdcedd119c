//! HMAC-SHA512 signature generation for CoinSpot API authentication.
//!
//! Every signed request carries a signature computed as:
//! ```text
//! hex(HMAC-SHA512(api_secret, json_body))
//! ```
//!
//! where `json_body` is the exact text sent as the POST body (nonce
//! included). The signature goes in the `sign` header.

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::auth::Credentials;
use crate::error::CoinspotError;

type HmacSha512 = Hmac<Sha512>;

/// Sign a serialized request body for CoinSpot's API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `body` - The serialized JSON body, exactly as it will be sent
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA512 signature (128 characters).
///
/// # Example
///
/// ```rust
/// use coinspot_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_request(&credentials, r#"{"nonce":1234567890}"#)?;
/// assert_eq!(signature.len(), 128);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(credentials: &Credentials, body: &str) -> Result<String, CoinspotError> {
    let mut hmac = HmacSha512::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| CoinspotError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(body.as_bytes());
    Ok(hex::encode(hmac.finalize().into_bytes()))
}
