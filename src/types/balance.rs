//! Flattened per-coin balances.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoinspotError;

/// One coin's balance as returned by the balances endpoint.
///
/// CoinSpot reports balances as `[{"BTC": {"balance": .., "audbalance": .., "rate": ..}}]`.
/// Each single-key entry is flattened into a `CoinBalance` which serializes
/// back as `{"name": "BTC", "balance": .., "audbalance": .., "rate": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinBalance {
    /// Coin symbol, e.g. `BTC`.
    pub name: String,
    /// The remaining fields of the entry, as sent by the exchange.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl CoinBalance {
    /// Flatten the `balances` array of a balances response.
    pub fn from_response(response: &Value) -> Result<Vec<Self>, CoinspotError> {
        let entries = response
            .get("balances")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                CoinspotError::InvalidResponse("Response missing 'balances' array".to_string())
            })?;

        let mut balances = Vec::with_capacity(entries.len());
        for entry in entries {
            let entry = entry.as_object().ok_or_else(|| {
                CoinspotError::InvalidResponse(format!("Balance entry is not an object: {entry}"))
            })?;
            for (name, value) in entry {
                let mut fields = value.as_object().cloned().ok_or_else(|| {
                    CoinspotError::InvalidResponse(format!("Balance for {name} is not an object"))
                })?;
                fields.remove("name");
                balances.push(Self {
                    name: name.clone(),
                    fields,
                });
            }
        }
        Ok(balances)
    }

    /// Coin balance held.
    pub fn balance(&self) -> Option<Decimal> {
        self.decimal("balance")
    }

    /// Balance valued in AUD.
    pub fn aud_balance(&self) -> Option<Decimal> {
        self.decimal("audbalance")
    }

    /// AUD rate used for the valuation.
    pub fn rate(&self) -> Option<Decimal> {
        self.decimal("rate")
    }

    /// Read a numeric field (number or numeric string) as a `Decimal`.
    pub fn decimal(&self, field: &str) -> Option<Decimal> {
        let raw = match self.fields.get(field)? {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            _ => return None,
        };
        Decimal::from_str(&raw)
            .or_else(|_| Decimal::from_scientific(&raw))
            .ok()
    }
}
