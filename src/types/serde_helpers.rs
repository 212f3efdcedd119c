//! Custom serde helpers for CoinSpot's request formats.

use serde::{Deserialize, Deserializer, Serializer, de};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// The `YYYY-MM-DD` format CoinSpot expects for history filters.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Serialize/deserialize an optional [`Date`] as a `YYYY-MM-DD` string.
///
/// Pair with `skip_serializing_if = "Option::is_none"` so that an absent
/// bound is left out of the request body entirely.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use time::macros::date;
/// use coinspot_api_client::types::serde_helpers::optional_date;
///
/// #[derive(Serialize, Deserialize, Debug, PartialEq)]
/// struct Filter {
///     #[serde(with = "optional_date", default, skip_serializing_if = "Option::is_none")]
///     startdate: Option<time::Date>,
/// }
///
/// let filter = Filter { startdate: Some(date!(2024 - 01 - 31)) };
/// let json = serde_json::to_string(&filter).unwrap();
/// assert_eq!(json, r#"{"startdate":"2024-01-31"}"#);
/// assert_eq!(serde_json::from_str::<Filter>(&json).unwrap(), filter);
/// ```
pub mod optional_date {
    use super::*;

    /// Serialize an optional date as `YYYY-MM-DD`, or `null`.
    pub fn serialize<S>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => {
                let s = date.format(DATE_FORMAT).map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&s)
            }
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional `YYYY-MM-DD` date; empty strings become `None`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Option::deserialize(deserializer)?;
        match s.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => Date::parse(s, DATE_FORMAT).map(Some).map_err(de::Error::custom),
        }
    }
}
