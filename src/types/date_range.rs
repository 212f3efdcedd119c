//! Date filters for the history endpoints.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use time::Date;

use crate::types::serde_helpers::optional_date;

/// An optional `startdate`/`enddate` window for history queries.
///
/// Either bound may be omitted; omitted bounds are not sent.
///
/// ```rust
/// use coinspot_api_client::types::DateRange;
/// use time::macros::date;
///
/// let range = DateRange::between(date!(2024 - 01 - 01), date!(2024 - 06 - 30));
/// assert_eq!(
///     serde_json::to_string(&range).unwrap(),
///     r#"{"startdate":"2024-01-01","enddate":"2024-06-30"}"#
/// );
/// assert_eq!(serde_json::to_string(&DateRange::all()).unwrap(), "{}");
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included (inclusive).
    #[serde(with = "optional_date", default)]
    pub startdate: Option<Date>,
    /// Last day included (inclusive).
    #[serde(with = "optional_date", default)]
    pub enddate: Option<Date>,
}

impl DateRange {
    /// No filter: the whole history.
    pub fn all() -> Self {
        Self::default()
    }

    /// Both bounds set.
    pub fn between(start: Date, end: Date) -> Self {
        Self {
            startdate: Some(start),
            enddate: Some(end),
        }
    }

    /// Everything from `start` onwards.
    pub fn since(start: Date) -> Self {
        Self {
            startdate: Some(start),
            enddate: None,
        }
    }

    /// Everything up to and including `end`.
    pub fn until(end: Date) -> Self {
        Self {
            startdate: None,
            enddate: Some(end),
        }
    }

    /// Returns `true` when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.startdate.is_none() && self.enddate.is_none()
    }
}
