//! Date/time wire conversions.
//!
//! Resource bodies carry instants as `%Y-%m-%dT%H:%M:%S%z` strings (offset
//! without a colon, e.g. `2007-12-27T13:04:20+0000`), which the stock RFC
//! 3339 deserializer rejects. Query parameters exchange Unix epoch seconds;
//! those are converted from [`chrono::DateTime<chrono::Local>`] so the local
//! offset at conversion time is applied.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

pub(crate) fn opt_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => DateTime::parse_from_str(&raw, WIRE_FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
