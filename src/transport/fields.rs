//! Lenient deserializers for fields the API serializes inconsistently.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

/// Numeric ids arrive either as JSON numbers or as quoted strings
/// (`"id": "31337"`). Accept both; anything else is a hard error.
pub(crate) fn opt_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Box<serde_json::value::RawValue>> = Deserialize::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let token = raw.get();

    match token.as_bytes().first().copied() {
        Some(b'"') => {
            let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
            parsed
                .trim()
                .parse::<i32>()
                .map(Some)
                .map_err(D::Error::custom)
        }
        Some(b'-' | b'0'..=b'9') => token.parse::<i32>().map(Some).map_err(D::Error::custom),
        _ => Err(D::Error::custom(
            "expected numeric id as JSON number or string",
        )),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "super::opt_int")]
        id: Option<i32>,
    }

    #[test]
    fn accepts_numbers_strings_and_absence() {
        let holder: Holder = serde_json::from_str(r#"{"id":31337}"#).unwrap();
        assert_eq!(holder.id, Some(31337));

        let holder: Holder = serde_json::from_str(r#"{"id":"31337"}"#).unwrap();
        assert_eq!(holder.id, Some(31337));

        let holder: Holder = serde_json::from_str(r#"{"id":null}"#).unwrap();
        assert_eq!(holder.id, None);

        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(holder.id, None);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        assert!(serde_json::from_str::<Holder>(r#"{"id":"abc"}"#).is_err());
    }

    #[test]
    fn rejects_other_token_kinds() {
        assert!(serde_json::from_str::<Holder>(r#"{"id":true}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"id":[1]}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"id":3.5}"#).is_err());
    }
}
