use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// TextMagic account username.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Request header carrying the username (`X-TM-Username`).
    pub const HEADER: &'static str = "X-TM-Username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "username" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// TextMagic REST API key (`https://my.textmagic.com/online/api/rest-api/keys`).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct ApiKey(String);

impl ApiKey {
    /// Request header carrying the key (`X-TM-Key`).
    pub const HEADER: &'static str = "X-TM-Key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: "api key" });
        }
        Ok(Self(value))
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number as sent to TextMagic (`phone` / `phones` parameters).
///
/// Invariant: non-empty after trimming. [`Phone::new`] does not normalize;
/// use [`Phone::parse`] when you want E.164 normalization.
pub struct Phone(String);

impl Phone {
    /// Create a validated (non-empty) phone number without normalization.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "phone" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not carry an explicit
    /// country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: "phone" });
        }

        let parsed = phonenumber::parse(default_region, raw).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: raw.to_owned(),
            }
        })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self(e164))
    }

    /// The value as sent to TextMagic.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_trims_and_rejects_empty() {
        let username = Username::new("  alice ").unwrap();
        assert_eq!(username.as_str(), "alice");
        assert!(Username::new("   ").is_err());
    }

    #[test]
    fn api_key_preserves_whitespace_but_rejects_empty() {
        let key = ApiKey::new(" secret ").unwrap();
        assert_eq!(key.as_str(), " secret ");
        assert!(ApiKey::new("").is_err());
    }

    #[test]
    fn phone_trims_and_rejects_empty() {
        let phone = Phone::new(" 999123456 ").unwrap();
        assert_eq!(phone.as_str(), "999123456");
        assert!(Phone::new("  ").is_err());
    }

    #[test]
    fn phone_parse_normalizes_to_e164() {
        let p1 = Phone::parse(None, "+44 7911 123-456").unwrap();
        assert_eq!(p1.as_str(), "+447911123456");

        let p2 = Phone::parse(Some(phonenumber::country::Id::GB), "07911123456").unwrap();
        assert_eq!(p1, p2);

        assert!(Phone::parse(None, "not-a-number").is_err());
    }
}
