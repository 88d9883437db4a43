//! Domain layer: strong types with validation and invariants (no I/O).

mod codes;
mod common;
mod contact;
mod message;
mod number;
mod stats;
mod template;
mod user;
mod validation;
mod value;

pub use codes::{
    AccountStatus, BulkSessionStatus, DecodeError, DeliveryStatus, MessageDirection, NumberStatus,
    SenderIdStatus, SendingSource, SubaccountType,
};
pub use common::{ApiResult, DeleteResult, LinkResult, Page, PingResult};
pub use contact::{Contact, ContactList, Country, CustomField, UnsubscribedContact};
pub use message::{
    BulkSession, Chat, ChatMessage, CountryPricing, Message, MessagePrice, Reply, Schedule,
    SendMessageOptions, Session,
};
pub use number::{AvailableNumbers, DedicatedNumber, SenderId, Sources};
pub use stats::{MessagingStats, SpendingStats, StatsGroupBy};
pub use template::Template;
pub use user::{Currency, Invoice, Timezone, User};
pub use validation::ValidationError;
pub use value::{ApiKey, Phone, Username};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rejects_empty() {
        assert!(matches!(
            Username::new("   "),
            Err(ValidationError::Empty { field: "username" })
        ));
    }

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new(""),
            Err(ValidationError::Empty { field: "api key" })
        ));
    }

    #[test]
    fn phone_parses_with_region_and_trims() {
        let phone = Phone::parse(Some(phonenumber::country::Id::GB), " 07911123456 ").unwrap();
        assert_eq!(phone.as_str(), "+447911123456");
    }

    #[test]
    fn account_status_codec_is_closed() {
        assert_eq!(AccountStatus::from_code('A').unwrap(), AccountStatus::Active);
        assert!(AccountStatus::from_code('Z').is_err());
        assert_eq!(AccountStatus::Active.code(), 'A');
    }
}
