//! Typed Rust client for the TextMagic REST API v2.
//!
//! The design has three layers: a domain layer of strong types with their
//! validation and wire codecs, a transport layer for request descriptors and
//! response-envelope quirks, and a small client layer orchestrating the
//! request pipeline (rate gate, credential headers, dispatch, normalization,
//! deserialization).
//!
//! Transport and parsing failures come back as [`TextMagicError`].
//! Application-level rejections (HTTP status >= 400) come back as an `Ok`
//! payload whose `error` field is populated; check it through the
//! [`ApiResult`] trait.
//!
//! ```rust,no_run
//! use textmagic::{Credentials, Phone, SendMessageOptions, TextMagicClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), textmagic::TextMagicError> {
//!     let client = TextMagicClient::new(Credentials::new("username", "api-key")?)?;
//!     let options = SendMessageOptions {
//!         text: Some("Hello!".to_owned()),
//!         phones: vec![Phone::new("999123456")?],
//!         ..Default::default()
//!     };
//!     let link = client.send_message(&options).await?;
//!     println!("created {:?}", link.href);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ContactFields, Credentials, SearchContactsOptions, TextMagicClient, TextMagicClientBuilder,
    TextMagicError,
};
pub use domain::{
    AccountStatus, ApiKey, ApiResult, AvailableNumbers, BulkSession, BulkSessionStatus, Chat,
    ChatMessage, Contact, ContactList, Country, CountryPricing, Currency, CustomField,
    DecodeError, DedicatedNumber, DeleteResult, DeliveryStatus, Invoice, LinkResult, Message,
    MessageDirection, MessagePrice, MessagingStats, NumberStatus, Page, Phone, PingResult, Reply,
    Schedule, SendMessageOptions, SenderId, SenderIdStatus, SendingSource, Session, Sources,
    SpendingStats, StatsGroupBy, SubaccountType, Template, Timezone, UnsubscribedContact, User,
    Username, ValidationError,
};
