use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, Local};
use serde::Deserialize;

use crate::domain::codes::{BulkSessionStatus, DeliveryStatus, MessageDirection, SendingSource};
use crate::domain::common::api_result;
use crate::domain::contact::Contact;
use crate::domain::value::Phone;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Outbound message.
pub struct Message {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub status: Option<DeliveryStatus>,
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "crate::transport::datetime::opt_datetime")]
    pub message_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub price: Option<f32>,
    #[serde(default)]
    pub parts_count: Option<i32>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Inbound reply.
pub struct Reply {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "crate::transport::datetime::opt_datetime")]
    pub message_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Message sending session.
pub struct Session {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "crate::transport::datetime::opt_datetime")]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source: Option<SendingSource>,
    #[serde(default)]
    pub reference_id: Option<String>,
    #[serde(default)]
    pub price: Option<f32>,
    #[serde(default)]
    pub numbers_count: Option<i32>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Scheduled (recurring) sending.
pub struct Schedule {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "crate::transport::datetime::opt_datetime")]
    pub next_send: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub rrule: Option<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Bulk sending session.
pub struct BulkSession {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default)]
    pub status: Option<BulkSessionStatus>,
    #[serde(default)]
    pub items_processed: Option<i32>,
    #[serde(default)]
    pub items_total: Option<i32>,
    #[serde(default, deserialize_with = "crate::transport::datetime::opt_datetime")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Conversation with one phone number.
pub struct Chat {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub unread: Option<i32>,
    #[serde(default, deserialize_with = "crate::transport::datetime::opt_datetime")]
    pub updated_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One entry of a chat: an outgoing message or an incoming reply.
pub struct ChatMessage {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default)]
    pub direction: Option<MessageDirection>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default)]
    pub status: Option<DeliveryStatus>,
    #[serde(default, deserialize_with = "crate::transport::datetime::opt_datetime")]
    pub message_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Price estimate for a prospective sending (`GET messages/price`).
pub struct MessagePrice {
    #[serde(default)]
    pub total: Option<f32>,
    #[serde(default)]
    pub parts: Option<i32>,
    #[serde(default)]
    pub countries: BTreeMap<String, CountryPricing>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Per-country breakdown of a price estimate.
pub struct CountryPricing {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub count: Option<i32>,
    #[serde(default, rename = "max")]
    pub price: Option<f32>,
}

api_result!(
    Message,
    Reply,
    Session,
    Schedule,
    BulkSession,
    Chat,
    ChatMessage,
    MessagePrice,
);

#[derive(Debug, Clone, Default)]
/// Parameters for `POST messages` and `GET messages/price`.
///
/// Exactly one of `text` / `template_id` supplies the content, and at least
/// one of `phones` / `contact_ids` / `list_ids` supplies the recipients; the
/// server enforces both rules and reports violations through the payload's
/// error side-channel.
pub struct SendMessageOptions {
    /// Message text. Ignored when `template_id` is set.
    pub text: Option<String>,
    /// Template used as the message content.
    pub template_id: Option<i32>,
    /// Deferred sending time; sent as Unix epoch seconds.
    pub sending_time: Option<DateTime<Local>>,
    /// Recipient contact ids.
    pub contact_ids: Vec<i32>,
    /// Recipient list ids.
    pub list_ids: Vec<i32>,
    /// Recipient phone numbers.
    pub phones: Vec<Phone>,
    /// Cut the text to fit into a single part.
    pub cut_extra: bool,
    /// Maximum number of message parts.
    pub parts_count: Option<i32>,
    /// Custom reference id echoed back in callbacks.
    pub reference_id: Option<String>,
    /// Sender id or dedicated number used as the originator.
    pub from: Option<String>,
    /// iCal RRULE for recurring sendings.
    pub rrule: Option<String>,
    /// Simulate the call without actually sending.
    pub dummy: bool,
}
