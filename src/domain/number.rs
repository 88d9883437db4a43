use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::domain::codes::{NumberStatus, SenderIdStatus};
use crate::domain::common::api_result;
use crate::domain::contact::Country;
use crate::domain::user::User;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Alphanumeric sender id registration.
pub struct SenderId {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    /// The alphanumeric sender id itself.
    #[serde(default, rename = "senderId")]
    pub name: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub status: Option<SenderIdStatus>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Dedicated inbound number subscription.
pub struct DedicatedNumber {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, deserialize_with = "crate::transport::datetime::opt_datetime")]
    pub purchased_at: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "crate::transport::datetime::opt_datetime")]
    pub expire_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub status: Option<NumberStatus>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Dedicated numbers available for purchase in one country.
pub struct AvailableNumbers {
    #[serde(default)]
    pub numbers: Vec<String>,
    #[serde(default)]
    pub price: Option<f32>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Sender settings usable in the `from` parameter of `POST messages`.
pub struct Sources {
    #[serde(default)]
    pub dedicated: Vec<String>,
    #[serde(default)]
    pub user: Vec<String>,
    #[serde(default)]
    pub shared: Vec<String>,
    #[serde(default)]
    pub sender_ids: Vec<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

api_result!(SenderId, DedicatedNumber, AvailableNumbers, Sources);
