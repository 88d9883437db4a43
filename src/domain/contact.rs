use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::domain::common::api_result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Phonebook contact.
pub struct Contact {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// 2-letter ISO country code with a display name.
pub struct Country {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Custom field definition, optionally carrying the value assigned to a
/// particular contact.
pub struct CustomField {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "crate::transport::datetime::opt_datetime")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Contact list.
pub struct ContactList {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub members_count: Option<u32>,
    #[serde(default)]
    pub shared: Option<bool>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Contact that opted out of receiving messages.
pub struct UnsubscribedContact {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "crate::transport::datetime::opt_datetime")]
    pub unsubscribe_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

api_result!(Contact, CustomField, ContactList, UnsubscribedContact);
