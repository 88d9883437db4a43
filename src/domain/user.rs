use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::domain::codes::{AccountStatus, SubaccountType};
use crate::domain::common::api_result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Account (or subaccount) details.
pub struct User {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub status: Option<AccountStatus>,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default)]
    pub timezone: Option<Timezone>,
    #[serde(default)]
    pub subaccount_type: Option<SubaccountType>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl User {
    /// First and last name joined the way the web app displays them.
    pub fn name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Account currency.
pub struct Currency {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub html_symbol: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Account timezone.
pub struct Timezone {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub dst: Option<i32>,
    #[serde(default)]
    pub offset: Option<i32>,
    #[serde(default)]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Billing invoice.
pub struct Invoice {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default)]
    pub bundle: Option<i32>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub vat: Option<f32>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "crate::transport::datetime::opt_datetime")]
    pub paid_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

api_result!(User, Invoice);
