use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::domain::common::api_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Grouping period for `GET stats/messaging` (`by` query parameter).
pub enum StatsGroupBy {
    #[default]
    Off,
    Day,
    Month,
    Year,
}

impl StatsGroupBy {
    /// Wire value of the `by` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Messaging statistics for one grouping period.
pub struct MessagingStats {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub reply_rate: Option<f32>,
    #[serde(default)]
    pub delivery_rate: Option<f32>,
    #[serde(default)]
    pub costs: Option<f32>,
    #[serde(default)]
    pub messages_received: Option<i32>,
    #[serde(default)]
    pub messages_sent_delivered: Option<i32>,
    #[serde(default)]
    pub messages_sent_accepted: Option<i32>,
    #[serde(default)]
    pub messages_sent_buffered: Option<i32>,
    #[serde(default)]
    pub messages_sent_failed: Option<i32>,
    #[serde(default)]
    pub messages_sent_rejected: Option<i32>,
    #[serde(default)]
    pub messages_sent_parts: Option<i32>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One account balance movement.
pub struct SpendingStats {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "crate::transport::datetime::opt_datetime")]
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub delta: Option<f64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

api_result!(MessagingStats, SpendingStats);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_by_wire_values() {
        assert_eq!(StatsGroupBy::Off.as_str(), "off");
        assert_eq!(StatsGroupBy::Day.as_str(), "day");
        assert_eq!(StatsGroupBy::Month.as_str(), "month");
        assert_eq!(StatsGroupBy::Year.as_str(), "year");
    }

    #[test]
    fn spending_stats_decode() {
        let json = r#"
        { "id": 1, "date": "2015-04-01T10:05:55+0000", "balance": 10.5,
          "delta": -0.5, "type": "sms", "value": "431", "comment": "Sending" }
        "#;

        let stats: SpendingStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.kind.as_deref(), Some("sms"));
        assert_eq!(stats.delta, Some(-0.5));
    }
}
