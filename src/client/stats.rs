//! Messaging and spending statistics resource methods.

use chrono::{DateTime, Local};

use crate::client::{TextMagicClient, TextMagicError};
use crate::domain::{MessagingStats, Page, SpendingStats, StatsGroupBy};
use crate::transport::RequestDescriptor;

impl TextMagicClient {
    /// Get messaging statistics between two points in time, grouped by
    /// the requested period.
    pub async fn get_messaging_stats(
        &self,
        group_by: StatsGroupBy,
        start: Option<DateTime<Local>>,
        end: Option<DateTime<Local>>,
    ) -> Result<Page<MessagingStats>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("stats/messaging")
                .query("by", group_by.as_str())
                .query_opt("start", start.map(|t| t.timestamp()))
                .query_opt("end", end.map(|t| t.timestamp())),
        )
        .await
    }

    /// Get the account balance movements between two points in time.
    pub async fn get_spending_stats(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
        start: Option<DateTime<Local>>,
        end: Option<DateTime<Local>>,
    ) -> Result<Page<SpendingStats>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("stats/spending")
                .query_opt("page", page)
                .query_opt("limit", limit)
                .query_opt("start", start.map(|t| t.timestamp()))
                .query_opt("end", end.map(|t| t.timestamp())),
        )
        .await
    }
}
