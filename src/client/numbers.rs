//! Sender setting resource methods: sources, sender ids, and dedicated
//! numbers.

use crate::client::{TextMagicClient, TextMagicError};
use crate::domain::{
    AvailableNumbers, DedicatedNumber, DeleteResult, LinkResult, Page, Phone, SenderId, Sources,
};
use crate::transport::RequestDescriptor;

impl TextMagicClient {
    /// Get all sender settings usable in the `from` parameter of a
    /// sending, optionally restricted to one country.
    pub async fn get_sources(&self, country: Option<&str>) -> Result<Sources, TextMagicError> {
        self.execute(RequestDescriptor::get("sources").query_opt("country", country))
            .await
    }

    /// Get a single sender id registration.
    pub async fn get_sender_id(&self, id: i32) -> Result<SenderId, TextMagicError> {
        self.execute(RequestDescriptor::get("senderids/{id}").path("id", id))
            .await
    }

    /// Get all sender id registrations.
    pub async fn get_sender_ids(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<SenderId>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("senderids")
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Apply for a new alphanumeric sender id. Activation requires a
    /// manual review, so the new registration starts out pending.
    pub async fn create_sender_id(
        &self,
        sender_id: &str,
        explanation: &str,
    ) -> Result<LinkResult, TextMagicError> {
        self.execute(
            RequestDescriptor::post("senderids")
                .body("senderId", sender_id)
                .body("explanation", explanation),
        )
        .await
    }

    /// Delete a single sender id registration.
    pub async fn delete_sender_id(&self, id: i32) -> Result<DeleteResult, TextMagicError> {
        self.execute(RequestDescriptor::delete("senderids/{id}").path("id", id))
            .await
    }

    /// List dedicated numbers available for purchase in a country.
    pub async fn find_available_numbers(
        &self,
        country: &str,
        prefix: Option<&str>,
    ) -> Result<AvailableNumbers, TextMagicError> {
        self.execute(
            RequestDescriptor::get("numbers/available")
                .query("country", country)
                .query_opt("prefix", prefix),
        )
        .await
    }

    /// Get a single dedicated number subscription.
    pub async fn get_dedicated_number(&self, id: i32) -> Result<DedicatedNumber, TextMagicError> {
        self.execute(RequestDescriptor::get("numbers/{id}").path("id", id))
            .await
    }

    /// Get all dedicated number subscriptions.
    pub async fn get_dedicated_numbers(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<DedicatedNumber>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("numbers")
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Buy a dedicated number and assign it to a user.
    pub async fn buy_dedicated_number(
        &self,
        phone: &Phone,
        country: &str,
        user_id: i32,
    ) -> Result<LinkResult, TextMagicError> {
        self.execute(
            RequestDescriptor::post("numbers")
                .body("phone", phone.as_str())
                .body("country", country)
                .body("userId", user_id),
        )
        .await
    }

    /// Cancel a dedicated number subscription.
    pub async fn cancel_dedicated_number(&self, id: i32) -> Result<DeleteResult, TextMagicError> {
        self.execute(RequestDescriptor::delete("numbers/{id}").path("id", id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::{self, FakeTransport, assert_param};
    use crate::domain::SenderIdStatus;
    use crate::transport::Method;

    use super::*;

    #[tokio::test]
    async fn get_sources_filters_by_country() {
        let transport = FakeTransport::ok(
            r#"{"dedicated":["447860021130"],"user":[],"shared":[],"senderIds":["EXAMPLE"]}"#,
        );
        let client = testing::client(transport.clone());

        let sources = client.get_sources(Some("GB")).await.unwrap();
        assert_eq!(sources.sender_ids, vec!["EXAMPLE".to_owned()]);

        let request = transport.last_request();
        assert!(request.url.ends_with("/sources"));
        assert_param(&request.query, "country", "GB");

        client.get_sources(None).await.unwrap();
        assert!(transport.last_request().query.is_empty());
    }

    #[tokio::test]
    async fn sender_id_application_posts_both_fields() {
        let transport = FakeTransport::ok(r#"{"id":5,"href":"/api/v2/senderids/5"}"#);
        let client = testing::client(transport.clone());

        client
            .create_sender_id("EXAMPLE", "Order notifications")
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert!(request.url.ends_with("/senderids"));
        assert_param(&request.form, "senderId", "EXAMPLE");
        assert_param(&request.form, "explanation", "Order notifications");
    }

    #[tokio::test]
    async fn get_sender_id_decodes_the_status_code() {
        let transport = FakeTransport::ok(r#"{"id":5,"senderId":"EXAMPLE","status":"R"}"#);
        let client = testing::client(transport.clone());

        let sender_id = client.get_sender_id(5).await.unwrap();
        assert_eq!(sender_id.status, Some(SenderIdStatus::Rejected));
        assert!(transport.last_request().url.ends_with("/senderids/5"));
    }

    #[tokio::test]
    async fn dedicated_number_lifecycle_uses_the_numbers_resource() {
        let transport = FakeTransport::ok(
            r#"{"numbers":["447860021130","447860021131"],"price":10.0}"#,
        );
        let client = testing::client(transport.clone());

        let available = client.find_available_numbers("GB", Some("4478")).await.unwrap();
        assert_eq!(available.numbers.len(), 2);
        let request = transport.last_request();
        assert!(request.url.ends_with("/numbers/available"));
        assert_param(&request.query, "country", "GB");
        assert_param(&request.query, "prefix", "4478");

        client
            .buy_dedicated_number(&Phone::new("447860021130").unwrap(), "GB", 12345)
            .await
            .unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert!(request.url.ends_with("/numbers"));
        assert_param(&request.form, "phone", "447860021130");
        assert_param(&request.form, "country", "GB");
        assert_param(&request.form, "userId", "12345");

        client.cancel_dedicated_number(777).await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, Method::Delete);
        assert!(request.url.ends_with("/numbers/777"));
    }
}
