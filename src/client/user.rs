//! Account, subaccount, and invoice resource methods.

use crate::client::{TextMagicClient, TextMagicError};
use crate::domain::{DeleteResult, Invoice, LinkResult, Page, SubaccountType, User};
use crate::transport::RequestDescriptor;

impl TextMagicClient {
    /// Get the authenticated account.
    pub async fn get_user(&self) -> Result<User, TextMagicError> {
        self.execute(RequestDescriptor::get("user")).await
    }

    /// Update the authenticated account details.
    pub async fn update_user(
        &self,
        first_name: &str,
        last_name: &str,
        company: &str,
    ) -> Result<LinkResult, TextMagicError> {
        self.execute(
            RequestDescriptor::put("user")
                .body("firstName", first_name)
                .body("lastName", last_name)
                .body("company", company),
        )
        .await
    }

    /// Get a single subaccount.
    pub async fn get_subaccount(&self, id: i32) -> Result<User, TextMagicError> {
        self.execute(RequestDescriptor::get("subaccounts/{id}").path("id", id))
            .await
    }

    /// Get all subaccounts.
    pub async fn get_subaccounts(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<User>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("subaccounts")
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Invite a new subaccount by email. The server sends the invitation
    /// and replies with 204.
    pub async fn invite_subaccount(
        &self,
        email: &str,
        role: SubaccountType,
    ) -> Result<DeleteResult, TextMagicError> {
        self.execute(
            RequestDescriptor::post("subaccounts")
                .body("email", email)
                .body("role", role.code()),
        )
        .await
    }

    /// Close a subaccount.
    pub async fn close_subaccount(&self, id: i32) -> Result<DeleteResult, TextMagicError> {
        self.execute(RequestDescriptor::delete("subaccounts/{id}").path("id", id))
            .await
    }

    /// Get all billing invoices.
    pub async fn get_invoices(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<Invoice>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("invoices")
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::{self, FakeTransport, assert_param};
    use crate::domain::{AccountStatus, ApiResult};
    use crate::transport::Method;

    use super::*;

    #[tokio::test]
    async fn get_user_hits_the_singleton_resource() {
        let transport = FakeTransport::ok(
            r#"{"id":12345,"username":"john.doe","firstName":"John","lastName":"Doe","status":"A","balance":100.5}"#,
        );
        let client = testing::client(transport.clone());

        let user = client.get_user().await.unwrap();
        assert_eq!(user.status, Some(AccountStatus::Active));
        assert_eq!(user.name(), "John Doe");

        let request = transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert!(request.url.ends_with("/api/v2/user"));
    }

    #[tokio::test]
    async fn update_user_puts_the_profile_fields() {
        let transport = FakeTransport::ok(r#"{"id":12345,"href":"/api/v2/user"}"#);
        let client = testing::client(transport.clone());

        client.update_user("John", "Doe", "Example Ltd.").await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Put);
        assert!(request.url.ends_with("/api/v2/user"));
        assert_param(&request.form, "firstName", "John");
        assert_param(&request.form, "lastName", "Doe");
        assert_param(&request.form, "company", "Example Ltd.");
    }

    #[tokio::test]
    async fn invite_subaccount_encodes_the_role_code() {
        let transport = FakeTransport::new(204, "");
        let client = testing::client(transport.clone());

        let result = client
            .invite_subaccount("jane.doe@example.com", SubaccountType::Administrator)
            .await
            .unwrap();
        assert!(result.is_success());

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert!(request.url.ends_with("/subaccounts"));
        assert_param(&request.form, "email", "jane.doe@example.com");
        assert_param(&request.form, "role", "A");
    }

    #[tokio::test]
    async fn subaccounts_and_invoices_page() {
        let transport = FakeTransport::ok(r#"{"page":1,"limit":10,"pageCount":1,"resources":[]}"#);
        let client = testing::client(transport.clone());

        client.get_subaccounts(Some(1), Some(10)).await.unwrap();
        let request = transport.last_request();
        assert!(request.url.ends_with("/subaccounts"));
        assert_param(&request.query, "page", "1");

        client.get_invoices(None, Some(10)).await.unwrap();
        let request = transport.last_request();
        assert!(request.url.ends_with("/invoices"));
        assert_param(&request.query, "limit", "10");
        assert!(!request.query.iter().any(|(k, _)| k == "page"));

        client.close_subaccount(556).await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, Method::Delete);
        assert!(request.url.ends_with("/subaccounts/556"));
    }
}
