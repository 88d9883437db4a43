//! Contact list resource methods.

use crate::client::{TextMagicClient, TextMagicError, csv, flag};
use crate::domain::{Contact, ContactList, DeleteResult, LinkResult, Page};
use crate::transport::RequestDescriptor;

impl TextMagicClient {
    /// Get a single list.
    pub async fn get_list(&self, id: i32) -> Result<ContactList, TextMagicError> {
        self.execute(RequestDescriptor::get("lists/{id}").path("id", id))
            .await
    }

    /// Get all user lists.
    pub async fn get_lists(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<ContactList>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("lists")
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Create a new list.
    pub async fn create_list(&self, name: &str, shared: bool) -> Result<LinkResult, TextMagicError> {
        self.execute(
            RequestDescriptor::post("lists")
                .body("name", name)
                .body("shared", flag(shared)),
        )
        .await
    }

    /// Update an existing list.
    pub async fn update_list(
        &self,
        id: i32,
        name: &str,
        shared: bool,
    ) -> Result<LinkResult, TextMagicError> {
        self.execute(
            RequestDescriptor::put("lists/{id}")
                .path("id", id)
                .body("name", name)
                .body("shared", flag(shared)),
        )
        .await
    }

    /// Delete a single list.
    pub async fn delete_list(&self, id: i32) -> Result<DeleteResult, TextMagicError> {
        self.execute(RequestDescriptor::delete("lists/{id}").path("id", id))
            .await
    }

    /// Fetch user contacts belonging to a list.
    pub async fn get_list_contacts(
        &self,
        id: i32,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<Contact>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("lists/{id}/contacts")
                .path("id", id)
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Assign contacts to a list.
    pub async fn add_contacts_to_list(
        &self,
        id: i32,
        contact_ids: &[i32],
    ) -> Result<LinkResult, TextMagicError> {
        self.execute(
            RequestDescriptor::put("lists/{id}/contacts")
                .path("id", id)
                .body("contacts", csv(contact_ids)),
        )
        .await
    }

    /// Unassign contacts from a list.
    pub async fn delete_contacts_from_list(
        &self,
        id: i32,
        contact_ids: &[i32],
    ) -> Result<DeleteResult, TextMagicError> {
        self.execute(
            RequestDescriptor::delete("lists/{id}/contacts")
                .path("id", id)
                .query("contacts", csv(contact_ids)),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::{self, FakeTransport, assert_param};
    use crate::transport::Method;

    #[tokio::test]
    async fn get_list_resolves_the_path() {
        let transport = FakeTransport::ok(
            r#"{"id":31337,"name":"apitestlist","description":"d","membersCount":1,"shared":false}"#,
        );
        let client = testing::client(transport.clone());

        let list = client.get_list(31337).await.unwrap();
        assert_eq!(list.id, Some(31337));
        assert_eq!(list.shared, Some(false));

        let request = transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert!(request.url.ends_with("/lists/31337"));
    }

    #[tokio::test]
    async fn create_list_posts_name_and_shared_flag() {
        let transport = FakeTransport::ok(r#"{"id":31337,"href":"/api/v2/lists/31337"}"#);
        let client = testing::client(transport.clone());

        let link = client.create_list("apitestlist", false).await.unwrap();
        assert_eq!(link.id, Some(31337));
        assert_eq!(link.href.as_deref(), Some("/api/v2/lists/31337"));

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert!(request.url.ends_with("/lists"));
        assert_param(&request.form, "name", "apitestlist");
        assert_param(&request.form, "shared", "0");
    }

    #[tokio::test]
    async fn membership_calls_use_the_nested_resource() {
        let transport = FakeTransport::ok("{}");
        let client = testing::client(transport.clone());

        client.add_contacts_to_list(5, &[31337, 31338]).await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, Method::Put);
        assert!(request.url.ends_with("/lists/5/contacts"));
        assert_param(&request.form, "contacts", "31337,31338");

        client
            .delete_contacts_from_list(5, &[31337])
            .await
            .unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, Method::Delete);
        assert_param(&request.query, "contacts", "31337");
    }
}
