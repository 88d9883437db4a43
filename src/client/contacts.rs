//! Contact, unsubscriber, and custom-field resource methods.

use crate::client::{TextMagicClient, TextMagicError, csv, flag};
use crate::domain::{
    Contact, ContactList, CustomField, DeleteResult, LinkResult, Page, Phone, UnsubscribedContact,
};
use crate::transport::RequestDescriptor;

#[derive(Debug, Clone, Default)]
/// Filters for [`TextMagicClient::search_contacts`].
pub struct SearchContactsOptions {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Include contacts from shared lists.
    pub shared: Option<bool>,
    /// Restrict the search to these contact ids.
    pub ids: Vec<i32>,
    /// Restrict the search to one list.
    pub list_id: Option<i32>,
    /// Free-text search over name, phone, and email.
    pub query: Option<String>,
}

#[derive(Debug, Clone)]
/// Fields of a contact to create or update.
pub struct ContactFields {
    pub phone: Phone,
    /// Lists the contact belongs to; at least one is required by the server.
    pub list_ids: Vec<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub email: Option<String>,
}

impl ContactFields {
    pub fn new(phone: Phone, list_ids: Vec<i32>) -> Self {
        Self {
            phone,
            list_ids,
            first_name: None,
            last_name: None,
            company_name: None,
            email: None,
        }
    }

    fn apply(&self, descriptor: RequestDescriptor) -> RequestDescriptor {
        descriptor
            .body("phone", self.phone.as_str())
            .body("lists", csv(&self.list_ids))
            .body_opt("firstName", self.first_name.as_deref())
            .body_opt("lastName", self.last_name.as_deref())
            .body_opt("companyName", self.company_name.as_deref())
            .body_opt("email", self.email.as_deref())
    }
}

impl TextMagicClient {
    /// Get a single contact.
    pub async fn get_contact(&self, id: i32) -> Result<Contact, TextMagicError> {
        self.execute(RequestDescriptor::get("contacts/{id}").path("id", id))
            .await
    }

    /// Get all contacts. Pass `shared` to include contacts from shared lists.
    pub async fn get_contacts(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
        shared: Option<bool>,
    ) -> Result<Page<Contact>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("contacts")
                .query_opt("page", page)
                .query_opt("limit", limit)
                .query_opt("shared", shared.map(flag)),
        )
        .await
    }

    /// Find contacts by the given filters.
    pub async fn search_contacts(
        &self,
        options: &SearchContactsOptions,
    ) -> Result<Page<Contact>, TextMagicError> {
        let mut descriptor = RequestDescriptor::get("contacts/search")
            .query_opt("page", options.page)
            .query_opt("limit", options.limit)
            .query_opt("shared", options.shared.map(flag));
        if !options.ids.is_empty() {
            descriptor = descriptor.query("ids", csv(&options.ids));
        }
        descriptor = descriptor
            .query_opt("listId", options.list_id)
            .query_opt("query", options.query.as_deref());

        self.execute(descriptor).await
    }

    /// Create a new contact from the submitted data.
    pub async fn create_contact(
        &self,
        fields: &ContactFields,
    ) -> Result<LinkResult, TextMagicError> {
        self.execute(fields.apply(RequestDescriptor::post("contacts")))
            .await
    }

    /// Update an existing contact.
    pub async fn update_contact(
        &self,
        id: i32,
        fields: &ContactFields,
    ) -> Result<LinkResult, TextMagicError> {
        self.execute(fields.apply(RequestDescriptor::put("contacts/{id}").path("id", id)))
            .await
    }

    /// Delete a single contact.
    pub async fn delete_contact(&self, id: i32) -> Result<DeleteResult, TextMagicError> {
        self.execute(RequestDescriptor::delete("contacts/{id}").path("id", id))
            .await
    }

    /// Get the lists a contact belongs to.
    pub async fn get_contact_lists(
        &self,
        id: i32,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<ContactList>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("contacts/{id}/lists")
                .path("id", id)
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Get a single unsubscribed contact.
    pub async fn get_unsubscribed_contact(
        &self,
        id: i32,
    ) -> Result<UnsubscribedContact, TextMagicError> {
        self.execute(RequestDescriptor::get("unsubscribers/{id}").path("id", id))
            .await
    }

    /// Get all unsubscribed contacts.
    pub async fn get_unsubscribed_contacts(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<UnsubscribedContact>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("unsubscribers")
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Unsubscribe a phone number from all future messages.
    pub async fn unsubscribe_contact(&self, phone: &Phone) -> Result<LinkResult, TextMagicError> {
        self.execute(RequestDescriptor::post("unsubscribers").body("phone", phone.as_str()))
            .await
    }

    /// Get a single custom field definition.
    pub async fn get_custom_field(&self, id: i32) -> Result<CustomField, TextMagicError> {
        self.execute(RequestDescriptor::get("customfields/{id}").path("id", id))
            .await
    }

    /// Get all custom field definitions.
    pub async fn get_custom_fields(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<CustomField>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("customfields")
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Create a new custom field.
    pub async fn create_custom_field(&self, name: &str) -> Result<LinkResult, TextMagicError> {
        self.execute(RequestDescriptor::post("customfields").body("name", name))
            .await
    }

    /// Rename an existing custom field.
    pub async fn update_custom_field(
        &self,
        id: i32,
        name: &str,
    ) -> Result<LinkResult, TextMagicError> {
        self.execute(
            RequestDescriptor::put("customfields/{id}")
                .path("id", id)
                .body("name", name),
        )
        .await
    }

    /// Delete a single custom field.
    pub async fn delete_custom_field(&self, id: i32) -> Result<DeleteResult, TextMagicError> {
        self.execute(RequestDescriptor::delete("customfields/{id}").path("id", id))
            .await
    }

    /// Set a custom field value on one contact. Returns the updated contact.
    pub async fn set_custom_field_value(
        &self,
        field_id: i32,
        contact_id: i32,
        value: &str,
    ) -> Result<Contact, TextMagicError> {
        self.execute(
            RequestDescriptor::put("customfields/{id}/update")
                .path("id", field_id)
                .body("contactId", contact_id)
                .body("value", value),
        )
        .await
    }
}
