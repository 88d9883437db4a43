//! Message template resource methods.

use crate::client::{TextMagicClient, TextMagicError, csv};
use crate::domain::{DeleteResult, LinkResult, Page, Template};
use crate::transport::RequestDescriptor;

impl TextMagicClient {
    /// Get a single template.
    pub async fn get_template(&self, id: i32) -> Result<Template, TextMagicError> {
        self.execute(RequestDescriptor::get("templates/{id}").path("id", id))
            .await
    }

    /// Get all user templates.
    pub async fn get_templates(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<Template>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("templates")
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Find user templates by id, name, or content.
    pub async fn search_templates(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
        ids: &[i32],
        name: Option<&str>,
        content: Option<&str>,
    ) -> Result<Page<Template>, TextMagicError> {
        let mut descriptor = RequestDescriptor::get("templates/search")
            .query_opt("page", page)
            .query_opt("limit", limit);
        if !ids.is_empty() {
            descriptor = descriptor.query("ids", csv(ids));
        }
        descriptor = descriptor
            .query_opt("name", name)
            .query_opt("content", content);

        self.execute(descriptor).await
    }

    /// Create a new template from the submitted data. The content may
    /// contain merge tags inside braces.
    pub async fn create_template(
        &self,
        name: &str,
        content: &str,
    ) -> Result<LinkResult, TextMagicError> {
        self.execute(
            RequestDescriptor::post("templates")
                .body("name", name)
                .body("content", content),
        )
        .await
    }

    /// Update an existing template.
    pub async fn update_template(
        &self,
        id: i32,
        name: &str,
        content: &str,
    ) -> Result<LinkResult, TextMagicError> {
        self.execute(
            RequestDescriptor::put("templates/{id}")
                .path("id", id)
                .body("name", name)
                .body("content", content),
        )
        .await
    }

    /// Delete a single template.
    pub async fn delete_template(&self, id: i32) -> Result<DeleteResult, TextMagicError> {
        self.execute(RequestDescriptor::delete("templates/{id}").path("id", id))
            .await
    }
}
