//! Logical request descriptors built by the resource method layer.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone)]
/// One planned API call: verb, path template with `{placeholder}` segments,
/// and the parameters to attach. Query parameters ride in the URL, body
/// parameters are form-encoded; absent optionals are never recorded.
pub(crate) struct RequestDescriptor {
    method: Method,
    resource: &'static str,
    path: Vec<(&'static str, String)>,
    query: Vec<(String, String)>,
    body: Vec<(String, String)>,
}

impl RequestDescriptor {
    fn new(method: Method, resource: &'static str) -> Self {
        Self {
            method,
            resource,
            path: Vec::new(),
            query: Vec::new(),
            body: Vec::new(),
        }
    }

    pub(crate) fn get(resource: &'static str) -> Self {
        Self::new(Method::Get, resource)
    }

    pub(crate) fn post(resource: &'static str) -> Self {
        Self::new(Method::Post, resource)
    }

    pub(crate) fn put(resource: &'static str) -> Self {
        Self::new(Method::Put, resource)
    }

    pub(crate) fn delete(resource: &'static str) -> Self {
        Self::new(Method::Delete, resource)
    }

    pub(crate) fn path(mut self, name: &'static str, value: impl ToString) -> Self {
        self.path.push((name, value.to_string()));
        self
    }

    pub(crate) fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_owned(), value.to_string()));
        self
    }

    pub(crate) fn query_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    pub(crate) fn body(mut self, name: &str, value: impl ToString) -> Self {
        self.body.push((name.to_owned(), value.to_string()));
        self
    }

    pub(crate) fn body_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.body(name, value),
            None => self,
        }
    }

    pub(crate) fn method(&self) -> Method {
        self.method
    }

    /// Path with every `{placeholder}` replaced by its recorded value.
    pub(crate) fn resolve_path(&self) -> String {
        let mut resolved = self.resource.to_owned();
        for (name, value) in &self.path {
            resolved = resolved.replace(&format!("{{{name}}}"), value);
        }
        resolved
    }

    pub(crate) fn path_params(&self) -> &[(&'static str, String)] {
        &self.path
    }

    pub(crate) fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    pub(crate) fn body_params(&self) -> &[(String, String)] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_placeholders_from_path_params() {
        let descriptor = RequestDescriptor::get("contacts/{id}")
            .path("id", 31337)
            .query("page", 2)
            .body("name", "ignored");

        assert_eq!(descriptor.resolve_path(), "contacts/31337");
        assert_eq!(descriptor.path_params().len(), 1);
    }

    #[test]
    fn resolves_multiple_placeholders() {
        let descriptor = RequestDescriptor::get("lists/{id}/contacts/{contactId}")
            .path("id", 5)
            .path("contactId", 7);

        assert_eq!(descriptor.resolve_path(), "lists/5/contacts/7");
    }

    #[test]
    fn plain_resource_is_left_untouched() {
        let descriptor = RequestDescriptor::post("templates");
        assert_eq!(descriptor.resolve_path(), "templates");
        assert_eq!(descriptor.method(), Method::Post);
    }

    #[test]
    fn absent_optional_parameters_are_omitted() {
        let descriptor = RequestDescriptor::get("templates")
            .query_opt("page", Some(2))
            .query_opt("limit", None::<u32>)
            .body_opt("name", None::<&str>);

        assert_eq!(
            descriptor.query_params(),
            [("page".to_owned(), "2".to_owned())]
        );
        assert!(descriptor.body_params().is_empty());
    }
}
