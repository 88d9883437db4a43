use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::domain::common::api_result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Reusable message template. The content may contain merge tags inside
/// braces, e.g. `{FirstName}`.
pub struct Template {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "crate::transport::datetime::opt_datetime")]
    pub last_modified: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

api_result!(Template);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_decodes() {
        let json = r#"
        { "id": 382, "name": "Greeting", "content": "Hello {FirstName}!",
          "lastModified": "2015-04-01T10:05:55+0000" }
        "#;

        let template: Template = serde_json::from_str(json).unwrap();
        assert_eq!(template.id, Some(382));
        assert_eq!(template.content.as_deref(), Some("Hello {FirstName}!"));
        assert!(template.last_modified.is_some());
    }
}
