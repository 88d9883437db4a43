use serde::Deserialize;

/// Access to the error side-channel every response payload carries.
///
/// When the server answers with HTTP status >= 400 the executor does not
/// fail the call; it nests the raw vendor body under the payload's `error`
/// field instead. Callers check [`ApiResult::is_success`] to distinguish a
/// logically successful response from an application-level error.
pub trait ApiResult {
    /// Raw vendor error body, if the server returned HTTP status >= 400.
    fn error(&self) -> Option<&serde_json::Value>;

    /// `true` when no application-level error is embedded.
    fn is_success(&self) -> bool {
        self.error().is_none()
    }
}

macro_rules! api_result {
    ($($name:ty),+ $(,)?) => {
        $(
            impl $crate::domain::ApiResult for $name {
                fn error(&self) -> Option<&serde_json::Value> {
                    self.error.as_ref()
                }
            }
        )+
    };
}

pub(crate) use api_result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One page of a paged resource listing.
pub struct Page<T> {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default = "Vec::new")]
    pub resources: Vec<T>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl<T> ApiResult for Page<T> {
    fn error(&self) -> Option<&serde_json::Value> {
        self.error.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Acknowledgment returned by create/update calls: the id of the touched
/// resource and a relative link to it.
pub struct LinkResult {
    #[serde(default, deserialize_with = "crate::transport::fields::opt_int")]
    pub id: Option<i32>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Acknowledgment returned by delete calls. The server answers 204, so the
/// only field ever populated is the error side-channel.
pub struct DeleteResult {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PingResult {
    #[serde(default)]
    pub ping: Option<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

api_result!(LinkResult, DeleteResult, PingResult);
