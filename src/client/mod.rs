//! Client layer: orchestrates rate gating, HTTP dispatch, envelope
//! normalization, and deserialization.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ApiKey, Username, ValidationError};
use crate::transport::{Method, RequestDescriptor, normalize_body};

use gate::RateGate;

mod contacts;
mod gate;
mod lists;
mod messages;
mod numbers;
mod ping;
mod stats;
mod templates;
mod user;

pub use contacts::{ContactFields, SearchContactsOptions};

const DEFAULT_BASE_URL: &str = "https://rest.textmagic.com/api/v2";
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(20_000);

/// The API rejects more than two requests per second.
const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(500);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    method: Method,
    url: String,
    headers: Vec<(&'static str, String)>,
    query: Vec<(String, String)>,
    form: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, request.url.as_str());
            for (name, value) in &request.headers {
                builder = builder.header(*name, value);
            }
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }
            if !request.form.is_empty() {
                builder = builder.form(&request.form);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Authentication credentials attached to every outbound request as the
/// `X-TM-Username` / `X-TM-Key` header pair. Immutable for the lifetime of a
/// client instance.
pub struct Credentials {
    username: Username,
    key: ApiKey,
}

impl Credentials {
    /// Create validated credentials from an account username and a REST API
    /// key (`https://my.textmagic.com/online/api/rest-api/keys`).
    pub fn new(
        username: impl Into<String>,
        key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            key: ApiKey::new(key)?,
        })
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            (Username::HEADER, self.username.as_str().to_owned()),
            (ApiKey::HEADER, self.key.as_str().to_owned()),
        ]
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TextMagicClient`].
///
/// Only transport and parsing failures surface here. Application-level errors
/// (HTTP status >= 400) come back as an `Ok` payload whose `error` field is
/// populated; see [`crate::domain::ApiResult`].
pub enum TextMagicError {
    /// The transport did not complete (DNS, TLS, timeout, connection reset).
    #[error("network error: {0}")]
    Network(#[source] Box<dyn StdError + Send + Sync>),

    /// Response body could not be parsed into the expected shape.
    #[error("invalid response: {source}")]
    InvalidResponse {
        #[from]
        source: serde_json::Error,
    },

    /// The configured base URL is not a valid URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`TextMagicClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct TextMagicClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl TextMagicClientBuilder {
    /// Create a builder with the default base URL, timeout, and user-agent.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP timeout applied to the entire request. Default 20 s.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TextMagicClient`].
    pub fn build(self) -> Result<TextMagicClient, TextMagicError> {
        let base_url = url::Url::parse(&self.base_url)?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.unwrap_or_else(default_user_agent))
            .build()
            .map_err(|err| TextMagicError::Network(Box::new(err)))?;

        Ok(TextMagicClient {
            credentials: self.credentials,
            base_url: base_url.to_string(),
            gate: Arc::new(RateGate::new(MIN_REQUEST_INTERVAL)),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level TextMagic REST API v2 client.
///
/// Every call passes through one pipeline: the per-instance rate gate, the
/// credential headers, HTTP dispatch against the base URL (default
/// `https://rest.textmagic.com/api/v2`), envelope normalization, and
/// deserialization into the resource's typed result.
pub struct TextMagicClient {
    credentials: Credentials,
    base_url: String,
    gate: Arc<RateGate>,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for TextMagicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextMagicClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TextMagicClient {
    /// Create a client using the default base URL, timeout, and user-agent.
    ///
    /// For more customization, use [`TextMagicClient::builder`].
    pub fn new(credentials: Credentials) -> Result<Self, TextMagicError> {
        Self::builder(credentials).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> TextMagicClientBuilder {
        TextMagicClientBuilder::new(credentials)
    }

    /// Execute one descriptor through the gate/normalize/deserialize
    /// pipeline.
    pub(crate) async fn execute<T>(&self, descriptor: RequestDescriptor) -> Result<T, TextMagicError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.gate.acquire().await;

        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            descriptor.resolve_path()
        );
        let request = HttpRequest {
            method: descriptor.method(),
            url,
            headers: self.credentials.headers(),
            query: descriptor.query_params().to_vec(),
            form: descriptor.body_params().to_vec(),
        };

        let response = self
            .http
            .send(request)
            .await
            .map_err(TextMagicError::Network)?;

        let body = normalize_body(response.status, &response.body);
        Ok(serde_json::from_str(&body)?)
    }
}

/// Booleans go on the wire as `1` / `0`.
pub(crate) fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Id collections go on the wire as one comma-separated value.
pub(crate) fn csv<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn default_user_agent() -> String {
    format!(
        "textmagic-rest-rust/{} (rust; {} {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    #[derive(Clone)]
    pub(crate) struct FakeTransport {
        state: Arc<Mutex<FakeState>>,
    }

    struct FakeState {
        requests: Vec<HttpRequest>,
        response_status: u16,
        response_body: String,
        refuse_connections: bool,
    }

    impl FakeTransport {
        pub(crate) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeState {
                    requests: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                    refuse_connections: false,
                })),
            }
        }

        pub(crate) fn ok(response_body: impl Into<String>) -> Self {
            Self::new(200, response_body)
        }

        pub(crate) fn refusing_connections() -> Self {
            let transport = Self::new(200, "");
            transport.state.lock().unwrap().refuse_connections = true;
            transport
        }

        pub(crate) fn last_request(&self) -> HttpRequest {
            self.state
                .lock()
                .unwrap()
                .requests
                .last()
                .expect("no request was sent")
                .clone()
        }

        pub(crate) fn request_count(&self) -> usize {
            self.state.lock().unwrap().requests.len()
        }
    }

    impl HttpTransport for FakeTransport {
        fn send(
            &self,
            request: HttpRequest,
        ) -> BoxFuture<'_, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                if state.refuse_connections {
                    return Err("connection refused".into());
                }
                Ok(HttpResponse {
                    status: state.response_status,
                    body: state.response_body.clone(),
                })
            })
        }
    }

    pub(crate) fn client(transport: FakeTransport) -> TextMagicClient {
        TextMagicClient {
            credentials: Credentials::new("rust-test-username", "rust-test-token").unwrap(),
            base_url: "https://example.invalid/api/v2".to_owned(),
            gate: Arc::new(RateGate::new(MIN_REQUEST_INTERVAL)),
            http: Arc::new(transport),
        }
    }

    pub(crate) fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }
}
