//! HTTP search client

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;

use crate::api::PageRequest;
use crate::api::SearchService;
use crate::api::query::PageToken;
use crate::api::query::Query;
use crate::api::query::SearchPage;
use crate::api::query::SearchPages;
use crate::api::query::SearchRows;
use crate::auth::StaticTokenProvider;
use crate::auth::TokenProvider;
use crate::config::ClientConfig;
use crate::config::DEFAULT_API_VERSION;
use crate::error::ApiError;
use crate::error::ConfigError;
use crate::error::Error;
use crate::error::RemoteServiceError;
use crate::error::ServiceErrorDetail;
use crate::model::CustomerId;
use crate::model::SearchRecord;
use crate::model::int64_text;

/// Response header carrying the service-assigned request id.
pub const REQUEST_ID_HEADER: &str = "request-id";

/// Client for the search endpoint.
///
/// Cheap to clone (uses `Arc` internally). Each [`fetch_page`](SearchService::fetch_page)
/// is exactly one HTTP request: no retry, no backoff. The configured timeout
/// applies to each request separately.
///
/// # Example
///
/// ```ignore
/// use adsearch_lib::{AdsClient, auth::StaticTokenProvider};
/// use adsearch_lib::api::query::build_keyword_query;
///
/// let client = AdsClient::builder()
///     .endpoint("https://googleads.googleapis.com")
///     .token_provider(StaticTokenProvider::new("ya29.token"))
///     .developer_token("dev-token")
///     .build()?;
///
/// let mut rows = client.search(build_keyword_query(2323295773, None)?);
/// while let Some(row) = rows.next().await {
///     println!("{}", row?);
/// }
/// ```
#[derive(Clone)]
pub struct AdsClient {
    inner: Arc<AdsClientInner>,
}

struct AdsClientInner {
    endpoint: String,
    api_version: String,
    developer_token: Option<String>,
    login_customer_id: Option<CustomerId>,
    token_provider: Arc<dyn TokenProvider>,
    http_client: Client,
    timeout: Option<Duration>,
}

impl AdsClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> AdsClientBuilder<Missing, Missing> {
        AdsClientBuilder::new()
    }

    /// Builds a client from configuration, using a static access token.
    ///
    /// Fails with [`Error::Config`] if the developer or access token is missing
    /// or the endpoint is not a valid URL.
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let access_token = config.require_access_token()?;
        let developer_token = config.require_developer_token()?;

        let mut builder = Self::builder()
            .endpoint(config.endpoint.as_str())
            .token_provider(StaticTokenProvider::new(access_token))
            .api_version(config.api_version.as_str())
            .developer_token(developer_token);

        if let Some(id) = config.login_customer_id {
            builder = builder.login_customer_id(id);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build()
    }

    /// Starts a lazy row search. See [`crate::api::search`].
    pub fn search(&self, query: Query) -> SearchRows<'_, Self> {
        SearchRows::new(self, query)
    }

    /// Starts a lazy page-by-page search. See [`crate::api::search_pages`].
    pub fn search_pages(&self, query: Query) -> SearchPages<'_, Self> {
        SearchPages::new(self, query)
    }

    /// Returns the service endpoint.
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Returns the API version being used.
    pub fn api_version(&self) -> &str {
        &self.inner.api_version
    }

    fn search_url(&self, customer_id: CustomerId) -> String {
        format!(
            "{}/{}/customers/{}/googleAds:search",
            self.inner.endpoint.trim_end_matches('/'),
            self.inner.api_version,
            customer_id
        )
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        match self.inner.timeout {
            Some(timeout) if err.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::Network(err),
        }
    }
}

#[async_trait]
impl SearchService for AdsClient {
    async fn fetch_page(&self, request: PageRequest<'_>) -> Result<SearchPage, Error> {
        let url = self.search_url(request.customer_id);
        let token = self
            .inner
            .token_provider
            .get_token(&self.inner.endpoint)
            .await?;

        let body = SearchRequestBody {
            query: request.query,
            page_size: request.page_size,
            page_token: request.page_token.map(PageToken::as_str),
        };

        let mut http_request = self
            .inner
            .http_client
            .post(&url)
            .bearer_auth(&token.access_token)
            .json(&body);

        if let Some(ref developer_token) = self.inner.developer_token {
            http_request = http_request.header("developer-token", developer_token.as_str());
        }
        if let Some(login_customer_id) = self.inner.login_customer_id {
            http_request = http_request.header("login-customer-id", login_customer_id.to_string());
        }
        if let Some(timeout) = self.inner.timeout {
            http_request = http_request.timeout(timeout);
        }

        log::trace!("POST {}", url);

        let response = http_request
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let status = response.status();

        let text = response.text().await.map_err(|e| {
            RemoteServiceError::from(self.transport_error(e)).or_request_id(request_id.clone())
        })?;

        if !status.is_success() {
            return Err(decode_failure(status.as_u16(), &text, request_id).into());
        }

        let parsed: SearchResponseBody = serde_json::from_str(&text).map_err(|e| {
            RemoteServiceError::from(ApiError::parse_with_body(e.to_string(), text.as_str()))
                .or_request_id(request_id.clone())
        })?;

        let mut page = SearchPage::new(parsed.results);
        if let Some(token) = parsed.next_page_token {
            page = page.with_next_page_token(token);
        }
        if let Some(count) = parsed.total_results_count.and_then(|c| c.parse().ok()) {
            page = page.with_total_results_count(count);
        }
        Ok(page)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequestBody<'a> {
    query: &'a str,
    page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponseBody {
    #[serde(default)]
    results: Vec<SearchRecord>,
    #[serde(default)]
    next_page_token: Option<String>,
    #[serde(default, deserialize_with = "int64_text")]
    total_results_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FailureEnvelope {
    error: FailureBody,
}

#[derive(Debug, Deserialize)]
struct FailureBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    details: Vec<FailureDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FailureDetail {
    #[serde(default)]
    errors: Vec<FailureError>,
    #[serde(default)]
    request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FailureError {
    #[serde(default)]
    error_code: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    message: String,
}

/// Decodes a non-success response into a [`RemoteServiceError`].
///
/// Every error in every failure detail is kept, in order. The `request-id`
/// header wins over a request id found in the body.
fn decode_failure(status: u16, body: &str, request_id: Option<String>) -> RemoteServiceError {
    let envelope: FailureEnvelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) => {
            return RemoteServiceError::from(ApiError::http(status, body))
                .or_request_id(request_id)
                .with_status(status);
        }
    };

    let failure = envelope.error;
    let body_request_id = failure.details.iter().find_map(|d| d.request_id.clone());

    let mut errors: Vec<ServiceErrorDetail> = failure
        .details
        .into_iter()
        .flat_map(|d| d.errors)
        .map(|e| ServiceErrorDetail::new(error_code_text(&e.error_code), e.message))
        .collect();

    if errors.is_empty() {
        errors.push(ServiceErrorDetail::new(
            failure.status.unwrap_or_default(),
            failure.message,
        ));
    }

    RemoteServiceError::new(request_id.or(body_request_id), errors).with_status(status)
}

/// Renders `{"queryError": "UNRECOGNIZED_FIELD"}` as `queryError: UNRECOGNIZED_FIELD`.
fn error_code_text(code: &serde_json::Map<String, serde_json::Value>) -> String {
    code.iter()
        .map(|(kind, value)| match value {
            serde_json::Value::String(s) => format!("{}: {}", kind, s),
            other => format!("{}: {}", kind, other),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`AdsClient`].
///
/// Uses the typestate pattern to ensure required fields are set at compile time.
///
/// # Required Fields
///
/// - `endpoint` - The service base URL
/// - `token_provider` - A [`TokenProvider`] implementation
pub struct AdsClientBuilder<Endpoint, Provider> {
    endpoint: Endpoint,
    token_provider: Provider,
    api_version: String,
    developer_token: Option<String>,
    login_customer_id: Option<CustomerId>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl AdsClientBuilder<Missing, Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            endpoint: Missing,
            token_provider: Missing,
            api_version: DEFAULT_API_VERSION.to_string(),
            developer_token: None,
            login_customer_id: None,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }
}

impl Default for AdsClientBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> AdsClientBuilder<Missing, P> {
    /// Sets the service base URL.
    pub fn endpoint(self, endpoint: impl Into<String>) -> AdsClientBuilder<Set<String>, P> {
        AdsClientBuilder {
            endpoint: Set(endpoint.into()),
            token_provider: self.token_provider,
            api_version: self.api_version,
            developer_token: self.developer_token,
            login_customer_id: self.login_customer_id,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<E> AdsClientBuilder<E, Missing> {
    /// Sets the token provider for authentication.
    pub fn token_provider<T: TokenProvider + 'static>(
        self,
        provider: T,
    ) -> AdsClientBuilder<E, Set<Arc<dyn TokenProvider>>> {
        AdsClientBuilder {
            endpoint: self.endpoint,
            token_provider: Set(Arc::new(provider) as Arc<dyn TokenProvider>),
            api_version: self.api_version,
            developer_token: self.developer_token,
            login_customer_id: self.login_customer_id,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<E, P> AdsClientBuilder<E, P> {
    /// Sets the API version to use.
    ///
    /// Defaults to `v17`.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Sets the developer token sent with every request.
    pub fn developer_token(mut self, token: impl Into<String>) -> Self {
        self.developer_token = Some(token.into());
        self
    }

    /// Sets the manager account through which the target account is accessed.
    pub fn login_customer_id(mut self, id: CustomerId) -> Self {
        self.login_customer_id = Some(id);
        self
    }

    /// Sets the timeout applied to each page fetch.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl AdsClientBuilder<Set<String>, Set<Arc<dyn TokenProvider>>> {
    /// Builds the [`AdsClient`].
    ///
    /// Fails with [`Error::Config`] if the endpoint is not an `http`/`https`
    /// URL or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<AdsClient, Error> {
        let endpoint = self.endpoint.0;
        let parsed = url::Url::parse(&endpoint).map_err(|e| ConfigError::InvalidUrl {
            url: endpoint.clone(),
            message: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: endpoint,
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            }
            .into());
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ConfigError::HttpClient)?
            }
        };

        Ok(AdsClient {
            inner: Arc::new(AdsClientInner {
                endpoint,
                api_version: self.api_version,
                developer_token: self.developer_token,
                login_customer_id: self.login_customer_id,
                token_provider: self.token_provider.0,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_failure_keeps_all_errors() {
        let body = r#"{
            "error": {
                "code": 400,
                "message": "Request contains an invalid argument.",
                "status": "INVALID_ARGUMENT",
                "details": [{
                    "@type": "type.googleapis.com/google.ads.googleads.v17.errors.GoogleAdsFailure",
                    "errors": [
                        { "errorCode": { "queryError": "UNRECOGNIZED_FIELD" }, "message": "Unrecognized field." },
                        { "errorCode": { "queryError": "INVALID_ENUM_VALUE" }, "message": "Bad enum." }
                    ],
                    "requestId": "body-id"
                }]
            }
        }"#;
        let err = decode_failure(400, body, None);
        assert_eq!(err.request_id(), Some("body-id"));
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.errors().len(), 2);
        assert_eq!(err.errors()[0].code, "queryError: UNRECOGNIZED_FIELD");
        assert_eq!(err.errors()[1].message, "Bad enum.");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_decode_failure_header_id_wins() {
        let body = r#"{ "error": { "message": "x", "details": [{ "requestId": "body-id" }] } }"#;
        let err = decode_failure(500, body, Some("header-id".to_string()));
        assert_eq!(err.request_id(), Some("header-id"));
        assert_eq!(err.messages().collect::<Vec<_>>(), ["x"]);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_decode_failure_unparsable_body() {
        let err = decode_failure(502, "<html>Bad Gateway</html>", Some("rid".to_string()));
        assert_eq!(err.request_id(), Some("rid"));
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.errors().len(), 1);
        assert!(err.errors()[0].message.contains("Bad Gateway"));
        assert!(matches!(err.transport(), Some(ApiError::Http { status: 502, .. })));
    }

    #[test]
    fn test_build_rejects_bad_endpoint() {
        let result = AdsClient::builder()
            .endpoint("not a url")
            .token_provider(StaticTokenProvider::new("t"))
            .build();
        assert!(matches!(result, Err(Error::Config(ConfigError::InvalidUrl { .. }))));

        let result = AdsClient::builder()
            .endpoint("ftp://example.com")
            .token_provider(StaticTokenProvider::new("t"))
            .build();
        assert!(matches!(result, Err(Error::Config(ConfigError::InvalidUrl { .. }))));
    }

    #[test]
    fn test_search_url() {
        let client = AdsClient::builder()
            .endpoint("https://example.com/")
            .token_provider(StaticTokenProvider::new("t"))
            .api_version("v99")
            .build()
            .unwrap();
        let customer = CustomerId::new(123).unwrap();
        assert_eq!(
            client.search_url(customer),
            "https://example.com/v99/customers/123/googleAds:search"
        );
    }

    #[test]
    fn test_from_config_requires_tokens() {
        let config = ClientConfig::default().with_access_token("t");
        assert!(matches!(
            AdsClient::from_config(&config),
            Err(Error::Config(ConfigError::Missing { .. }))
        ));
    }
}
