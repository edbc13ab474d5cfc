//! Request dispatch with tracing instrumentation.
//!
//! This module provides [`FireflyClient`], which sends prepared requests,
//! classifies the response by media type and validates structured bodies
//! against the shape the route declares for the returned status.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use firefly_define::{ApiResponse, RestMethod, Shape};
use firefly_definitions::RouteId;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tracing::{Span, debug, instrument, warn};
use url::Url;

use super::PreparedRequest;
use crate::call::CallParams;
use crate::error::{ApiError, ClientError, ConfigError, ValidationError};
use crate::query::ArrayEncoding;
use crate::response::{ContentKind, Envelope, ResponseBody};

/// Builder for configuring a [`FireflyClient`].
pub struct FireflyClientBuilder {
    base_url: Url,
    token: String,
    timeout: Option<Duration>,
    default_headers: HeaderMap,
    array_encoding: ArrayEncoding,
    trace_ids: bool,
}

impl fmt::Debug for FireflyClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FireflyClientBuilder")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .field("array_encoding", &self.array_encoding)
            .field("trace_ids", &self.trace_ids)
            .finish_non_exhaustive()
    }
}

impl FireflyClientBuilder {
    fn new(base_url: Url, token: String) -> Self {
        Self {
            base_url,
            token,
            timeout: None,
            default_headers: HeaderMap::new(),
            array_encoding: ArrayEncoding::default(),
            trace_ids: false,
        }
    }

    /// Sets a request timeout. Requests never time out unless this is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header sent with every request. Per-call headers of the same
    /// name win.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let header = HeaderName::try_from(name.as_ref())
            .map_err(|e| ConfigError::invalid_header(name.as_ref(), e))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ConfigError::invalid_header(name.as_ref(), e))?;
        self.default_headers.insert(header, value);
        Ok(self)
    }

    /// Chooses how list-valued query parameters are encoded.
    pub fn array_encoding(mut self, encoding: ArrayEncoding) -> Self {
        self.array_encoding = encoding;
        self
    }

    /// Attaches a fresh `X-Trace-Id` to calls of routes that accept one.
    pub fn trace_ids(mut self, enabled: bool) -> Self {
        self.trace_ids = enabled;
        self
    }

    /// Builds the [`FireflyClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is not an `http(s)` base, the token
    /// is empty, or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<FireflyClient, ApiError> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "scheme must be http or https",
            }
            .into());
        }
        if self.base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "not a base URL",
            }
            .into());
        }

        let token = self.token.trim();
        if token.is_empty() {
            return Err(ConfigError::missing_field("api_key").into());
        }
        let mut authorization = HeaderValue::try_from(format!("Bearer {token}"))
            .map_err(|e| ConfigError::invalid_header(AUTHORIZATION.as_str(), e))?;
        authorization.set_sensitive(true);

        let mut http = reqwest::Client::builder().pool_max_idle_per_host(10);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build().map_err(ClientError::Request)?;

        Ok(FireflyClient {
            http,
            base_url: self.base_url,
            authorization,
            default_headers: self.default_headers,
            timeout: self.timeout,
            array_encoding: self.array_encoding,
            trace_ids: self.trace_ids,
        })
    }
}

/// Async client for the Firefly III API.
///
/// Cheap to clone: clones share one pooled `reqwest::Client` and no mutable
/// state.
///
/// ## Examples
///
/// ```no_run
/// use firefly_client::{CallParams, FireflyClient};
/// use firefly_definitions::{RouteId, Single, accounts::Account};
///
/// # async fn run() -> Result<(), firefly_client::ApiError> {
/// let client = FireflyClient::new("https://demo.firefly-iii.org/api", "token")?;
///
/// let envelope = client
///     .call(RouteId::GetAccount, CallParams::new().path("id", 42))
///     .await?
///     .error_for_status()?;
/// let account: Single<Account> = envelope.json()?;
/// println!("{}", account.data.attributes.name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FireflyClient {
    http: reqwest::Client,
    pub(super) base_url: Url,
    pub(super) authorization: HeaderValue,
    pub(super) default_headers: HeaderMap,
    timeout: Option<Duration>,
    pub(super) array_encoding: ArrayEncoding,
    pub(super) trace_ids: bool,
}

impl FireflyClient {
    /// Creates a new builder.
    ///
    /// ## Arguments
    ///
    /// * `base_url` - Address of the API root, e.g. `https://host/api`.
    /// * `token` - Personal access token sent as a bearer credential.
    pub fn builder(base_url: Url, token: impl Into<String>) -> FireflyClientBuilder {
        FireflyClientBuilder::new(base_url, token.into())
    }

    /// Creates a client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if `base_url` does not parse or the client cannot be
    /// built.
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(ConfigError::InvalidUrl)?;
        Self::builder(base_url, token).build()
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn array_encoding(&self) -> ArrayEncoding {
        self.array_encoding
    }

    /// Builds and dispatches a call to `route`.
    ///
    /// ## Errors
    ///
    /// Usage faults are returned before any request is sent. Non-success
    /// statuses are not errors; see [`Envelope::error_for_status`].
    pub async fn call(&self, route: RouteId, params: CallParams) -> Result<Envelope, ApiError> {
        let request = self.prepare(route, params)?;
        self.dispatch(request).await
    }

    /// Like [`call`](Self::call), abandoning the request when `cancel`
    /// completes first.
    pub async fn call_until<F>(
        &self,
        route: RouteId,
        params: CallParams,
        cancel: F,
    ) -> Result<Envelope, ApiError>
    where
        F: Future,
    {
        let request = self.prepare(route, params)?;
        self.dispatch_until(request, cancel).await
    }

    /// Sends exactly one request and decodes the response.
    ///
    /// No retries and no backoff. Structured bodies are parsed, then
    /// validated against the shape declared for the returned status when
    /// validation is enabled for the request.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The request fails (network, timeout, etc.)
    /// - A JSON content type carries a body that is not JSON
    /// - The body violates the declared shape
    #[instrument(
        name = "api_request",
        skip(self, request),
        fields(
            route = %request.route,
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn dispatch(&self, request: PreparedRequest) -> Result<Envelope, ApiError> {
        let span = Span::current();
        span.record("http.method", request.method.to_string().as_str());
        span.record("http.url", request.url.as_str());

        let PreparedRequest {
            route,
            method,
            url,
            headers,
            body,
            validate,
        } = request;

        let mut builder = self.http.request(to_reqwest(method), url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let status_code = status.as_u16();
        span.record("http.status_code", status_code);

        let otel_status = if status.is_success() {
            "OK"
        } else if status.is_server_error() {
            "ERROR"
        } else {
            "UNSET"
        };
        span.record("otel.status_code", otel_status);

        let headers = response.headers().clone();
        let kind = ContentKind::classify(
            headers
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
        );
        let bytes = response.bytes().await.map_err(|e| match self.transport_error(e) {
            ClientError::Request(source) => ClientError::ReadBody {
                route: route.to_string(),
                source,
            },
            other => other,
        })?;
        debug!(
            route = %route,
            status = status_code,
            kind = kind.as_str(),
            bytes = bytes.len(),
            "classified response"
        );

        let (body, validated) = decode(route, status_code, kind, bytes, validate)?;

        Ok(Envelope {
            route,
            status: status_code,
            headers,
            body,
            validated,
        })
    }

    /// Dispatches `request` unless `cancel` completes first.
    ///
    /// On cancellation the in-flight request is dropped and
    /// [`ClientError::Cancelled`] is returned.
    ///
    /// ## Examples
    ///
    /// ```no_run
    /// use std::time::Duration;
    /// use firefly_client::{CallParams, FireflyClient};
    /// use firefly_definitions::RouteId;
    ///
    /// # async fn run(client: FireflyClient) -> Result<(), firefly_client::ApiError> {
    /// let request = client.prepare(RouteId::ListTransaction, CallParams::new())?;
    /// let deadline = tokio::time::sleep(Duration::from_secs(2));
    /// let envelope = client.dispatch_until(request, deadline).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn dispatch_until<F>(
        &self,
        request: PreparedRequest,
        cancel: F,
    ) -> Result<Envelope, ApiError>
    where
        F: Future,
    {
        let route = request.route;

        tokio::select! {
            biased;
            _ = cancel => {
                debug!(route = %route, "request cancelled by caller");
                Err(ClientError::Cancelled { route: route.to_string() }.into())
            }
            result = self.dispatch(request) => result,
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> ClientError {
        match self.timeout {
            Some(timeout) if err.is_timeout() => ClientError::Timeout {
                duration_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            },
            _ if err.is_connect() => ClientError::Connection(err.to_string()),
            _ => ClientError::Request(err),
        }
    }
}

fn to_reqwest(method: RestMethod) -> Method {
    match method {
        RestMethod::Get => Method::GET,
        RestMethod::Post => Method::POST,
        RestMethod::Put => Method::PUT,
        RestMethod::Patch => Method::PATCH,
        RestMethod::Delete => Method::DELETE,
    }
}

/// Turns raw bytes into a [`ResponseBody`] according to `kind`.
///
/// An empty body is [`ResponseBody::Empty`] only when the route declares no
/// body for `status`, or when a structured response has nothing to be
/// checked against. A declared shape still sees the empty body (as JSON
/// `null`), so a missing payload is a contract violation.
fn decode(
    route: RouteId,
    status: u16,
    kind: ContentKind,
    bytes: Bytes,
    validate: bool,
) -> Result<(ResponseBody, bool), ValidationError> {
    let declared = route.route().responses.get(status);
    if bytes.is_empty() && declared.is_some_and(ApiResponse::is_empty) {
        return Ok((ResponseBody::Empty, false));
    }

    match kind {
        ContentKind::Text => Ok((
            ResponseBody::Text(String::from_utf8_lossy(&bytes).into_owned()),
            false,
        )),
        ContentKind::Binary => Ok((ResponseBody::Binary(bytes), false)),
        ContentKind::Structured => {
            let shape = declared.and_then(ApiResponse::shape);

            if !validate {
                debug!(route = %route, status, "validation disabled");
            } else if shape.is_none() {
                debug!(route = %route, status, "no shape declared for status");
            }
            let shape = shape.filter(|_| validate);

            if bytes.is_empty() {
                let Some(shape) = shape else {
                    return Ok((ResponseBody::Empty, false));
                };
                return check(route, status, shape, &serde_json::Value::Null)
                    .map(|_| (ResponseBody::Empty, true));
            }

            let value: serde_json::Value = serde_json::from_slice(&bytes)?;
            match shape {
                Some(shape) => check(route, status, shape, &value)
                    .map(|coerced| (ResponseBody::Json(coerced), true)),
                None => Ok((ResponseBody::Json(value), false)),
            }
        }
    }
}

fn check(
    route: RouteId,
    status: u16,
    shape: &Shape,
    value: &serde_json::Value,
) -> Result<serde_json::Value, ValidationError> {
    shape.validate(value).map_err(|err| {
        warn!(
            route = %route,
            status,
            violations = err.violations.len(),
            "response violates its declared shape"
        );
        ValidationError::ContractViolation {
            route: route.to_string(),
            status,
            violations: err.violations,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> FireflyClient {
        FireflyClient::new(&server.uri(), "test-token").unwrap()
    }

    #[test]
    fn test_build_rejects_non_http_scheme() {
        let base_url = Url::parse("ftp://firefly.example.com").unwrap();
        let err = FireflyClient::builder(base_url, "token").build().unwrap_err();
        assert!(matches!(
            err,
            ApiError::Config(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_build_rejects_empty_token() {
        let base_url = Url::parse("https://firefly.example.com/api").unwrap();
        let err = FireflyClient::builder(base_url, "  ").build().unwrap_err();
        assert!(matches!(
            err,
            ApiError::Config(ConfigError::MissingField { field: "api_key" })
        ));
    }

    #[test]
    fn test_new_rejects_relative_url() {
        let err = FireflyClient::new("/api", "token").unwrap_err();
        assert!(matches!(err, ApiError::Config(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_invalid_default_header() {
        let base_url = Url::parse("https://firefly.example.com").unwrap();
        let err = FireflyClient::builder(base_url, "token")
            .default_header("bad header", "x")
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Config(ConfigError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_debug_hides_token() {
        let base_url = Url::parse("https://firefly.example.com").unwrap();
        let builder = FireflyClient::builder(base_url.clone(), "secret-token");
        assert!(!format!("{builder:?}").contains("secret-token"));

        let client = FireflyClient::builder(base_url, "secret-token").build().unwrap();
        assert!(!format!("{client:?}").contains("secret-token"));
    }

    #[test]
    fn test_decode_empty_body_is_empty() {
        let body = decode(
            RouteId::DeleteAccount,
            204,
            ContentKind::Structured,
            Bytes::new(),
            true,
        )
        .unwrap();
        assert_eq!(body, (ResponseBody::Empty, false));
    }

    #[test]
    fn test_decode_empty_body_against_shape_is_violation() {
        let err = decode(
            RouteId::GetAccount,
            200,
            ContentKind::Structured,
            Bytes::new(),
            true,
        )
        .unwrap_err();
        assert!(!err.violations().is_empty());
    }

    #[test]
    fn test_decode_empty_body_without_validation_is_empty() {
        let body = decode(
            RouteId::GetAccount,
            200,
            ContentKind::Structured,
            Bytes::new(),
            false,
        )
        .unwrap();
        assert_eq!(body, (ResponseBody::Empty, false));
    }

    #[test]
    fn test_decode_empty_binary_and_text_keep_their_kind() {
        let binary = decode(
            RouteId::DownloadAttachment,
            200,
            ContentKind::Binary,
            Bytes::new(),
            true,
        )
        .unwrap();
        assert_eq!(binary, (ResponseBody::Binary(Bytes::new()), false));

        let text = decode(
            RouteId::ExportTransactions,
            200,
            ContentKind::Text,
            Bytes::new(),
            true,
        )
        .unwrap();
        assert_eq!(text, (ResponseBody::Text(String::new()), false));
    }

    #[test]
    fn test_decode_text_is_lossy() {
        let body = decode(
            RouteId::ExportTransactions,
            200,
            ContentKind::Text,
            Bytes::from_static(b"a,b\n\xff"),
            true,
        )
        .unwrap();
        assert_eq!(
            body,
            (ResponseBody::Text("a,b\n\u{fffd}".to_string()), false)
        );
    }

    #[test]
    fn test_decode_undeclared_status_skips_validation() {
        let body = decode(
            RouteId::GetAccount,
            418,
            ContentKind::Structured,
            Bytes::from_static(br#"{"anything": 1}"#),
            true,
        )
        .unwrap();
        assert_eq!(body, (ResponseBody::Json(json!({"anything": 1})), false));
    }

    #[tokio::test]
    async fn test_bearer_token_auth() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/about"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"version": "6.1.0", "api_version": "2.1.0"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let envelope = client(&mock_server)
            .call(RouteId::GetAbout, CallParams::new())
            .await
            .unwrap();
        assert_eq!(envelope.status, 200);
    }

    #[tokio::test]
    async fn test_base_path_is_kept() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/about"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = FireflyClient::new(&format!("{}/api/", mock_server.uri()), "t").unwrap();
        let envelope = client.call(RouteId::GetAbout, CallParams::new()).await.unwrap();
        assert!(envelope.is_success());
    }

    #[tokio::test]
    async fn test_connection_failure() {
        let client = FireflyClient::new("http://127.0.0.1:9", "token").unwrap();
        let err = client
            .call(RouteId::GetAbout, CallParams::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Client(ref e) if e.is_retryable()));
    }

    #[tokio::test]
    async fn test_custom_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/about"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client = FireflyClient::builder(Url::parse(&mock_server.uri()).unwrap(), "t")
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let err = client
            .call(RouteId::GetAbout, CallParams::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Client(ClientError::Timeout { duration_ms: 50 })
        ));
    }

    // ===========================================
    // Tracing tests
    // ===========================================

    #[tokio::test]
    #[traced_test]
    async fn test_dispatch_emits_tracing_events() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/about/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let _ = client(&mock_server)
            .call(RouteId::GetCurrentUser, CallParams::new())
            .await;

        assert!(logs_contain("api_request"));
        assert!(logs_contain("getCurrentUser"));
        assert!(logs_contain("classified response"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_contract_violation_emits_warning() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/accounts/42"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"id": 42}}))
                    .insert_header("content-type", "application/vnd.api+json"),
            )
            .mount(&mock_server)
            .await;

        let result = client(&mock_server)
            .call(RouteId::GetAccount, CallParams::new().path("id", 42))
            .await;

        assert!(result.is_err());
        assert!(logs_contain("response violates its declared shape"));
    }
}
