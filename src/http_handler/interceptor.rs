use super::common::HTTPError;
use super::http_request::request_common::RequestError;
use super::http_response::response_common::HTTPResponse;
use crate::{error, info};

/// A built request on its way out, together with the endpoint it addresses.
#[derive(Debug)]
pub struct OutgoingRequest {
    endpoint: String,
    request: reqwest::Request,
}

impl OutgoingRequest {
    pub(crate) fn new(endpoint: &str, request: reqwest::Request) -> Self {
        Self { endpoint: endpoint.to_string(), request }
    }

    /// Path relative to the base URL, as the endpoint declares it.
    pub fn endpoint(&self) -> &str { self.endpoint.as_str() }
    pub fn method(&self) -> &reqwest::Method { self.request.method() }
    /// Absolute target URL.
    pub fn url(&self) -> &reqwest::Url { self.request.url() }
    pub fn request(&self) -> &reqwest::Request { &self.request }

    pub(crate) fn into_inner(self) -> reqwest::Request { self.request }
}

/// Middleware composed around every request the [`HTTPClient`](super::http_client::HTTPClient) sends.
///
/// Each hook receives the value in flight and returns it, so hooks can be
/// composed in order and observed in isolation. The defaults pass values through.
pub trait Interceptor: std::fmt::Debug + Send + Sync {
    /// Runs before the request is sent. An `Err` aborts the request.
    fn on_request(&self, request: OutgoingRequest) -> Result<OutgoingRequest, RequestError> {
        Ok(request)
    }

    /// Runs on every 2xx response.
    fn on_response(&self, response: HTTPResponse) -> HTTPResponse { response }

    /// Runs on every failure, including ones raised by `on_request`.
    fn on_error(&self, error: HTTPError) -> HTTPError { error }
}

/// Logs method and path of each outgoing request.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestLogger;

impl RequestLogger {
    pub fn line(request: &OutgoingRequest) -> String {
        format!(
            "API Request: {} {}",
            request.method().as_str().to_uppercase(),
            request.endpoint()
        )
    }
}

impl Interceptor for RequestLogger {
    fn on_request(&self, request: OutgoingRequest) -> Result<OutgoingRequest, RequestError> {
        info!("{}", Self::line(&request));
        Ok(request)
    }
}

/// Logs status and path of each response and the cause of each failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseLogger;

impl ResponseLogger {
    pub fn line(response: &HTTPResponse) -> String {
        format!("API Response: {} {}", response.status().as_u16(), response.path())
    }

    /// Prefers the backend's body; falls back to the error description.
    pub fn error_line(err: &HTTPError) -> String {
        let detail = err
            .body()
            .filter(|b| !b.is_empty())
            .map_or_else(|| err.message(), |b| String::from_utf8_lossy(b).into_owned());
        format!("API Response Error: {detail}")
    }
}

impl Interceptor for ResponseLogger {
    fn on_response(&self, response: HTTPResponse) -> HTTPResponse {
        info!("{}", Self::line(&response));
        response
    }

    fn on_error(&self, error: HTTPError) -> HTTPError {
        error!("{}", Self::error_line(&error));
        error
    }
}
