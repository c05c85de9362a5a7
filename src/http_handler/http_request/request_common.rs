use super::super::common::HTTPError;
use super::super::http_client::HTTPClient;
use super::super::http_response::response_common::ApiResponse;
use strum_macros::Display;

/// HTTP verbs the backend endpoints are reached with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HTTPRequestMethod {
    Get,
    Post,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
        }
    }
}

/// Describes one backend endpoint: where it lives, how it is called and
/// which model its response body is expected to carry.
pub(crate) trait HTTPRequestType {
    /// Backend model the response body deserializes into on `parse()`.
    type Response: for<'de> serde::Deserialize<'de>;
    /// Path relative to the base URL.
    fn endpoint(&self) -> &str;
    fn request_method(&self) -> HTTPRequestMethod;
    /// Per-request headers on top of the client defaults.
    fn header_params(&self) -> reqwest::header::HeaderMap { reqwest::header::HeaderMap::new() }
}

/// Endpoints called without a request body.
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<ApiResponse<Self::Response>, HTTPError> {
        client
            .send(
                self.request_method(),
                self.endpoint(),
                self.header_params(),
                None::<&()>,
            )
            .await
    }
}

/// Endpoints called with a JSON encoded request body.
pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<ApiResponse<Self::Response>, HTTPError> {
        client
            .send(
                self.request_method(),
                self.endpoint(),
                self.header_params(),
                Some(self.body()),
            )
            .await
    }
}

/// Failures raised before anything reaches the network.
#[derive(Debug, Display)]
pub enum RequestError {
    /// The request could not be assembled (invalid URL, unserializable body).
    Build(reqwest::Error),
    /// A request interceptor refused the request.
    #[strum(to_string = "request interceptor failed: {message}")]
    Interceptor { message: String },
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Build(err) => Some(err),
            RequestError::Interceptor { .. } => None,
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self { RequestError::Build(value) }
}
