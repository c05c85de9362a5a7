use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::borrow::Cow;
use std::marker::PhantomData;
use std::ops::Deref;
use strum_macros::Display;

/// A fully read downstream response, exactly as the backend sent it.
///
/// This is the value response interceptors receive and hand back.
#[derive(Debug, Clone)]
pub struct HTTPResponse {
    status: StatusCode,
    headers: HeaderMap,
    /// Raw body bytes, never re-encoded.
    body: Vec<u8>,
    /// Endpoint path of the request that produced this response.
    path: String,
}

impl HTTPResponse {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>, path: String) -> Self {
        Self { status, headers, body, path }
    }

    pub fn status(&self) -> StatusCode { self.status }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { self.body.as_slice() }
    /// The body as text, with invalid UTF-8 replaced for display.
    pub fn text(&self) -> Cow<'_, str> { String::from_utf8_lossy(&self.body) }
    pub fn path(&self) -> &str { self.path.as_str() }

    /// Deserializes the body as JSON into an arbitrary model.
    pub fn json<T>(&self) -> Result<T, ResponseError>
    where T: for<'de> serde::Deserialize<'de> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// An [`HTTPResponse`] tagged with the backend model its body should carry.
///
/// The body is left untouched until [`ApiResponse::parse`] is called.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    response: HTTPResponse,
    model: PhantomData<fn() -> T>,
}

impl<T> ApiResponse<T> {
    pub(crate) fn new(response: HTTPResponse) -> Self { Self { response, model: PhantomData } }
}

impl<T> ApiResponse<T>
where T: for<'de> serde::Deserialize<'de>
{
    pub fn parse(&self) -> Result<T, ResponseError> { self.response.json::<T>() }
}

impl<T> Deref for ApiResponse<T> {
    type Target = HTTPResponse;

    fn deref(&self) -> &Self::Target { &self.response }
}

/// Failures reported after the request left the client.
#[derive(Debug, Display)]
pub enum ResponseError {
    /// The backend answered with a non-2xx status.
    #[strum(to_string = "backend returned {status} for {path}")]
    Status { status: StatusCode, body: Vec<u8>, path: String },
    /// The request did not complete within the configured timeout.
    Timeout(reqwest::Error),
    /// The backend could not be reached (refused connection, DNS failure).
    NoConnection(reqwest::Error),
    /// The body did not match the requested model.
    Parse(serde_json::Error),
    Unknown(reqwest::Error),
}

impl ResponseError {
    /// Human readable cause, including the transport error message if any.
    pub fn message(&self) -> String {
        match self {
            ResponseError::Status { .. } => self.to_string(),
            ResponseError::Timeout(err)
            | ResponseError::NoConnection(err)
            | ResponseError::Unknown(err) => format!("{self}: {err}"),
            ResponseError::Parse(err) => format!("{self}: {err}"),
        }
    }
}

impl std::error::Error for ResponseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResponseError::Status { .. } => None,
            ResponseError::Timeout(err)
            | ResponseError::NoConnection(err)
            | ResponseError::Unknown(err) => Some(err),
            ResponseError::Parse(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout(value)
        } else if value.is_connect() {
            ResponseError::NoConnection(value)
        } else {
            ResponseError::Unknown(value)
        }
    }
}

impl From<serde_json::Error> for ResponseError {
    fn from(value: serde_json::Error) -> Self { ResponseError::Parse(value) }
}
