use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use reqwest::StatusCode;
use strum_macros::Display;

/// Every way an adapter operation can fail.
#[derive(Debug, Display)]
pub enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl HTTPError {
    /// Status of the backend response, if the failure carried one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HTTPError::HTTPResponseError(ResponseError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Body of the backend response, if the failure carried one.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            HTTPError::HTTPResponseError(ResponseError::Status { body, .. }) => Some(body.as_slice()),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, HTTPError::HTTPResponseError(ResponseError::Timeout(_)))
    }

    pub fn message(&self) -> String {
        match self {
            HTTPError::HTTPRequestError(RequestError::Build(err)) => format!("request build failed: {err}"),
            HTTPError::HTTPRequestError(err) => err.to_string(),
            HTTPError::HTTPResponseError(err) => err.message(),
        }
    }
}

impl std::error::Error for HTTPError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HTTPError::HTTPRequestError(err) => Some(err),
            HTTPError::HTTPResponseError(err) => Some(err),
        }
    }
}

impl From<RequestError> for HTTPError {
    fn from(value: RequestError) -> Self { HTTPError::HTTPRequestError(value) }
}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { HTTPError::HTTPResponseError(value) }
}
