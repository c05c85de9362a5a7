use super::generate_post::GeneratePostResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /api/v1/generate-post endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct GeneratePostRequest<'a> {
    /// Topic the post should be written about, passed through verbatim.
    pub(crate) topic: &'a str,
}

impl JSONBodyHTTPRequestType for GeneratePostRequest<'_> {
    /// The type of the json body.
    type Body = Self;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for GeneratePostRequest<'_> {
    /// Type of the expected response.
    type Response = GeneratePostResponse;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str { "/api/v1/generate-post" }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
