use super::api_info::ApiInfoResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub(crate) struct ApiInfoRequest {}

impl NoBodyHTTPRequestType for ApiInfoRequest {}

impl HTTPRequestType for ApiInfoRequest {
    type Response = ApiInfoResponse;
    fn endpoint(&self) -> &'static str {
        "/"
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
}
