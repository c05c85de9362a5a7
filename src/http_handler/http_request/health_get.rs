use super::health::HealthResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /api/v1/health endpoint.
#[derive(Debug)]
pub(crate) struct HealthRequest {}

impl NoBodyHTTPRequestType for HealthRequest {}

impl HTTPRequestType for HealthRequest {
    type Response = HealthResponse;
    fn endpoint(&self) -> &'static str { "/api/v1/health" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
