//! The operations the frontend performs against the post generator backend.
//!
//! Each function issues exactly one request through the shared
//! [`HTTPClient`] and hands the outcome back untouched.

use crate::http_handler::common::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::{
    api_info_get::ApiInfoRequest,
    generate_post_post::GeneratePostRequest,
    health_get::HealthRequest,
    request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
};
use crate::http_handler::http_response::{
    api_info::ApiInfoResponse, generate_post::GeneratePostResponse, health::HealthResponse,
    response_common::ApiResponse,
};

/// Asks the backend to write a LinkedIn post about `topic`.
///
/// `topic` is sent verbatim as `{"topic": topic}`; empty or oversized topics
/// are left for the backend to reject.
///
/// # Errors
/// Returns the transport or server failure as reported by the client.
pub async fn generate_linkedin_post(
    client: &HTTPClient,
    topic: &str,
) -> Result<ApiResponse<GeneratePostResponse>, HTTPError> {
    GeneratePostRequest { topic }.send_request(client).await
}

/// Queries the backend health endpoint.
///
/// # Errors
/// Returns the transport or server failure as reported by the client.
pub async fn health_check(client: &HTTPClient) -> Result<ApiResponse<HealthResponse>, HTTPError> {
    HealthRequest {}.send_request(client).await
}

/// Fetches the backend's self description from its root endpoint.
///
/// # Errors
/// Returns the transport or server failure as reported by the client.
pub async fn api_info(client: &HTTPClient) -> Result<ApiResponse<ApiInfoResponse>, HTTPError> {
    ApiInfoRequest {}.send_request(client).await
}
