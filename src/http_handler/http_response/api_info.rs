/// Response type for the backend root endpoint.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiInfoResponse {
    pub message: String,
    pub version: String,
    /// Path of the interactive API documentation.
    pub docs: String,
    pub redoc: String,
    /// Path of the health endpoint.
    pub health: String,
}
