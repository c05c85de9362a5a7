/// Response type for the /api/v1/health endpoint.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    /// `"healthy"` while the backend is up.
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    /// ISO 8601 timestamp of the check.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool { self.status == "healthy" }
}
