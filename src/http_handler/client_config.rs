use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "API_URL";
/// Backend address used when `API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Post generation involves a slow downstream model call, hence the generous timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Immutable settings an [`HTTPClient`](super::http_client::HTTPClient) is built from.
///
/// A `ClientConfig` is resolved once at startup and handed to the client
/// constructor; nothing in it changes afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host prefix for every endpoint path, without a trailing `/`.
    base_url: String,
    /// Total time budget for a single request, including reading the body.
    timeout: Duration,
    /// Headers sent with every request.
    headers: HeaderMap,
}

impl ClientConfig {
    /// Creates a configuration for `base_url` with the default timeout and
    /// a `Content-Type: application/json` header.
    pub fn new(base_url: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self { base_url: base_url.trim_end_matches('/').to_string(), timeout: DEFAULT_TIMEOUT, headers }
    }

    /// Resolves the configuration from the process environment.
    pub fn from_env() -> Self { Self::from_lookup(|key| std::env::var(key).ok()) }

    /// Resolves the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where F: Fn(&str) -> Option<String> {
        let base_var = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty());
        Self::new(base_var.as_deref().map_or(DEFAULT_BASE_URL, str::trim))
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn base_url(&self) -> &str { self.base_url.as_str() }
    pub fn timeout(&self) -> Duration { self.timeout }
    pub fn headers(&self) -> &HeaderMap { &self.headers }

    /// Joins an endpoint path onto the base URL.
    pub fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self { Self::new(DEFAULT_BASE_URL) }
}
