use super::client_config::ClientConfig;
use super::common::HTTPError;
use super::http_request::request_common::{HTTPRequestMethod, RequestError};
use super::http_response::response_common::{ApiResponse, HTTPResponse, ResponseError};
use super::interceptor::{Interceptor, OutgoingRequest, RequestLogger, ResponseLogger};
use crate::event;
use std::sync::Arc;

/// A wrapper around `reqwest::Client` preconfigured with a base URL,
/// default headers, a fixed timeout and an interceptor chain.
///
/// The client holds no mutable state, so one instance built at startup can
/// be shared by reference or `Arc` between any number of concurrent callers.
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Settings the client was built from.
    config: ClientConfig,
    /// Applied in order to requests and responses alike.
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the request and response loggers installed.
    ///
    /// # Errors
    /// Fails if the underlying `reqwest::Client` cannot be built.
    pub fn new(config: ClientConfig) -> Result<HTTPClient, RequestError> {
        Self::with_interceptors(
            config,
            vec![Arc::new(RequestLogger), Arc::new(ResponseLogger)],
        )
    }

    /// Constructs a new `HTTPClient` with an explicit interceptor chain.
    ///
    /// # Errors
    /// Fails if the underlying `reqwest::Client` cannot be built.
    pub fn with_interceptors(
        config: ClientConfig,
        interceptors: Vec<Arc<dyn Interceptor>>,
    ) -> Result<HTTPClient, RequestError> {
        let client = reqwest::Client::builder()
            .default_headers(config.headers().clone())
            .timeout(config.timeout())
            .build()?;
        event!(
            "HTTP client for {} (timeout {:?}, {} interceptors)",
            config.base_url(),
            config.timeout(),
            interceptors.len()
        );
        Ok(HTTPClient { client, config, interceptors })
    }

    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.config.base_url() }

    /// Sends one request through the interceptor chain.
    ///
    /// Non-2xx responses are turned into [`ResponseError::Status`] carrying
    /// the unmodified status and body. No retry is ever attempted.
    pub(crate) async fn send<B, T>(
        &self,
        method: HTTPRequestMethod,
        endpoint: &str,
        header_params: reqwest::header::HeaderMap,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, HTTPError>
    where
        B: serde::Serialize + ?Sized,
    {
        match self.dispatch(method, endpoint, header_params, body).await {
            Ok(response) => {
                let passed = self.interceptors.iter().fold(response, |resp, i| i.on_response(resp));
                Ok(ApiResponse::new(passed))
            }
            Err(err) => Err(self.interceptors.iter().fold(err, |e, i| i.on_error(e))),
        }
    }

    async fn dispatch<B>(
        &self,
        method: HTTPRequestMethod,
        endpoint: &str,
        header_params: reqwest::header::HeaderMap,
        body: Option<&B>,
    ) -> Result<HTTPResponse, HTTPError>
    where
        B: serde::Serialize + ?Sized,
    {
        let mut builder = self
            .client
            .request(method.into(), self.config.url_for(endpoint))
            .headers(header_params);
        if let Some(json) = body {
            builder = builder.json(json);
        }
        let mut outgoing = OutgoingRequest::new(endpoint, builder.build().map_err(RequestError::from)?);
        for interceptor in &self.interceptors {
            outgoing = interceptor.on_request(outgoing)?;
        }

        let response = self.client.execute(outgoing.into_inner()).await.map_err(ResponseError::from)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(ResponseError::from)?.to_vec();
        let path = endpoint.to_string();

        if status.is_success() {
            Ok(HTTPResponse::new(status, headers, body, path))
        } else {
            Err(ResponseError::Status { status, body, path }.into())
        }
    }
}
