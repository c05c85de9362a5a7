pub use reqwest;

pub mod client_config;
pub mod common;
pub mod http_client;
pub mod http_request;
pub mod http_response;
pub mod interceptor;
