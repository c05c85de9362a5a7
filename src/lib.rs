#![allow(clippy::module_name_repetitions)]
pub mod api;
pub mod http_handler;
pub mod logger;

pub use api::{api_info, generate_linkedin_post, health_check};
pub use http_handler::client_config::ClientConfig;
pub use http_handler::common::HTTPError;
pub use http_handler::http_client::HTTPClient;
