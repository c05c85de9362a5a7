use super::http_response::{api_info, generate_post, health};

pub mod api_info_get;
pub mod generate_post_post;
pub mod health_get;
pub mod request_common;
