pub mod api_info;
pub mod generate_post;
pub mod health;
pub mod response_common;
