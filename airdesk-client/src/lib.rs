pub mod app_config;
pub mod http;

pub use app_config::Config;
pub use http::{ClientError, HttpGateway};
