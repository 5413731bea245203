use airdesk_client::app_config::ConfigError;
use airdesk_client::ClientError;

/// Failures that stop the front-end before or outside event handling.
/// Handlers themselves never fail: every request error ends up on the page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("HTTP client error: {0}")]
    Client(#[from] ClientError),
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
