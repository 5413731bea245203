use std::sync::Arc;
use airdesk_client::{Config, HttpGateway};

pub mod booking;
pub mod chat;
pub mod controller;
pub mod document;
pub mod error;
pub mod host;
pub mod render;
pub mod state;

#[cfg(test)]
mod test_support;

pub use controller::{Controller, PendingRequest, UiEvent};
pub use document::{Document, MemoryDocument, TerminalDocument};
pub use error::AppError;
pub use state::AppState;

/// Build the controller for `document` and bind it once
pub fn app(state: AppState, document: Arc<dyn Document>) -> Controller {
    let controller = Controller::new(state, document);
    controller.init();
    controller
}

/// State backed by the HTTP endpoints named in `config`
pub fn state_from_config(config: &Config) -> Result<AppState, AppError> {
    let gateway = HttpGateway::from_config(config)?;
    Ok(AppState::from_gateway(Arc::new(gateway)))
}
