use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use futures_util::future::BoxFuture;
use tracing::{debug, info};
use crate::booking::submit_booking;
use crate::chat::{send_chat_message, toggle_chat_panel};
use crate::document::Document;
use crate::render::render_flights;
use crate::state::AppState;

/// The single HTTP call a handler leaves behind. Resolves once; the caller
/// decides where to drive it.
pub type PendingRequest = BoxFuture<'static, ()>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// `submit` on `booking-form`
    SubmitBooking,
    /// click on `chatbot-toggle`
    ToggleChat,
    /// click on `chatbot-send`
    ClickSend,
    /// key press inside `chatbot-text`
    KeyPress(String),
}

#[derive(Clone)]
pub struct Controller {
    state: AppState,
    document: Arc<dyn Document>,
    bound: Arc<AtomicBool>,
}

impl Controller {
    pub fn new(state: AppState, document: Arc<dyn Document>) -> Self {
        Self {
            state,
            document,
            bound: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn document(&self) -> &Arc<dyn Document> {
        &self.document
    }

    pub fn is_bound(&self) -> bool {
        self.bound.load(Ordering::SeqCst)
    }

    /// Render the page and start accepting events.
    ///
    /// Only the first call does anything; returns whether this call bound.
    pub fn init(&self) -> bool {
        if self.bound.swap(true, Ordering::SeqCst) {
            debug!("Controller already bound");
            return false;
        }
        let rendered = render_flights(&self.state, self.document.as_ref());
        info!("Controller bound, {} flights on the page", rendered);
        true
    }

    /// Run the synchronous part of the handler for `event`.
    ///
    /// Returns the request the handler issued, if any. Each request is
    /// independent of the others: nothing orders, deduplicates or cancels them.
    pub fn dispatch(&self, event: UiEvent) -> Option<PendingRequest> {
        if !self.is_bound() {
            debug!("Dropping {:?}, controller not bound", event);
            return None;
        }

        match event {
            UiEvent::SubmitBooking => Some(submit_booking(&self.state, &self.document)),
            UiEvent::ToggleChat => {
                toggle_chat_panel(self.document.as_ref());
                None
            }
            UiEvent::ClickSend => send_chat_message(&self.state, &self.document),
            UiEvent::KeyPress(key) if key == "Enter" => {
                send_chat_message(&self.state, &self.document)
            }
            UiEvent::KeyPress(_) => None,
        }
    }
}
