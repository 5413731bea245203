use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use airdesk_core::{
    BookingConfirmation, BookingGateway, BookingRequest, ChatGateway, ChatReply, ChatRequest,
    GatewayError,
};
use tokio::sync::oneshot;
use crate::controller::Controller;
use crate::document::{Document, MemoryDocument};
use crate::state::AppState;

/// Answers every call with the same canned result and records what it was sent
pub struct ScriptedGateway {
    booking: Result<String, String>,
    chat: Result<String, String>,
    pub booked: Mutex<Vec<BookingRequest>>,
    pub chatted: Mutex<Vec<ChatRequest>>,
}

impl ScriptedGateway {
    pub fn ok(message: &str, reply: &str) -> Self {
        Self {
            booking: Ok(message.to_string()),
            chat: Ok(reply.to_string()),
            booked: Mutex::new(Vec::new()),
            chatted: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            booking: Err(reason.to_string()),
            chat: Err(reason.to_string()),
            booked: Mutex::new(Vec::new()),
            chatted: Mutex::new(Vec::new()),
        }
    }

    pub fn booked(&self) -> Vec<BookingRequest> {
        self.booked.lock().unwrap().clone()
    }

    pub fn chatted(&self) -> Vec<ChatRequest> {
        self.chatted.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookingGateway for ScriptedGateway {
    async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation, GatewayError> {
        self.booked.lock().unwrap().push(request.clone());
        match &self.booking {
            Ok(message) => Ok(BookingConfirmation { message: message.clone() }),
            Err(reason) => Err(reason.clone().into()),
        }
    }
}

#[async_trait]
impl ChatGateway for ScriptedGateway {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, GatewayError> {
        self.chatted.lock().unwrap().push(request.clone());
        match &self.chat {
            Ok(reply) => Ok(ChatReply { reply: reply.clone(), session_id: None }),
            Err(reason) => Err(reason.clone().into()),
        }
    }
}

/// Chat backend whose replies are released by the test, one message at a time
#[derive(Default)]
pub struct GatedChat {
    pending: Mutex<HashMap<String, oneshot::Receiver<String>>>,
}

impl GatedChat {
    /// Register `message` and return the handle that releases its reply
    pub fn gate(&self, message: &str) -> oneshot::Sender<String> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().insert(message.to_string(), rx);
        tx
    }
}

#[async_trait]
impl ChatGateway for GatedChat {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, GatewayError> {
        let rx = self
            .pending
            .lock()
            .unwrap()
            .remove(&request.message)
            .ok_or("no gate for message")?;
        let reply = rx.await?;
        Ok(ChatReply { reply, session_id: None })
    }
}

/// Controller bound to a fresh in-memory page
pub fn bound_controller(state: AppState) -> (Controller, Arc<MemoryDocument>) {
    let doc = Arc::new(MemoryDocument::new());
    let document: Arc<dyn Document> = doc.clone();
    let controller = Controller::new(state, document);
    controller.init();
    (controller, doc)
}
