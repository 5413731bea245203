use async_trait::async_trait;
use crate::booking::{BookingConfirmation, BookingRequest};
use crate::chat::{ChatReply, ChatRequest};

pub type GatewayError = Box<dyn std::error::Error + Send + Sync>;

/// Remote service accepting a passenger/flight pair
#[async_trait]
pub trait BookingGateway: Send + Sync {
    /// Submit one booking. Resolves exactly once, never retried.
    async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation, GatewayError>;
}

/// Remote chatbot accepting free text
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, GatewayError>;
}
