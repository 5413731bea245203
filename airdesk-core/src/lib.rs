pub mod booking;
pub mod chat;
pub mod flight;
pub mod gateway;

pub use booking::{BookingConfirmation, BookingRequest};
pub use chat::{Alignment, BubbleStyle, ChatMessage, ChatReply, ChatRequest, Sender, UNREACHABLE_REPLY};
pub use flight::{Flight, FlightCard, FlightOption};
pub use gateway::{BookingGateway, ChatGateway, GatewayError};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown flight: {0}")]
    UnknownFlight(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
