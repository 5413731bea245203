use std::sync::Arc;
use airdesk_core::{BookingGateway, ChatGateway, Flight};

/// Everything the handlers read besides the page itself
#[derive(Clone)]
pub struct AppState {
    pub flights: Arc<[Flight]>,
    pub bookings: Arc<dyn BookingGateway>,
    pub chat: Arc<dyn ChatGateway>,
}

impl AppState {
    pub fn new(bookings: Arc<dyn BookingGateway>, chat: Arc<dyn ChatGateway>) -> Self {
        Self {
            flights: Flight::seed().into(),
            bookings,
            chat,
        }
    }

    /// One backend serving both endpoints
    pub fn from_gateway<G>(gateway: Arc<G>) -> Self
    where
        G: BookingGateway + ChatGateway + 'static,
    {
        Self::new(gateway.clone(), gateway)
    }
}
