use std::sync::{Mutex, MutexGuard};
use airdesk_core::{ChatMessage, CoreError, CoreResult, FlightCard, FlightOption};
use super::{BookingForm, Document, PanelVisibility};

#[derive(Debug, Default)]
struct Page {
    options: Vec<FlightOption>,
    cards: Vec<FlightCard>,
    passenger_name: String,
    selected_flight: String,
    alerts: Vec<String>,
    chat_panel: PanelVisibility,
    chat_input: String,
    messages: Vec<ChatMessage>,
    // Number of messages above the bottom edge of the log
    scroll_position: usize,
}

/// Page held entirely in memory.
///
/// Mirrors browser behavior where the controller depends on it: the first
/// option appended becomes the selected one, and a form reset re-selects it.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    page: Mutex<Page>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    fn page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_passenger_name(&self, name: &str) {
        self.page().passenger_name = name.to_string();
    }

    /// Select the option whose value is `flight_id`
    pub fn select_flight(&self, flight_id: &str) -> CoreResult<()> {
        let mut page = self.page();
        if !page.options.iter().any(|o| o.value == flight_id) {
            return Err(CoreError::UnknownFlight(flight_id.to_string()));
        }
        page.selected_flight = flight_id.to_string();
        Ok(())
    }

    pub fn set_chat_input(&self, text: &str) {
        self.page().chat_input = text.to_string();
    }

    pub fn options(&self) -> Vec<FlightOption> {
        self.page().options.clone()
    }

    pub fn cards(&self) -> Vec<FlightCard> {
        self.page().cards.clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.page().alerts.clone()
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.page().messages.clone()
    }

    /// Chat log rendered as `sender: text` lines
    pub fn transcript(&self) -> Vec<String> {
        self.page().messages.iter().map(ToString::to_string).collect()
    }

    pub fn is_scrolled_to_latest(&self) -> bool {
        let page = self.page();
        page.scroll_position == page.messages.len()
    }
}

impl Document for MemoryDocument {
    fn append_flight_option(&self, option: FlightOption) {
        let mut page = self.page();
        if page.options.is_empty() {
            page.selected_flight = option.value.clone();
        }
        page.options.push(option);
    }

    fn append_flight_card(&self, card: FlightCard) {
        self.page().cards.push(card);
    }

    fn booking_form(&self) -> BookingForm {
        let page = self.page();
        BookingForm {
            passenger_name: page.passenger_name.clone(),
            flight_id: page.selected_flight.clone(),
        }
    }

    fn reset_booking_form(&self) {
        let mut page = self.page();
        page.passenger_name.clear();
        page.selected_flight = page
            .options
            .first()
            .map(|o| o.value.clone())
            .unwrap_or_default();
    }

    fn alert(&self, message: &str) {
        self.page().alerts.push(message.to_string());
    }

    fn chat_panel(&self) -> PanelVisibility {
        self.page().chat_panel
    }

    fn set_chat_panel(&self, visibility: PanelVisibility) {
        self.page().chat_panel = visibility;
    }

    fn chat_input(&self) -> String {
        self.page().chat_input.clone()
    }

    fn clear_chat_input(&self) {
        self.page().chat_input.clear();
    }

    fn append_chat_message(&self, message: ChatMessage) {
        self.page().messages.push(message);
    }

    fn scroll_chat_to_latest(&self) {
        let mut page = self.page();
        page.scroll_position = page.messages.len();
    }
}
