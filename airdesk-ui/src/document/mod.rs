//! Typed adapter over the page elements the controller touches.
//!
//! Handlers only ever see a `Document`, so they run the same against the
//! in-memory page used by tests and the terminal front-end.

use airdesk_core::{ChatMessage, FlightCard, FlightOption};

pub mod memory;
pub mod terminal;

pub use memory::MemoryDocument;
pub use terminal::TerminalDocument;

/// Element ids the page must expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Flight,
    FlightList,
    BookingForm,
    PassengerName,
    ChatbotToggle,
    Chatbot,
    ChatbotMessages,
    ChatbotText,
    ChatbotSend,
}

impl ElementId {
    pub const ALL: [ElementId; 9] = [
        ElementId::Flight,
        ElementId::FlightList,
        ElementId::BookingForm,
        ElementId::PassengerName,
        ElementId::ChatbotToggle,
        ElementId::Chatbot,
        ElementId::ChatbotMessages,
        ElementId::ChatbotText,
        ElementId::ChatbotSend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::Flight => "flight",
            ElementId::FlightList => "flight-list",
            ElementId::BookingForm => "booking-form",
            ElementId::PassengerName => "passenger-name",
            ElementId::ChatbotToggle => "chatbot-toggle",
            ElementId::Chatbot => "chatbot",
            ElementId::ChatbotMessages => "chatbot-messages",
            ElementId::ChatbotText => "chatbot-text",
            ElementId::ChatbotSend => "chatbot-send",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    Hidden,
    Visible,
}

impl PanelVisibility {
    pub fn toggled(self) -> Self {
        match self {
            PanelVisibility::Hidden => PanelVisibility::Visible,
            PanelVisibility::Visible => PanelVisibility::Hidden,
        }
    }
}

/// Current values of the booking form fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingForm {
    pub passenger_name: String,
    pub flight_id: String,
}

pub trait Document: Send + Sync {
    /// Append one `<option>` to `flight`
    fn append_flight_option(&self, option: FlightOption);

    /// Append one card to `flight-list`
    fn append_flight_card(&self, card: FlightCard);

    /// Read `passenger-name` and the selected `flight` value
    fn booking_form(&self) -> BookingForm;

    fn reset_booking_form(&self);

    /// Blocking modal message
    fn alert(&self, message: &str);

    fn chat_panel(&self) -> PanelVisibility;

    fn set_chat_panel(&self, visibility: PanelVisibility);

    /// Raw, untrimmed value of `chatbot-text`
    fn chat_input(&self) -> String;

    fn clear_chat_input(&self);

    /// Append one bubble to `chatbot-messages`
    fn append_chat_message(&self, message: ChatMessage);

    fn scroll_chat_to_latest(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ids() {
        let ids: Vec<&str> = ElementId::ALL.iter().map(|id| id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "flight",
                "flight-list",
                "booking-form",
                "passenger-name",
                "chatbot-toggle",
                "chatbot",
                "chatbot-messages",
                "chatbot-text",
                "chatbot-send",
            ]
        );
    }

    #[test]
    fn test_panel_toggle() {
        assert_eq!(PanelVisibility::default(), PanelVisibility::Hidden);
        assert_eq!(PanelVisibility::Hidden.toggled(), PanelVisibility::Visible);
        assert_eq!(PanelVisibility::Visible.toggled().toggled(), PanelVisibility::Visible);
    }
}
