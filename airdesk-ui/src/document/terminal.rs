use std::io::{self, Write};
use std::sync::Mutex;
use airdesk_core::{Alignment, ChatMessage, CoreResult, FlightCard, FlightOption};
use super::{BookingForm, Document, ElementId, MemoryDocument, PanelVisibility};

const LOG_WIDTH: usize = 72;

/// Page rendered as text.
///
/// Field state lives in a `MemoryDocument`; every visible change is echoed to
/// the writer, tagged with the element it happened in.
pub struct TerminalDocument<W: Write + Send = io::Stdout> {
    page: MemoryDocument,
    out: Mutex<W>,
}

impl TerminalDocument<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalDocument<W> {
    pub fn new(out: W) -> Self {
        Self {
            page: MemoryDocument::new(),
            out: Mutex::new(out),
        }
    }

    pub fn page(&self) -> &MemoryDocument {
        &self.page
    }

    pub fn set_passenger_name(&self, name: &str) {
        self.page.set_passenger_name(name);
        self.emit(ElementId::PassengerName, name);
    }

    pub fn select_flight(&self, flight_id: &str) -> CoreResult<()> {
        self.page.select_flight(flight_id)?;
        self.emit(ElementId::Flight, &format!("selected {}", flight_id));
        Ok(())
    }

    pub fn set_chat_input(&self, text: &str) {
        self.page.set_chat_input(text);
    }

    /// Free-form line that belongs to no element (help text, prompts)
    pub fn note(&self, text: &str) {
        self.write_line(text);
    }

    fn emit(&self, element: ElementId, text: &str) {
        self.write_line(&format!("[#{}] {}", element.as_str(), text));
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            tracing::warn!("Terminal write failed: {}", e);
        }
    }
}

impl TerminalDocument<Vec<u8>> {
    /// Everything written so far
    pub fn output(&self) -> String {
        let out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        String::from_utf8_lossy(&out).into_owned()
    }
}

impl<W: Write + Send> Document for TerminalDocument<W> {
    fn append_flight_option(&self, option: FlightOption) {
        self.emit(ElementId::Flight, &format!("({}) {}", option.value, option.label));
        self.page.append_flight_option(option);
    }

    fn append_flight_card(&self, card: FlightCard) {
        self.emit(ElementId::FlightList, &format!("{} | {}", card.title, card.body));
        self.page.append_flight_card(card);
    }

    fn booking_form(&self) -> BookingForm {
        self.page.booking_form()
    }

    fn reset_booking_form(&self) {
        self.page.reset_booking_form();
        self.emit(ElementId::BookingForm, "reset");
    }

    fn alert(&self, message: &str) {
        self.page.alert(message);
        self.write_line(&format!("[alert] {}", message));
    }

    fn chat_panel(&self) -> PanelVisibility {
        self.page.chat_panel()
    }

    fn set_chat_panel(&self, visibility: PanelVisibility) {
        self.page.set_chat_panel(visibility);
        let state = match visibility {
            PanelVisibility::Visible => "shown",
            PanelVisibility::Hidden => "hidden",
        };
        self.emit(ElementId::Chatbot, state);
    }

    fn chat_input(&self) -> String {
        self.page.chat_input()
    }

    fn clear_chat_input(&self) {
        self.page.clear_chat_input();
    }

    fn append_chat_message(&self, message: ChatMessage) {
        let line = match message.style().align {
            Alignment::Start => message.to_string(),
            Alignment::End => format!("{:>width$}", message.to_string(), width = LOG_WIDTH),
        };
        self.page.append_chat_message(message);
        self.write_line(&line);
    }

    fn scroll_chat_to_latest(&self) {
        // Newest line is always the last one printed
        self.page.scroll_chat_to_latest();
    }
}
