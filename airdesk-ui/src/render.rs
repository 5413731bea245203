use tracing::debug;
use crate::document::Document;
use crate::state::AppState;

/// Fill the flight selector and the card list, in seed order
pub fn render_flights(state: &AppState, document: &dyn Document) -> usize {
    for flight in state.flights.iter() {
        document.append_flight_option(flight.option());
        document.append_flight_card(flight.card());
    }
    debug!("Rendered {} flights", state.flights.len());
    state.flights.len()
}
