use std::sync::Arc;
use futures_util::FutureExt;
use airdesk_core::BookingRequest;
use tracing::{error, info};
use crate::controller::PendingRequest;
use crate::document::Document;
use crate::state::AppState;

/// Prefix of the alert shown when a booking cannot be completed
pub const BOOKING_ERROR_PREFIX: &str = "Error booking flight: ";

/// Handle a submit of `booking-form`.
///
/// The fields are read now, exactly as they are; the returned request posts
/// them once and reports the outcome through an alert.
pub fn submit_booking(state: &AppState, document: &Arc<dyn Document>) -> PendingRequest {
    let form = document.booking_form();
    let request = BookingRequest::new(form.passenger_name, form.flight_id);
    info!("Submitting booking for flight {:?}", request.flight_id);

    let gateway = state.bookings.clone();
    let document = document.clone();

    async move {
        match gateway.book(&request).await {
            Ok(confirmation) => {
                info!("Booking accepted for flight {:?}", request.flight_id);
                document.alert(&confirmation.message);
                document.reset_booking_form();
            }
            Err(e) => {
                error!("Booking failed: {}", e);
                document.alert(&format!("{}{}", BOOKING_ERROR_PREFIX, e));
            }
        }
    }
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::BookingForm;
    use crate::test_support::{bound_controller, ScriptedGateway};

    #[tokio::test]
    async fn test_successful_booking_alerts_and_resets() {
        let gateway = Arc::new(ScriptedGateway::ok("Booked!", ""));
        let (controller, doc) = bound_controller(AppState::from_gateway(gateway.clone()));
        doc.set_passenger_name("Ada Lovelace");
        doc.select_flight("2").unwrap();

        submit_booking(controller.state(), controller.document()).await;

        assert_eq!(gateway.booked(), vec![BookingRequest::new("Ada Lovelace", "2")]);
        assert_eq!(doc.alerts(), vec!["Booked!".to_string()]);
        assert_eq!(doc.booking_form(), BookingForm {
            passenger_name: String::new(),
            flight_id: "1".to_string(),
        });
    }

    #[tokio::test]
    async fn test_failed_booking_keeps_form() {
        let gateway = Arc::new(ScriptedGateway::failing("connection refused"));
        let (controller, doc) = bound_controller(AppState::from_gateway(gateway.clone()));
        doc.set_passenger_name("Ada Lovelace");
        doc.select_flight("3").unwrap();

        submit_booking(controller.state(), controller.document()).await;

        assert_eq!(gateway.booked().len(), 1);
        assert_eq!(doc.alerts(), vec!["Error booking flight: connection refused".to_string()]);
        assert_eq!(doc.booking_form().passenger_name, "Ada Lovelace");
        assert_eq!(doc.booking_form().flight_id, "3");
    }

    #[tokio::test]
    async fn test_empty_fields_are_sent_unvalidated() {
        let gateway = Arc::new(ScriptedGateway::ok("Missing name", ""));
        let (controller, _doc) = bound_controller(AppState::from_gateway(gateway.clone()));

        submit_booking(controller.state(), controller.document()).await;

        assert_eq!(gateway.booked(), vec![BookingRequest::new("", "1")]);
    }

    #[tokio::test]
    async fn test_fields_are_read_at_submit_time() {
        let gateway = Arc::new(ScriptedGateway::ok("Booked!", ""));
        let (controller, doc) = bound_controller(AppState::from_gateway(gateway.clone()));
        doc.set_passenger_name("First");

        let pending = submit_booking(controller.state(), controller.document());
        doc.set_passenger_name("Second");
        pending.await;

        assert_eq!(gateway.booked()[0].passenger_name, "First");
    }
}
