use serde::{Deserialize, Serialize};

/// Body of `POST /book`. Both fields are sent exactly as read from the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub passenger_name: String,
    pub flight_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Empty when the server's JSON carries no `message`
    #[serde(default)]
    pub message: String,
}

impl BookingRequest {
    pub fn new(passenger_name: impl Into<String>, flight_id: impl Into<String>) -> Self {
        Self {
            passenger_name: passenger_name.into(),
            flight_id: flight_id.into(),
        }
    }
}
