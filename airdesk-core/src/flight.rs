use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub id: u32,
    pub name: String,
    pub destination: String,
}

/// Selector entry rendered into the `flight` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightOption {
    pub value: String,
    pub label: String,
}

/// Card rendered into the `flight-list` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightCard {
    pub title: String,
    pub body: String,
}

impl Flight {
    pub fn new(id: u32, name: &str, destination: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            destination: destination.to_string(),
        }
    }

    /// The fixed flight list shown on page load
    pub fn seed() -> Vec<Flight> {
        vec![
            Flight::new(1, "Flight A", "New York"),
            Flight::new(2, "Flight B", "London"),
            Flight::new(3, "Flight C", "Dubai"),
        ]
    }

    pub fn option(&self) -> FlightOption {
        FlightOption {
            value: self.id.to_string(),
            label: format!("{} - {}", self.name, self.destination),
        }
    }

    pub fn card(&self) -> FlightCard {
        FlightCard {
            title: self.name.clone(),
            body: format!("Destination: {}", self.destination),
        }
    }
}
