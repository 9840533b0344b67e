use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Categorical field names
// ---------------------------------------------------------------------------

pub const GENDER: &str = "Gender";
pub const CUSTOMER_TYPE: &str = "Customer Type";
pub const TYPE_OF_TRAVEL: &str = "Type of Travel";
pub const CLASS: &str = "Class";

/// Fields encoded through a trained label encoder.
pub const LABEL_ENCODED_FIELDS: [&str; 3] = [GENDER, CUSTOMER_TYPE, TYPE_OF_TRAVEL];

// ---------------------------------------------------------------------------
// TravelClass
// ---------------------------------------------------------------------------

/// Cabin class. `Business` is the reference level of the trained dummy
/// encoding and has no indicator column of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelClass {
    Business,
    Eco,
    #[serde(rename = "Eco Plus")]
    EcoPlus,
}

impl TravelClass {
    pub const ALL: [TravelClass; 3] = [TravelClass::Eco, TravelClass::EcoPlus, TravelClass::Business];

    pub const ECO_COLUMN: &'static str = "Class_Eco";
    pub const ECO_PLUS_COLUMN: &'static str = "Class_Eco Plus";

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelClass::Business => "Business",
            TravelClass::Eco => "Eco",
            TravelClass::EcoPlus => "Eco Plus",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Business" => Some(TravelClass::Business),
            "Eco" => Some(TravelClass::Eco),
            "Eco Plus" => Some(TravelClass::EcoPlus),
            _ => None,
        }
    }

    /// `(Class_Eco, Class_Eco Plus)` indicator values.
    pub fn indicators(&self) -> [(&'static str, f64); 2] {
        let (eco, eco_plus) = match self {
            TravelClass::Business => (0.0, 0.0),
            TravelClass::Eco => (1.0, 0.0),
            TravelClass::EcoPlus => (0.0, 1.0),
        };
        [(Self::ECO_COLUMN, eco), (Self::ECO_PLUS_COLUMN, eco_plus)]
    }
}

// ---------------------------------------------------------------------------
// Service ratings
// ---------------------------------------------------------------------------

/// The fourteen 0–5 service ratings, keyed on the wire by their training
/// column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRatings {
    #[serde(rename = "Inflight wifi service")]
    pub inflight_wifi: u8,
    #[serde(rename = "Cleanliness")]
    pub cleanliness: u8,
    #[serde(rename = "Online boarding")]
    pub online_boarding: u8,
    #[serde(rename = "Inflight entertainment")]
    pub inflight_entertainment: u8,
    #[serde(rename = "Gate location")]
    pub gate_location: u8,
    #[serde(rename = "Food and drink")]
    pub food_and_drink: u8,
    #[serde(rename = "Seat comfort")]
    pub seat_comfort: u8,
    #[serde(rename = "On-board service")]
    pub on_board_service: u8,
    #[serde(rename = "Leg room service")]
    pub leg_room_service: u8,
    #[serde(rename = "Baggage handling")]
    pub baggage_handling: u8,
    #[serde(rename = "Checkin service")]
    pub checkin_service: u8,
    #[serde(rename = "Inflight service")]
    pub inflight_service: u8,
    #[serde(rename = "Ease of Online booking")]
    pub ease_of_online_booking: u8,
    #[serde(rename = "Departure/Arrival time convenient")]
    pub departure_arrival_convenient: u8,
}

impl ServiceRatings {
    pub const MAX: u8 = 5;

    /// Every rating at the same score.
    pub fn uniform(score: u8) -> Self {
        Self {
            inflight_wifi: score,
            cleanliness: score,
            online_boarding: score,
            inflight_entertainment: score,
            gate_location: score,
            food_and_drink: score,
            seat_comfort: score,
            on_board_service: score,
            leg_room_service: score,
            baggage_handling: score,
            checkin_service: score,
            inflight_service: score,
            ease_of_online_booking: score,
            departure_arrival_convenient: score,
        }
    }

    pub fn columns(&self) -> [(&'static str, u8); 14] {
        [
            ("Inflight wifi service", self.inflight_wifi),
            ("Cleanliness", self.cleanliness),
            ("Online boarding", self.online_boarding),
            ("Inflight entertainment", self.inflight_entertainment),
            ("Gate location", self.gate_location),
            ("Food and drink", self.food_and_drink),
            ("Seat comfort", self.seat_comfort),
            ("On-board service", self.on_board_service),
            ("Leg room service", self.leg_room_service),
            ("Baggage handling", self.baggage_handling),
            ("Checkin service", self.checkin_service),
            ("Inflight service", self.inflight_service),
            ("Ease of Online booking", self.ease_of_online_booking),
            ("Departure/Arrival time convenient", self.departure_arrival_convenient),
        ]
    }
}

impl Default for ServiceRatings {
    fn default() -> Self {
        Self {
            cleanliness: 4,
            online_boarding: 4,
            ..Self::uniform(3)
        }
    }
}

// ---------------------------------------------------------------------------
// PassengerInput
// ---------------------------------------------------------------------------

/// One submission's raw field values.
///
/// Categorical values stay as strings here: whether a value is known is
/// decided by the trained encoders, not by deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerInput {
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Customer Type")]
    pub customer_type: String,
    #[serde(rename = "Type of Travel")]
    pub type_of_travel: String,
    #[serde(rename = "Class")]
    pub class: String,

    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "Flight Distance")]
    pub flight_distance: f64,
    #[serde(rename = "Departure Delay in Minutes")]
    pub departure_delay: f64,
    #[serde(rename = "Arrival Delay in Minutes")]
    pub arrival_delay: f64,

    #[serde(flatten)]
    pub ratings: ServiceRatings,
}

impl PassengerInput {
    /// Raw value of a label-encoded field.
    pub fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            GENDER => Some(&self.gender),
            CUSTOMER_TYPE => Some(&self.customer_type),
            TYPE_OF_TRAVEL => Some(&self.type_of_travel),
            CLASS => Some(&self.class),
            _ => None,
        }
    }

    pub fn numeric_columns(&self) -> [(&'static str, f64); 4] {
        [
            ("Age", self.age),
            ("Flight Distance", self.flight_distance),
            ("Departure Delay in Minutes", self.departure_delay),
            ("Arrival Delay in Minutes", self.arrival_delay),
        ]
    }

    /// Fields whose values fall outside the form limits, as
    /// `"<field> must be within [lo, hi]"` messages.
    pub fn out_of_range(&self) -> Vec<String> {
        const LIMITS: [(&str, f64, f64); 4] = [
            ("Age", 7.0, 85.0),
            ("Flight Distance", 30.0, 5000.0),
            ("Departure Delay in Minutes", 0.0, 500.0),
            ("Arrival Delay in Minutes", 0.0, 500.0),
        ];

        let mut problems = Vec::new();
        for ((name, value), (_, lo, hi)) in self.numeric_columns().into_iter().zip(LIMITS) {
            if !(lo..=hi).contains(&value) {
                problems.push(format!("{name} must be within [{lo}, {hi}], got {value}"));
            }
        }
        for (name, score) in self.ratings.columns() {
            if score > ServiceRatings::MAX {
                problems.push(format!(
                    "{name} must be within [0, {}], got {score}",
                    ServiceRatings::MAX
                ));
            }
        }
        problems
    }
}

impl Default for PassengerInput {
    fn default() -> Self {
        Self {
            gender: "Male".into(),
            customer_type: "Loyal Customer".into(),
            type_of_travel: "Personal Travel".into(),
            class: TravelClass::Eco.as_str().into(),
            age: 30.0,
            flight_distance: 500.0,
            departure_delay: 5.0,
            arrival_delay: 10.0,
            ratings: ServiceRatings::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
