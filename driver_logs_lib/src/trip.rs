use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A planned delivery as stored by the external trip API. Read-only on the
/// client after creation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Trip {
    pub id: i64,
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_used: f64,
}

/// POST body for trip creation, produced only by a successful
/// [`TripDraft::validate`].
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TripPayload {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_used: f64,
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Form state for the add-trip page. `current_cycle_used` stays a raw string
/// until submission so the user sees exactly what they typed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TripDraft {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_used: String,
}

impl TripDraft {
    /// Local check performed before any network call: the cycle hours must
    /// parse as a non-negative number.
    pub fn validate(&self) -> Result<TripPayload, ValidationError> {
        let Ok(hours) = self.current_cycle_used.trim().parse::<f64>() else {
            return Err(ValidationError(
                "Current Cycle Used must be a valid positive number.".to_owned(),
            ));
        };

        if hours < 0.0 || !hours.is_finite() {
            return Err(ValidationError(
                "Current Cycle Used must be a valid positive number.".to_owned(),
            ));
        }

        Ok(TripPayload {
            current_location: self.current_location.clone(),
            pickup_location: self.pickup_location.clone(),
            dropoff_location: self.dropoff_location.clone(),
            current_cycle_used: hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(cycle: &str) -> TripDraft {
        TripDraft {
            current_location: "Aarhus C".to_owned(),
            pickup_location: "Copenhagen".to_owned(),
            dropoff_location: "Hamburg".to_owned(),
            current_cycle_used: cycle.to_owned(),
        }
    }

    #[test]
    fn negative_cycle_is_rejected() {
        assert!(draft("-1").validate().is_err());
    }

    #[test]
    fn non_numeric_cycle_is_rejected() {
        assert!(draft("abc").validate().is_err());
        assert!(draft("").validate().is_err());
        assert!(draft("NaN").validate().is_err());
    }

    #[test]
    fn valid_draft_produces_payload() {
        let payload = draft("12.5").validate().unwrap();
        assert_eq!(payload.current_cycle_used, 12.5);
        assert_eq!(payload.pickup_location, "Copenhagen");
    }

    #[test]
    fn zero_hours_are_allowed() {
        assert!(draft("0").validate().is_ok());
    }

    #[test]
    fn trip_deserializes_from_api_shape() {
        let json = r#"{"id":3,"current_location":"A","pickup_location":"B",
                       "dropoff_location":"C","current_cycle_used":7}"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.id, 3);
        assert_eq!(trip.current_cycle_used, 7.0);
    }
}
