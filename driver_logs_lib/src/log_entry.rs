use serde::{Deserialize, Serialize};

/// A recorded stop belonging to a trip. Created once, never edited.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LogEntry {
    pub id: i64,
    pub trip: i64,
    pub stop_location: String,
    pub driving_hours: f64,
    pub rest_hours: f64,
}

/// POST body for log creation. Hour fields are forwarded as the raw form
/// strings; the external API owns their validation.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LogPayload {
    pub stop_location: String,
    pub driving_hours: String,
    pub rest_hours: String,
    pub trip: i64,
}

/// Form state for the add-log form on the log sheet.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LogDraft {
    pub stop_location: String,
    pub driving_hours: String,
    pub rest_hours: String,
}

impl LogDraft {
    /// All three fields are required; no numeric checks beyond that.
    pub fn is_complete(&self) -> bool {
        !self.stop_location.trim().is_empty()
            && !self.driving_hours.trim().is_empty()
            && !self.rest_hours.trim().is_empty()
    }

    pub fn into_payload(self, trip: i64) -> LogPayload {
        LogPayload {
            stop_location: self.stop_location,
            driving_hours: self.driving_hours,
            rest_hours: self.rest_hours,
            trip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_incomplete() {
        let mut draft = LogDraft::default();
        assert!(!draft.is_complete());

        draft.stop_location = "Flensburg".to_owned();
        draft.driving_hours = "4".to_owned();
        assert!(!draft.is_complete());

        draft.rest_hours = "1".to_owned();
        assert!(draft.is_complete());
    }

    #[test]
    fn payload_carries_trip_reference() {
        let draft = LogDraft {
            stop_location: "Flensburg".to_owned(),
            driving_hours: "4".to_owned(),
            rest_hours: "1".to_owned(),
        };
        let payload = draft.into_payload(9);
        assert_eq!(payload.trip, 9);
        assert_eq!(
            serde_json::to_value(&payload).unwrap()["driving_hours"],
            "4"
        );
    }
}
