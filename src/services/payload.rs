use serde::Serialize;

use crate::config::BookingDefaults;

/// Body for POST /v2/bookings. Shared by the /chat function-calling flow
/// and the /book endpoint so the shape lives in a single place.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub start: String,
    pub attendee: Attendee,
    pub event_type_id: i64,
    pub event_type_slug: String,
    pub location: Location,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub name: String,
    pub email: String,
    pub time_zone: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Location {
    #[serde(rename = "type")]
    pub kind: String,
    pub integration: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Metadata {
    pub note: String,
}

/// Build a create-booking payload. Pure: identical inputs produce an
/// identical payload. `start` is forwarded as-is; malformed timestamps are
/// rejected by the upstream service, not here.
pub fn build_booking_payload(
    start: &str,
    customer_name: &str,
    customer_email: &str,
    event_type_id: Option<i64>,
    note: &str,
    defaults: &BookingDefaults,
) -> BookingPayload {
    BookingPayload {
        start: start.to_string(),
        attendee: Attendee {
            name: customer_name.to_string(),
            email: customer_email.to_string(),
            time_zone: defaults.time_zone.clone(),
            language: defaults.language.clone(),
        },
        event_type_id: event_type_id.unwrap_or(defaults.event_type_id),
        event_type_slug: defaults.event_type_slug.clone(),
        location: Location {
            kind: "integration".to_string(),
            integration: "google-meet".to_string(),
        },
        metadata: Metadata {
            note: note.to_string(),
        },
    }
}
