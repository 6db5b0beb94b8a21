use serde::{Deserialize, Serialize};

/// Booking status filter accepted by GET /v2/bookings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Recurring,
    Past,
    Cancelled,
    Unconfirmed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "upcoming",
            BookingStatus::Recurring => "recurring",
            BookingStatus::Past => "past",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Unconfirmed => "unconfirmed",
        }
    }
}
