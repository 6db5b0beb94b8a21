use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::BookingStatus;

/// A function call the model asked us to execute. `arguments` is usually a
/// JSON object but may be a raw string when the model emitted something
/// that doesn't parse as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListBookingsArgs {
    pub user_email: Option<String>,
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingArgs {
    pub start_time: String,
    pub customer_name: String,
    pub customer_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CancelBookingArgs {
    pub booking_id: String,
}
