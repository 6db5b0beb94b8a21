use serde_json::{json, Value};

/// The fixed function declarations sent with every /chat completion.
/// Kept in one place so the chat handler and tests share the same set.
pub fn function_declarations() -> Vec<Value> {
    vec![
        json!({
            "name": "list_bookings",
            "description": "List bookings for a user by email",
            "parameters": {
                "type": "object",
                "properties": {
                    "user_email": { "type": "string", "format": "email" },
                    "status": {
                        "type": "string",
                        "enum": ["upcoming", "recurring", "past", "cancelled", "unconfirmed"]
                    },
                },
                "required": [],
            },
        }),
        json!({
            "name": "create_booking",
            "description": "Create a new booking using cal.com",
            "parameters": {
                "type": "object",
                "properties": {
                    "start_time": { "type": "string" },
                    "customer_name": { "type": "string" },
                    "customer_email": { "type": "string", "format": "email" },
                },
                "required": ["start_time", "customer_name", "customer_email"],
            },
        }),
        json!({
            "name": "cancel_booking",
            "description": "Cancel an existing booking by booking id",
            "parameters": {
                "type": "object",
                "properties": {
                    "booking_id": { "type": "string" },
                },
                "required": ["booking_id"],
            },
        }),
    ]
}
