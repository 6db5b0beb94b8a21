use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::{BookRequest, CancelRequest, ListRequest, SlotsRequest};
use crate::services::payload::build_booking_payload;
use crate::state::AppState;

pub async fn book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookRequest>,
) -> Result<Json<Value>, AppError> {
    req.validate()?;

    let payload = build_booking_payload(
        &req.start_time,
        &req.customer_name,
        &req.customer_email,
        req.event_type_id,
        req.notes.as_deref().unwrap_or("API booking"),
        &state.config.booking_defaults(),
    );
    let result = state.cal.create_booking(&payload).await?;
    Ok(Json(result))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ListRequest>,
) -> Result<Json<Value>, AppError> {
    req.validate()?;

    let filters = [
        ("attendeeEmail".to_string(), req.user_email),
        ("take".to_string(), "100".to_string()),
    ];
    let result = state.cal.list_bookings(&filters).await?;
    Ok(Json(json!({ "bookings": result })))
}

pub async fn cancel(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CancelRequest>,
) -> Result<Json<Value>, AppError> {
    let result = state
        .cal
        .cancel_booking(&req.booking_id, req.reason.as_deref())
        .await?;
    Ok(Json(result))
}

pub async fn slots(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SlotsRequest>,
) -> Result<Json<Value>, AppError> {
    let query = [
        ("eventTypeId".to_string(), req.event_type_id.to_string()),
        ("start".to_string(), req.start),
        ("end".to_string(), req.end),
    ];
    let result = state.cal.list_slots(&query).await?;
    Ok(Json(result))
}
