use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::ChatRequest;
use crate::services::completion::extract::extract_function_call;
use crate::services::completion::Message;
use crate::services::dispatch::{dispatch, Dispatch};
use crate::services::functions::function_declarations;
use crate::state::AppState;

const SYSTEM_PROMPT: &str = "You are an assistant that helps users book, list and \
cancel events using Cal.com. Ask clarifying questions if needed.";

/// Accept a user message and use model function calling to interact with
/// the scheduling API: complete with the function declarations, extract a
/// call if the model issued one, dispatch it, and relay the result. A
/// plain-text reply comes back as `{"assistant": ...}`.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<Value>, AppError> {
    req.validate()?;

    let messages = [
        Message::system(SYSTEM_PROMPT),
        Message::user(format!("{} (user email: {})", req.message, req.user_email)),
    ];
    let declarations = function_declarations();

    let resp = state
        .llm
        .complete(&messages, Some(declarations.as_slice()))
        .await?;

    if let Some(call) = extract_function_call(&resp) {
        tracing::info!(function = %call.name, "model requested function call");
        let body = match dispatch(
            state.cal.as_ref(),
            &state.config.booking_defaults(),
            call,
        )
        .await?
        {
            Dispatch::Executed {
                function,
                arguments,
                result,
            } => json!({
                "function_called": function,
                "arguments": arguments,
                "result": result,
            }),
            Dispatch::UnknownFunction {
                function,
                arguments,
            } => json!({
                "function_called": function,
                "arguments": arguments,
                "result": { "error": "unknown function" },
            }),
        };
        return Ok(Json(body));
    }

    let assistant = resp
        .choices
        .first()
        .and_then(|c| c.call_message())
        .and_then(|m| m.content.clone())
        .unwrap_or_default();

    Ok(Json(json!({ "assistant": assistant })))
}
