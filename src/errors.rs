use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors from the Cal.com client. Upstream failures keep the response
/// status and body so callers see what the API actually said.
#[derive(Debug, thiserror::Error)]
pub enum CalError {
    #[error("CAL_API_KEY is not set")]
    MissingApiKey,

    #[error("cal.com API error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("cal.com request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("completion API error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid request: {0}")]
    BadRequest(String),

    #[error("malformed function call: {0}")]
    MalformedIntent(String),

    #[error(transparent)]
    Cal(#[from] CalError),

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedIntent(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Cal(CalError::MissingApiKey)
            | AppError::Completion(CompletionError::MissingApiKey) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Cal(_) | AppError::Completion(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), axum::Json(body)).into_response()
    }
}
