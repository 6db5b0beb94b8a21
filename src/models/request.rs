use serde::Deserialize;

use crate::errors::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub user_email: String,
    pub message: String,
}

impl ChatRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_email(&self.user_email, "user_email")?;
        if self.message.trim().is_empty() {
            return Err(AppError::BadRequest("message must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookRequest {
    pub start_time: String,
    pub customer_name: String,
    pub customer_email: String,
    pub event_type_id: Option<i64>,
    pub notes: Option<String>,
}

impl BookRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_email(&self.customer_email, "customer_email")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListRequest {
    pub user_email: String,
}

impl ListRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_email(&self.user_email, "user_email")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CancelRequest {
    pub booking_id: String,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotsRequest {
    pub event_type_id: i64,
    pub start: String,
    pub end: String,
}

fn require_email(value: &str, field: &str) -> Result<(), AppError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "{field} is not a valid email address"
        )))
    }
}

fn is_valid_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !s.contains(char::is_whitespace)
        }
        None => false,
    }
}
