use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::errors::CalError;
use crate::services::payload::BookingPayload;

/// Seam over the Cal.com v2 API so handlers and the dispatcher can be
/// tested without network access.
#[async_trait]
pub trait SchedulingApi: Send + Sync {
    /// GET /v2/bookings with pass-through query filters.
    async fn list_bookings(&self, filters: &[(String, String)]) -> Result<Value, CalError>;

    /// POST /v2/bookings.
    async fn create_booking(&self, payload: &BookingPayload) -> Result<Value, CalError>;

    /// POST /v2/bookings/{uid}/cancel with an optional cancellation reason.
    async fn cancel_booking(&self, booking_uid: &str, reason: Option<&str>)
        -> Result<Value, CalError>;

    /// GET /v2/slots with pass-through query parameters.
    async fn list_slots(&self, query: &[(String, String)]) -> Result<Value, CalError>;
}

/// Client for the Cal.com v2 bookings and slots endpoints.
///
/// Every request carries a bearer key and a `cal-api-version` header; the
/// bookings and slots endpoint families require different version tags.
/// Single attempt per call, no retries.
pub struct CalClient {
    api_key: String,
    base_url: String,
    version_bookings: String,
    version_slots: String,
    client: reqwest::Client,
}

impl CalClient {
    pub fn new(config: &AppConfig) -> Result<Self, CalError> {
        if config.cal_api_key.is_empty() {
            return Err(CalError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            api_key: config.cal_api_key.clone(),
            base_url: config.cal_base_url.trim_end_matches('/').to_string(),
            version_bookings: config.cal_api_version_bookings.clone(),
            version_slots: config.cal_api_version_slots.clone(),
            client,
        })
    }

    async fn execute(&self, op: &str, req: reqwest::RequestBuilder) -> Result<Value, CalError> {
        let resp = req.bearer_auth(&self.api_key).send().await.map_err(|e| {
            tracing::error!(op, error = %e, "cal.com request failed");
            CalError::Transport(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(op, %status, %body, "cal.com API returned error");
            return Err(CalError::Api { status, body });
        }

        Ok(resp.json().await?)
    }
}

#[async_trait]
impl SchedulingApi for CalClient {
    async fn list_bookings(&self, filters: &[(String, String)]) -> Result<Value, CalError> {
        let req = self
            .client
            .get(format!("{}/v2/bookings", self.base_url))
            .header("cal-api-version", &self.version_bookings)
            .query(filters);
        self.execute("list_bookings", req).await
    }

    async fn create_booking(&self, payload: &BookingPayload) -> Result<Value, CalError> {
        let req = self
            .client
            .post(format!("{}/v2/bookings", self.base_url))
            .header("cal-api-version", &self.version_bookings)
            .json(payload);
        self.execute("create_booking", req).await
    }

    async fn cancel_booking(
        &self,
        booking_uid: &str,
        reason: Option<&str>,
    ) -> Result<Value, CalError> {
        let body = match reason {
            Some(reason) => json!({ "cancellationReason": reason }),
            None => json!({}),
        };
        let req = self
            .client
            .post(format!("{}/v2/bookings/{booking_uid}/cancel", self.base_url))
            .header("cal-api-version", &self.version_bookings)
            .json(&body);
        self.execute("cancel_booking", req).await
    }

    async fn list_slots(&self, query: &[(String, String)]) -> Result<Value, CalError> {
        let req = self
            .client
            .get(format!("{}/v2/slots", self.base_url))
            .header("cal-api-version", &self.version_slots)
            .query(query);
        self.execute("list_slots", req).await
    }
}
