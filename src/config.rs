use std::env;

/// Fallback event type used when neither the request nor the environment
/// supplies one. Historically this id was hardcoded inside the payload
/// builder; it survives only as the default for CAL_DEFAULT_EVENT_TYPE_ID.
const FALLBACK_EVENT_TYPE_ID: i64 = 3778941;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub cal_api_key: String,
    pub cal_base_url: String,
    pub cal_api_version_bookings: String,
    pub cal_api_version_slots: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub default_event_type_id: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cal_api_key: env::var("CAL_API_KEY").unwrap_or_default(),
            cal_base_url: env::var("CAL_BASE_URL")
                .unwrap_or_else(|_| "https://api.cal.com".to_string()),
            // Version tags required by the Cal.com v2 API; the bookings and
            // slots endpoint families take different values.
            cal_api_version_bookings: env::var("CAL_API_VERSION_BOOKINGS")
                .unwrap_or_else(|_| "2024-08-13".to_string()),
            cal_api_version_slots: env::var("CAL_API_VERSION_SLOTS")
                .unwrap_or_else(|_| "2024-09-04".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            default_event_type_id: env::var("CAL_DEFAULT_EVENT_TYPE_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(FALLBACK_EVENT_TYPE_ID),
        }
    }

    pub fn booking_defaults(&self) -> BookingDefaults {
        BookingDefaults {
            event_type_id: self.default_event_type_id,
            ..BookingDefaults::default()
        }
    }
}

/// Defaults the payload builder applies for fields the caller omitted.
#[derive(Clone, Debug)]
pub struct BookingDefaults {
    pub event_type_id: i64,
    pub event_type_slug: String,
    pub time_zone: String,
    pub language: String,
}

impl Default for BookingDefaults {
    fn default() -> Self {
        Self {
            event_type_id: FALLBACK_EVENT_TYPE_ID,
            event_type_slug: "30min".to_string(),
            time_zone: "America/Los_Angeles".to_string(),
            language: "en".to_string(),
        }
    }
}
