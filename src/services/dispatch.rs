use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::BookingDefaults;
use crate::errors::AppError;
use crate::models::{CancelBookingArgs, CreateBookingArgs, FunctionCall, ListBookingsArgs};
use crate::services::cal::SchedulingApi;
use crate::services::payload::build_booking_payload;

/// Outcome of executing a model-issued function call.
#[derive(Debug)]
pub enum Dispatch {
    Executed {
        function: String,
        arguments: Value,
        result: Value,
    },
    /// The model named a function we don't declare. Not an error: the
    /// stated intent and arguments are kept for diagnostics.
    UnknownFunction {
        function: String,
        arguments: Value,
    },
}

/// Route an extracted function call to the matching scheduling operation.
pub async fn dispatch(
    cal: &dyn SchedulingApi,
    defaults: &BookingDefaults,
    call: FunctionCall,
) -> Result<Dispatch, AppError> {
    let FunctionCall { name, arguments } = call;

    let result = match name.as_str() {
        "list_bookings" => {
            let args: ListBookingsArgs = parse_args(&name, &arguments)?;
            let mut filters = vec![("take".to_string(), "100".to_string())];
            if let Some(status) = args.status {
                filters.push(("status".to_string(), status.as_str().to_string()));
            }
            if let Some(email) = args.user_email {
                filters.push(("attendeeEmail".to_string(), email));
            }
            cal.list_bookings(&filters).await?
        }
        "create_booking" => {
            let args: CreateBookingArgs = parse_args(&name, &arguments)?;
            let payload = build_booking_payload(
                &args.start_time,
                &args.customer_name,
                &args.customer_email,
                None,
                "chat booking",
                defaults,
            );
            cal.create_booking(&payload).await?
        }
        "cancel_booking" => {
            let args: CancelBookingArgs = parse_args(&name, &arguments)?;
            cal.cancel_booking(&args.booking_id, None).await?
        }
        _ => {
            tracing::warn!(function = %name, "model requested unknown function");
            return Ok(Dispatch::UnknownFunction {
                function: name,
                arguments,
            });
        }
    };

    Ok(Dispatch::Executed {
        function: name,
        arguments,
        result,
    })
}

fn parse_args<T: DeserializeOwned>(function: &str, arguments: &Value) -> Result<T, AppError> {
    serde_json::from_value(arguments.clone())
        .map_err(|e| AppError::MalformedIntent(format!("{function}: {e}")))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::errors::CalError;
    use crate::services::payload::BookingPayload;

    /// Records every upstream call and answers with a canned value.
    struct MockCal {
        calls: Mutex<Vec<String>>,
        response: Value,
    }

    impl MockCal {
        fn new(response: Value) -> Self {
            Self {
                calls: Mutex::new(vec![]),
                response,
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SchedulingApi for MockCal {
        async fn list_bookings(&self, filters: &[(String, String)]) -> Result<Value, CalError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("list {filters:?}"));
            Ok(self.response.clone())
        }

        async fn create_booking(&self, payload: &BookingPayload) -> Result<Value, CalError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("create {}", payload.attendee.email));
            Ok(self.response.clone())
        }

        async fn cancel_booking(
            &self,
            booking_uid: &str,
            _reason: Option<&str>,
        ) -> Result<Value, CalError> {
            self.calls.lock().unwrap().push(format!("cancel {booking_uid}"));
            Ok(self.response.clone())
        }

        async fn list_slots(&self, _query: &[(String, String)]) -> Result<Value, CalError> {
            self.calls.lock().unwrap().push("slots".to_string());
            Ok(self.response.clone())
        }
    }

    fn call(name: &str, arguments: Value) -> FunctionCall {
        FunctionCall {
            name: name.to_string(),
            arguments,
        }
    }

    #[tokio::test]
    async fn test_list_bookings_passes_upstream_response_through() {
        let canned = json!({"status": "success", "data": [], "pagination": {}});
        let cal = MockCal::new(canned.clone());

        let outcome = dispatch(
            &cal,
            &BookingDefaults::default(),
            call("list_bookings", json!({"user_email": "joe@example.com"})),
        )
        .await
        .unwrap();

        match outcome {
            Dispatch::Executed { result, .. } => assert_eq!(result, canned),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(
            cal.calls(),
            [r#"list [("take", "100"), ("attendeeEmail", "joe@example.com")]"#]
        );
    }

    #[tokio::test]
    async fn test_list_bookings_includes_status_filter() {
        let cal = MockCal::new(json!({}));

        dispatch(
            &cal,
            &BookingDefaults::default(),
            call("list_bookings", json!({"status": "upcoming"})),
        )
        .await
        .unwrap();

        assert_eq!(cal.calls(), [r#"list [("take", "100"), ("status", "upcoming")]"#]);
    }

    #[tokio::test]
    async fn test_create_booking_builds_payload_from_arguments() {
        let cal = MockCal::new(json!({"status": "success"}));

        let outcome = dispatch(
            &cal,
            &BookingDefaults::default(),
            call(
                "create_booking",
                json!({
                    "start_time": "2024-01-01T10:00:00Z",
                    "customer_name": "Joe",
                    "customer_email": "joe@example.com"
                }),
            ),
        )
        .await
        .unwrap();

        assert!(matches!(outcome, Dispatch::Executed { .. }));
        assert_eq!(cal.calls(), ["create joe@example.com"]);
    }

    #[tokio::test]
    async fn test_cancel_without_booking_id_never_reaches_upstream() {
        let cal = MockCal::new(json!({}));

        let err = dispatch(
            &cal,
            &BookingDefaults::default(),
            call("cancel_booking", json!({})),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::MalformedIntent(_)));
        assert!(cal.calls().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_forwards_booking_id() {
        let cal = MockCal::new(json!({"status": "success"}));

        dispatch(
            &cal,
            &BookingDefaults::default(),
            call("cancel_booking", json!({"booking_id": "abc123"})),
        )
        .await
        .unwrap();

        assert_eq!(cal.calls(), ["cancel abc123"]);
    }

    #[tokio::test]
    async fn test_unknown_function_returns_marker_without_upstream_call() {
        let cal = MockCal::new(json!({}));
        let args = json!({"foo": "bar"});

        let outcome = dispatch(
            &cal,
            &BookingDefaults::default(),
            call("reschedule_booking", args.clone()),
        )
        .await
        .unwrap();

        match outcome {
            Dispatch::UnknownFunction {
                function,
                arguments,
            } => {
                assert_eq!(function, "reschedule_booking");
                assert_eq!(arguments, args);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(cal.calls().is_empty());
    }

    #[tokio::test]
    async fn test_string_arguments_are_rejected_as_malformed() {
        let cal = MockCal::new(json!({}));

        let err = dispatch(
            &cal,
            &BookingDefaults::default(),
            call("create_booking", Value::String("not json".to_string())),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::MalformedIntent(_)));
        assert!(cal.calls().is_empty());
    }
}
