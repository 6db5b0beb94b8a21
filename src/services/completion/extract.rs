use serde_json::Value;

use super::CompletionResponse;
use crate::models::FunctionCall;

/// Pull a function call out of a completion response, if the model issued
/// one. Returns `None` for plain-text replies and for shapes we don't
/// recognize; callers treat both the same way. An argument string that
/// isn't valid JSON is passed through as a raw string rather than failing
/// the whole request.
pub fn extract_function_call(resp: &CompletionResponse) -> Option<FunctionCall> {
    let choice = resp.choices.first()?;
    let call = choice.call_message()?.function_call.as_ref()?;

    let raw = call.arguments.as_deref().unwrap_or("{}");
    let arguments =
        serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

    Some(FunctionCall {
        name: call.name.clone(),
        arguments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(body: Value) -> CompletionResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_extracts_call_with_parsed_arguments() {
        let resp = response(json!({
            "choices": [{
                "finish_reason": "function_call",
                "message": {
                    "function_call": {
                        "name": "create_booking",
                        "arguments": "{\"start_time\":\"2024-01-01T10:00:00Z\",\"customer_name\":\"Joe\",\"customer_email\":\"joe@example.com\"}"
                    }
                }
            }]
        }));

        let call = extract_function_call(&resp).unwrap();
        assert_eq!(call.name, "create_booking");
        assert_eq!(call.arguments["start_time"], "2024-01-01T10:00:00Z");
        assert_eq!(call.arguments["customer_name"], "Joe");
        assert_eq!(call.arguments["customer_email"], "joe@example.com");
    }

    #[test]
    fn test_unparseable_arguments_pass_through_as_string() {
        let resp = response(json!({
            "choices": [{
                "message": {
                    "function_call": { "name": "create_booking", "arguments": "not json" }
                }
            }]
        }));

        let call = extract_function_call(&resp).unwrap();
        assert_eq!(call.arguments, Value::String("not json".to_string()));
    }

    #[test]
    fn test_missing_arguments_default_to_empty_object() {
        let resp = response(json!({
            "choices": [{
                "message": { "function_call": { "name": "list_bookings" } }
            }]
        }));

        let call = extract_function_call(&resp).unwrap();
        assert_eq!(call.arguments, json!({}));
    }

    #[test]
    fn test_call_under_delta_is_recognized() {
        let resp = response(json!({
            "choices": [{
                "delta": {
                    "function_call": { "name": "cancel_booking", "arguments": "{\"booking_id\":\"abc\"}" }
                }
            }]
        }));

        let call = extract_function_call(&resp).unwrap();
        assert_eq!(call.name, "cancel_booking");
        assert_eq!(call.arguments["booking_id"], "abc");
    }

    #[test]
    fn test_plain_text_reply_yields_none() {
        let resp = response(json!({
            "choices": [{
                "finish_reason": "stop",
                "message": { "content": "How can I help?" }
            }]
        }));
        assert!(extract_function_call(&resp).is_none());
    }

    #[test]
    fn test_unrecognized_shape_yields_none() {
        assert!(extract_function_call(&response(json!({}))).is_none());
        assert!(extract_function_call(&response(json!({ "choices": [] }))).is_none());
        assert!(extract_function_call(&response(json!({ "choices": [{}] }))).is_none());
    }
}
