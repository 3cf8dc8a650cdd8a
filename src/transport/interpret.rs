use serde_json::Value;

use crate::domain::{JsonKind, JsonObject};

/// Field panels use to report a rejected request, for every action.
const ERROR_FIELD: &str = "error";

/// Failure to turn a panel response body into the expected shape.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResponseError {
    /// Body is not JSON (panels often answer with HTML or plain-text error pages).
    #[error("invalid JSON response: {body}")]
    MalformedBody { body: String },

    /// Body is JSON but not the shape this call expects.
    #[error("unexpected response shape: expected {expected}, got {actual}")]
    UnexpectedShape { expected: JsonKind, actual: JsonKind },

    /// The panel rejected the request with `{"error": "..."}`.
    #[error("panel error: {message}")]
    Api { message: String },
}

/// Interpret a response body for an action documented to return an object.
pub fn interpret_object(body: &[u8]) -> Result<JsonObject, ResponseError> {
    match parse(body)? {
        Value::Object(object) => {
            if let Some(message) = api_error_message(&object) {
                return Err(ResponseError::Api {
                    message: message.to_owned(),
                });
            }
            Ok(object)
        }
        other => Err(ResponseError::UnexpectedShape {
            expected: JsonKind::Object,
            actual: JsonKind::of(&other),
        }),
    }
}

/// Interpret a response body for an action documented to return an array.
///
/// Errors still arrive as a single `{"error": "..."}` object. Items inside a
/// successful array are returned untouched, even if they carry their own `error`.
pub fn interpret_list(body: &[u8]) -> Result<Vec<Value>, ResponseError> {
    match parse(body)? {
        Value::Array(items) => Ok(items),
        Value::Object(object) => match api_error_message(&object) {
            Some(message) => Err(ResponseError::Api {
                message: message.to_owned(),
            }),
            None => Err(ResponseError::UnexpectedShape {
                expected: JsonKind::Array,
                actual: JsonKind::Object,
            }),
        },
        other => Err(ResponseError::UnexpectedShape {
            expected: JsonKind::Array,
            actual: JsonKind::of(&other),
        }),
    }
}

fn parse(body: &[u8]) -> Result<Value, ResponseError> {
    serde_json::from_slice(body).map_err(|_| ResponseError::MalformedBody {
        body: String::from_utf8_lossy(body).into_owned(),
    })
}

fn api_error_message(object: &JsonObject) -> Option<&str> {
    match object.get(ERROR_FIELD) {
        Some(Value::String(message)) if !message.is_empty() => Some(message.as_str()),
        _ => None,
    }
}
