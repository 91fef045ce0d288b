//! Reply bodies of the backend and the error convention shared by every endpoint.
//!
//! Non-2xx replies carry `{ "error": "..." }`. A 2xx reply carrying a string
//! `error` field is a rejection too. Bodies that are empty or not JSON objects
//! on success are read as `{}`.

use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::core::error::GatewayError;

/// `GET /`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectsReply {
    #[serde(default)]
    pub projects: Option<Vec<String>>,
}

/// `POST /create-new-project` and `POST /ingest-data`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageReply {
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /project/dashboard`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TablesReply {
    #[serde(default)]
    pub tables: Option<Vec<Value>>,
}

/// Applies the error convention and decodes a successful body into `T`.
pub fn interpret<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, GatewayError> {
    let value = interpret_value(status, body)?;
    serde_json::from_value(value).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}

/// Applies the error convention only; the successful body is discarded.
pub fn interpret_empty(status: u16, body: &[u8]) -> Result<(), GatewayError> {
    interpret_value(status, body).map(|_| ())
}

fn interpret_value(status: u16, body: &[u8]) -> Result<Value, GatewayError> {
    if !(200..300).contains(&status) {
        let error = serde_json::from_slice::<Value>(body)
            .ok()
            .as_ref()
            .and_then(error_field);
        return Err(GatewayError::Status { status, error });
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    let value: Value =
        serde_json::from_slice(body).map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
    if let Some(error) = error_field(&value) {
        return Err(GatewayError::Rejected { error });
    }
    Ok(match value {
        Value::Object(_) => value,
        _ => Value::Object(Map::new()),
    })
}

fn error_field(value: &Value) -> Option<String> {
    value
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
}
