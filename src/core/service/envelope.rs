//! API-style response envelope with pagination and error metadata.

use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

const API_VERSION: &str = "v1";

/// Wrap `data` in a consistent response envelope. Success is derived
/// from the status code; list payloads gain pagination metadata and
/// status >= 400 gains an error block.
pub fn format_response(data: Value, message: &str, status_code: u16) -> Value {
    let mut metadata = json!({
        "version": "1.0",
        "apiVersion": API_VERSION,
        "requestId": format!("req_{}", Uuid::new_v4().simple()),
    });

    if let Some(items) = data.as_array() {
        metadata["count"] = json!(items.len());
        metadata["hasMore"] = json!(false);
        metadata["page"] = json!(1);
        metadata["perPage"] = json!(items.len());
    }

    let mut response = json!({
        "success": status_code < 400,
        "statusCode": status_code,
        "message": message,
        "timestamp": Utc::now().to_rfc3339(),
        "data": data,
        "metadata": metadata,
    });

    if status_code >= 400 {
        response["error"] = json!({
            "code": status_code,
            "message": message,
            "details": Value::Null,
        });
    }

    response
}

/// Shorthand for a 200 envelope.
pub fn ok(data: Value) -> Value {
    format_response(data, "Success", 200)
}
