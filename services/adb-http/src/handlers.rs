//! Request handlers
//!
//! Each handler runs one adb command and maps the outcome to a response:
//! - adb failed: `502 Bad Gateway` with adb's stderr as the body
//! - output could not be parsed: `502 Bad Gateway` with the parse error
//! - JSON encoding failed: `500 Internal Server Error`
//! - otherwise `200 OK`

use axum::{extract::State, http::StatusCode, response::Response};
use http_common::{json_response, text_response};

use crate::adb::RunError;
use crate::state::AppState;

/// `adb help`, returned as plain text
pub async fn help(State(state): State<AppState>) -> Response {
    match state.runner.run(&["help"]).await {
        Ok(stdout) => text_response(StatusCode::OK, stdout),
        Err(e) => tool_failure(e),
    }
}

/// `adb devices -l`, returned as a JSON array of devices
///
/// ```json
/// [{"transport_id":1,"serial_id":"0a388e93","state":"device","usb":"1-1.4.2",
///   "product":"razor","model":"Nexus_7","device":"flo"}]
/// ```
pub async fn devices(State(state): State<AppState>) -> Response {
    let stdout = match state.runner.run(&["devices", "-l"]).await {
        Ok(stdout) => stdout,
        Err(e) => return tool_failure(e),
    };

    match (state.parse_devices)(&stdout) {
        Ok(devices) => json_response(&devices),
        Err(e) => {
            tracing::warn!(
                error = %e,
                parsed = e.partial().len(),
                "failed to parse adb devices output"
            );
            text_response(StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}

/// Forward adb's stderr, empty when the failure captured none
fn tool_failure(e: RunError) -> Response {
    tracing::debug!(error = %e, "responding with bad gateway");
    text_response(StatusCode::BAD_GATEWAY, e.stderr().to_vec())
}
