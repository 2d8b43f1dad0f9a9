//! Response helpers for HTTP handlers
//!
//! Every body the services emit is either plain text or JSON. These helpers
//! pin the content type for each, so handlers only decide the status code and
//! the payload.

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Content type for plain text bodies (tool output and error descriptions)
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// Content type for JSON bodies
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Create a plain text response with the given status
///
/// The body is passed through untouched, so raw bytes captured from a child
/// process can be forwarded verbatim.
///
/// # Example
///
/// ```rust,ignore
/// use axum::http::StatusCode;
/// use http_common::text_response;
///
/// text_response(StatusCode::BAD_GATEWAY, stderr_bytes)
/// ```
pub fn text_response(status: StatusCode, body: impl Into<Body>) -> Response {
    let body: Body = body.into();
    (status, [(header::CONTENT_TYPE, CONTENT_TYPE_TEXT)], body).into_response()
}

/// Create a JSON response from any serializable data
///
/// Responds `200 OK` with the encoded JSON. If encoding fails, responds
/// `500 Internal Server Error` with the encoder's error text as a plain text
/// body.
pub fn json_response<T: Serialize + ?Sized>(data: &T) -> Response {
    match serde_json::to_vec(data) {
        Ok(json) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)],
            json,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode JSON response");
            text_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
