//! HTTP Common - Shared utilities for HTTP services
//!
//! This crate provides common functionality used by the HTTP services in
//! this workspace:
//!
//! - **Initialization**: [`init_tracing`] for standardized logging setup
//! - **Responses**: helpers for building plain text and JSON responses with
//!   the content types the services promise
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::http::StatusCode;
//! use http_common::{json_response, text_response};
//!
//! async fn handler() -> axum::response::Response {
//!     match load() {
//!         Ok(data) => json_response(&data),
//!         Err(e) => text_response(StatusCode::BAD_GATEWAY, e.to_string()),
//!     }
//! }
//! ```

pub mod init;
pub mod response;

// Re-export commonly used items at crate root
pub use init::{init_tracing, service_filter};
pub use response::{json_response, text_response, CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT};
