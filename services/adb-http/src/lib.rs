//! ADB over HTTP
//!
//! Exposes a subset of the Android Debug Bridge command-line tool over HTTP.
//!
//! # Routes
//! - `GET /help/` - output of `adb help` as plain text
//! - `GET /devices/` - output of `adb devices -l` parsed into a JSON array
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use adb_http::{adb::AdbRunner, server, AppState};
//!
//! let state = AppState::new(Arc::new(AdbRunner::default()));
//! let app = server::router(state);
//! ```
//!
//! # Requirements
//! - `adb` installed and in PATH (or configured via `--adb` / `ADB_PATH`)

pub mod adb;
pub mod config;
pub mod handlers;
pub mod server;
pub mod state;

// Re-export main types
pub use config::ServerConfig;
pub use state::AppState;
