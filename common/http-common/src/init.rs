//! Service initialization utilities
//!
//! Provides standardized tracing setup for the HTTP services.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging for an HTTP service
///
/// Sets up logging to stderr with:
/// - Formatted output without ANSI colors (for clean logs)
/// - Environment-based filtering via RUST_LOG
/// - Default log level of `info` for the specified crate and for
///   `tower_http` (see [`service_filter`])
///
/// Set `LOG_FORMAT=json` for structured JSON output (useful for production/log aggregation).
/// Default is human-readable text output.
///
/// # Arguments
///
/// * `crate_name` - The name of the service crate (e.g., "adb_http")
///
/// # Example
///
/// ```rust,ignore
/// http_common::init_tracing("adb_http")?;
/// ```
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let filter = service_filter(EnvFilter::from_default_env(), crate_name)?;

    let registry = tracing_subscriber::registry().with(filter);

    if json_format_requested(std::env::var("LOG_FORMAT").ok().as_deref()) {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Add the service defaults to `base`
///
/// Enables `info` for `crate_name` and for `tower_http`. Services emit their
/// request spans and response events from a `TraceLayer` at `INFO`, so they
/// pass this filter.
pub fn service_filter(base: EnvFilter, crate_name: &str) -> anyhow::Result<EnvFilter> {
    Ok(base
        .add_directive(format!("{}=info", crate_name).parse()?)
        .add_directive("tower_http=info".parse()?))
}

fn json_format_requested(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("json"))
}
