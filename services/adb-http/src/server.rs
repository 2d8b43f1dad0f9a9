//! HTTP server for the adb routes

use anyhow::{Context, Result};
use axum::{response::Redirect, routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;

/// Create the router with all routes
///
/// The bare paths redirect to their trailing-slash form so existing clients
/// of either spelling keep working. Requests are logged at `INFO`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/help/", get(handlers::help))
        .route("/devices/", get(handlers::devices))
        .route("/help", get(|| async { Redirect::permanent("/help/") }))
        .route("/devices", get(|| async { Redirect::permanent("/devices/") }))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Start the web server
///
/// Failing to bind the listen address is fatal; everything after that is
/// reported per request.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;

    tracing::info!(
        adb = %config.adb,
        "Starting web server on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
