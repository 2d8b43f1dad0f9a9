//! ADB over HTTP
//!
//! Serves `adb help` and `adb devices -l` over HTTP.
//!
//! # Usage
//!
//! ```bash
//! adb-http --listen 127.0.0.1:8080
//! curl http://127.0.0.1:8080/devices/
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use adb_http::adb::AdbRunner;
use adb_http::config::FileConfig;
use adb_http::{server, AppState, ServerConfig};

#[derive(Parser)]
#[command(name = "adb-http")]
#[command(about = "Expose adb help and device listing over HTTP")]
struct Cli {
    /// Address to listen on [default: 0.0.0.0:8080]
    #[arg(long, env = "ADB_HTTP_LISTEN")]
    listen: Option<SocketAddr>,

    /// adb executable name or path [default: adb]
    #[arg(long, env = "ADB_PATH")]
    adb: Option<String>,

    /// Config file (defaults to the nearest adb-http.toml)
    #[arg(long, env = "ADB_HTTP_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    http_common::init_tracing("adb_http")?;

    let cli = Cli::parse();

    let file = FileConfig::load(cli.config.as_deref()).context("failed to load config")?;
    let config = ServerConfig::resolve(file, cli.listen, cli.adb);

    let state = AppState::new(Arc::new(AdbRunner::new(config.adb.clone())));
    server::serve(&config, state).await
}
