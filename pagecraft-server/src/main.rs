//! Pagecraft server
//!
//! Serves the builder API, published pages and lead capture over HTTP,
//! backed by a single SQLite file.
//!
//! Usage:
//!   pagecraft-server --config pagecraft.toml --bind 0.0.0.0:8080

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use pagecraft_registry::ComponentRegistry;
use pagecraft_server::{build_router, AppState, ServerConfig};
use pagecraft_storage::SqliteStore;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "pagecraft-server")]
#[command(about = "Landing-page builder API and public page server")]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "pagecraft.toml")]
    config: PathBuf,

    /// Address to listen on (overrides the config file)
    #[arg(short, long)]
    bind: Option<String>,

    /// SQLite database path (overrides the config file)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("Pagecraft server starting...");
    let mut config = ServerConfig::load(&args.config)?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(database) = args.database {
        config.database_path = database;
    }

    let store = SqliteStore::open(&config.database_path)
        .with_context(|| format!("Failed to open database {:?}", config.database_path))?;
    let registry = ComponentRegistry::with_builtin_blocks();
    info!("Registered {} component types", registry.len());

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    let local_addr = listener.local_addr()?;

    println!("\n========================================");
    println!("  Pagecraft Running");
    println!("========================================");
    println!("  Site:     {}", config.site_name);
    println!("  HTTP:     http://{}", local_addr);
    println!("  Database: {}", config.database_path.display());
    println!("========================================\n");

    let app = build_router(AppState::new(store, registry, config));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Pagecraft server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
