//! tunelib-api - Music catalog REST service
//!
//! Startup sequence: logging, root folder resolution, database
//! initialization (schema + one-time seed), then the HTTP server. Seeding
//! finishes before the listener opens, so no request ever observes a
//! half-loaded catalog.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tunelib_api::storage::FileStore;
use tunelib_api::{build_router, AppState};
use tunelib_common::config;
use tunelib_common::db::init::init_database;

#[derive(Parser, Debug)]
#[command(name = "tunelib-api", about = "Music catalog REST service")]
struct Args {
    /// Root folder holding the database and uploaded audio files
    #[arg(long, env = "TUNELIB_ROOT")]
    root_folder: Option<String>,

    /// Port to listen on
    #[arg(long, env = "TUNELIB_PORT", default_value_t = 5730)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build identification first, before any database delays
    info!(
        "Starting tunelib-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let root_folder = config::resolve_root_folder(args.root_folder.as_deref());
    std::fs::create_dir_all(&root_folder)?;
    info!("Root folder: {}", root_folder.display());

    let db_path = config::database_path(&root_folder);
    info!("Database path: {}", db_path.display());

    // Creates schema on first run and loads the reference catalog once
    let pool = init_database(&db_path).await?;

    let state = AppState::new(pool, FileStore::new(root_folder));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("tunelib-api listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
