//! Account Ledger - Main Application Entry Point
//!
//! A small REST API for creating, reading and deleting accounts and for
//! submitting transfer requests. Per-account routes are guarded by signed
//! tokens issued when an account is created.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, behind the `Storage` trait
//! - **Authorization**: HMAC-signed JWTs in the `x-jwt-token` header
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Connect to the database and ping it (fatal on failure)
//! 3. Create the `account` table if it does not exist
//! 4. Build the HTTP router
//! 5. Serve until Ctrl-C

mod app;
mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;
mod storage;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::{
    app::{AppState, build_router},
    services::token_service::TokenService,
    storage::{Storage, postgres::PostgresStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaults to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env().context("load configuration")?;
    tracing::info!(?config, "Configuration loaded");

    let store = PostgresStore::connect(&config.database())
        .await
        .inspect_err(|error| tracing::error!(%error, "cannot reach database"))
        .context("connect to database")?;
    tracing::info!("Database connection established");

    store.init().await.context("create account table")?;
    tracing::info!("Account table ready");

    let tokens = TokenService::new(&config.auth());
    let app = build_router(AppState::new(store, tokens));

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("run server")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
