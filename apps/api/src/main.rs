mod catalog;
mod config;
mod errors;
mod models;
mod profile;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::profile::cosmic::SeededDailyRng;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::redis::RedisStore;
use crate::storage::{ProfileSessionStore, UuidIdGenerator};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Zodiac Profile API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Redis-backed session store
    let redis = redis::Client::open(config.redis_url.clone())?;
    let store = ProfileSessionStore::new(Arc::new(RedisStore::new(redis)));

    // Build app state
    let state = AppState {
        store,
        rng: Arc::new(SeededDailyRng),
        ids: Arc::new(UuidIdGenerator),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
