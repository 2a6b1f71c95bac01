//! Harmony API — HTTP entry point.
//!
//! Loads engine configuration, builds the axum router, and serves it.

use harmony_api::{build_router, AppState};

#[tokio::main]
async fn main() {
    harmony_common::init_tracing();

    let config = harmony_infra::config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to load configuration, using defaults");
        harmony_infra::config::EngineConfig::default()
    });

    let listen_addr = config.listen_addr.clone();
    let state = AppState::new(config);
    let router = build_router(state);

    tracing::info!(addr = %listen_addr, "harmony-api starting");
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .unwrap_or_else(|err| panic!("failed to bind {listen_addr}: {err}"));

    if let Err(err) = axum::serve(listener, router).await {
        tracing::error!(error = %err, "harmony-api server error");
    }
}
