//! Liveness endpoint
//!
//! A minimal HTTP surface so deployment platforms can probe the process.
//! It shares nothing with the detection core.

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
}

async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "VWAP signal scanner is live",
    })
}

/// Serve the liveness route until the process exits
pub async fn serve(bind: &str) -> Result<()> {
    let app = Router::new().route("/", get(status));

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .context(format!("Failed to bind liveness server to {}", bind))?;

    info!("Liveness endpoint listening on {}", bind);
    axum::serve(listener, app).await.context("Liveness server failed")?;

    Ok(())
}
