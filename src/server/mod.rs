//! HTTP surface of the gateway

pub mod routes;

use crate::k8s::PodDirectory;
use crate::status::StatusFetcher;
use anyhow::Context;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared, read-only handles cloned into every request
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn PodDirectory>,
    pub fetcher: StatusFetcher,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(routes::health))
        .route(
            "/v1/namespaces/{namespace}/pods/status",
            get(routes::status_by_labels),
        )
        .route(
            "/v1/namespaces/{namespace}/pods/{pod_name}/status",
            get(routes::status_by_name),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    info!("Gateway listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
