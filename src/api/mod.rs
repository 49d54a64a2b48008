//! HTTP layer exposing sentiment inference and drug recommendations.

pub mod error;
pub mod routes;
pub mod types;

use std::{net::SocketAddr, path::PathBuf};

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

pub use crate::state::AppState;

/// Build the application router around an already loaded state.
pub fn router(state: AppState, ui_dir: Option<PathBuf>) -> Router {
    let mut router = Router::new()
        .route("/predict", post(routes::predict))
        .route("/recommend", post(routes::recommend))
        .route("/health", get(routes::health));

    match ui_dir {
        Some(dir) if dir.is_dir() => {
            info!(dir = %dir.display(), "serving static ui");
            router = router.fallback_service(ServeDir::new(dir));
        }
        Some(dir) => warn!(dir = %dir.display(), "ui directory missing; static ui disabled"),
        None => {}
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(
    state: AppState,
    ui_dir: Option<PathBuf>,
    host: String,
    port: u16,
) -> Result<()> {
    let router = router(state, ui_dir);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "serving drug-insight API");
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
