use axum::{
    Router,
    routing::{get_service, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::{config::ServerConfig, handlers::proxy};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            client: reqwest::Client::new(),
        }
    }
}

/// Static files on GET/HEAD, the forwarder on `POST /api/*`, a preflight
/// answer on every OPTIONS and 404 for everything else.
pub fn build_router(state: AppState) -> Router {
    let static_files = get_service(ServeDir::new(&state.config.static_dir))
        .options(proxy::preflight)
        .fallback(proxy::not_found)
        .with_state::<()>(state.clone());

    let api = post(proxy::forward)
        .options(proxy::preflight)
        .fallback(proxy::not_found);

    Router::new()
        .route("/api/", api.clone())
        .route("/api/{*rest}", api)
        .fallback_service(static_files)
        .with_state(state)
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let bind_addr = config.bind_addr.clone();
    let upstream = config.upstream_base.clone();
    let static_dir = config.static_dir.clone();
    let app = build_router(AppState::new(config));

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", bind_addr, e))?;

    log::info!("CORS proxy + static server on http://{}", bind_addr);
    log::info!("   Static files: {}", static_dir.display());
    log::info!("   API proxy: /api/* -> {}/*", upstream.trim_end_matches('/'));

    axum::serve(listener, app).await?;
    Ok(())
}
