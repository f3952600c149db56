//! Axum application setup.

use std::path::PathBuf;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;
use super::state::AppState;

/// Create the Axum router with all routes.
///
/// When `static_dir` is given, non-API paths are served from it with
/// `index.html` as the single-page-app fallback.
pub fn create_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    // The front end may be served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        // Catalog
        .route("/artworks", get(handlers::list_artworks))
        .route("/artworks/:id", get(handlers::get_artwork))
        .route("/scan", get(handlers::scan_artwork))
        .route("/categories", get(handlers::list_categories))
        .route("/featured", get(handlers::list_featured))
        .route("/stats", get(handlers::catalog_stats))
        // Visitor assistant
        .route("/assistant/ask", post(handlers::ask_assistant));

    let router = Router::new().nest("/api", api_routes);

    let router = match static_dir {
        Some(dir) => {
            let index = dir.join("index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the web server and run until Ctrl+C.
pub async fn run_server(
    state: AppState,
    port: u16,
    static_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state, static_dir);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    info!(%addr, "server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("shutting down");
}
