use std::io;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;

pub mod health;

/// The service router: the heartbeat route plus request tracing and CORS.
pub fn router(cfg: &AppConfig) -> Router {
    cfg.heartbeat()
        .clone()
        .mount(Router::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Accept errors and failed response writes are logged and absorbed by
/// `axum::serve`; they never surface here.
pub async fn serve(listener: TcpListener, app: Router) -> io::Result<()> {
    axum::serve(listener, app).await
}
