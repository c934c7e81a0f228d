pub mod config;
pub mod database;
pub mod handlers;
pub mod render;
pub mod session;
pub mod state;
pub mod utils;

use axum::routing::any;
use axum::Router;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Every path and method lands on the status page; the fallback catches
/// whatever the explicit route does not (including `/favicon.ico`).
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::status::status_page))
        .fallback(handlers::status::status_page)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
