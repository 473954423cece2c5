use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, state::AppState};

pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/api/contact", post(handlers::submit_contact))
}

pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/api/services", get(handlers::list_services))
        .route("/api/portfolio", get(handlers::list_portfolio))
        .route("/api/project-types", get(handlers::list_project_types))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health_check))
}

/// Assemble the full application router. Integration tests drive this
/// directly; `main` layers CORS and logging on top before serving.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(contact_routes())
        .merge(content_routes())
        .merge(health_routes())
        .fallback(handlers::route_not_found)
        .with_state(state)
}
