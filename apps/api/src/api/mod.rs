use axum::Router;
use axum::routing::get;

pub mod health;
pub mod projects;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by `server::create_router`.
///
/// Returns a stateless Router: sub-routers have their state applied already,
/// so only cheap Arc clones remain.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/projects", projects::router(state))
}

/// Router with the `/ready` endpoint that performs an actual database check.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
