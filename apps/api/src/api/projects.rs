use axum::Router;
use domain_projects::{PgProjectRepository, ProjectService, handlers};

use crate::state::AppState;

/// Wires the projects domain against the shared database connection.
pub fn router(state: &AppState) -> Router {
    let repository = PgProjectRepository::new(state.db.clone());
    let service = ProjectService::new(repository);
    handlers::router(service)
}
