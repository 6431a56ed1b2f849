use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Shared application state.
///
/// Cloning is cheap: the database connection is an Arc-backed pool handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
}
