use core_config::server::ServerConfig;
use core_config::{FromEnv, env_or_default};
use database::postgres::PostgresConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Default connection string for local development.
const DEFAULT_DATABASE_URL: &str = "postgresql://postgres@localhost/project_finder";

/// Application-specific configuration.
/// Composes shared config components from the `core_config` and `database`
/// libraries.
#[derive(Clone, Debug)]
pub struct Config {
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        // DATABASE_URL falls back to the local development database
        let database_url = env_or_default("DATABASE_URL", DEFAULT_DATABASE_URL);
        let database = PostgresConfig::new(&database_url);
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8000

        Ok(Self {
            database,
            server,
            environment,
        })
    }
}
