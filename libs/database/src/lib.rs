//! Database library providing the PostgreSQL connector and utilities
//!
//! Connection management is centralized here so applications only deal with a
//! ready [`sea_orm::DatabaseConnection`].
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{PostgresConfig, connect_from_config_with_retry};
//!
//! let config = PostgresConfig::from_env()?;
//! let db = connect_from_config_with_retry(config, None).await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
