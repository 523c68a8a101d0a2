//! # Roomdraw DB
//!
//! Database pool and schema utilities for the room draw admin toolkit.
//!
//! This crate provides connection pool initialization using SQLx with
//! PostgreSQL, plus the schema DDL (see [`schema`]). Per-feature queries
//! live next to the features that own them (seeder, importers, draw).
//!
//! # Example
//!
//! ```ignore
//! use roomdraw_config::DatabaseConfig;
//! use roomdraw_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()).await;
//!     // Use pool for database operations
//! }
//! ```

pub mod schema;

use roomdraw_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

/// Initializes a PostgreSQL connection pool.
///
/// # Panics
///
/// Panics if the connection cannot be established. Every admin command
/// needs the database, so there is nothing sensible to do but stop.
pub async fn init_db_pool(config: &DatabaseConfig) -> sqlx::PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
        .expect("Failed to connect to database")
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
