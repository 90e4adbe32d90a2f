//! Database layer - connection pool and catalog client
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Transactions for multi-step operations

pub mod client;
pub mod pool;

pub use client::CatalogClient;
pub use pool::create_pool;

/// Embedded catalog schema, runnable against a fresh database.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../migrations");
