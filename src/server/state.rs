//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, `DatabaseConnection` is a connection pool and clones share
/// the pool) for each incoming request via Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
