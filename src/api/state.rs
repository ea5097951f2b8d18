//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{ServiceContainer, Services};

/// Application state shared by every handler.
///
/// The pooled database handle is the only shared resource; services hold
/// clones of the same connection.
#[derive(Clone)]
pub struct AppState {
    /// Service container
    pub services: Arc<dyn ServiceContainer>,
    /// Database connection, used directly for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state with services built over the database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let services = Arc::new(Services::from_connection(database.get_connection()));
        Self { services, database }
    }

    /// Create application state with a manually injected container.
    pub fn new(services: Arc<dyn ServiceContainer>, database: Arc<Database>) -> Self {
        Self { services, database }
    }
}
