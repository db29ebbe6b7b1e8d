//! Application state shared across handlers

use common::database::DatabaseConfig;

use crate::service::StudentService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Used by the health endpoint to probe the store
    pub database: DatabaseConfig,
    pub student_service: StudentService,
}
