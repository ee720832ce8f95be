//! Application state container shared across Axum route handlers.
//!
//! Cloned into every request via Axum's `State<T>` extractor. Holds nothing
//! mutable of its own.

use sea_orm::DatabaseConnection;
use services::{FeedbackService, FeedbackStore};
use std::sync::Arc;

/// Central application state shared across the server.
///
/// This includes:
/// - A cloned, thread-safe database connection for use with SeaORM.
/// - The feedback store every `/feedback` handler delegates to.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    feedback: Arc<dyn FeedbackStore>,
}

impl AppState {
    /// Wires the default SeaORM-backed store on top of `db`.
    pub fn new(db: DatabaseConnection) -> Self {
        let feedback = Arc::new(FeedbackService::new(db.clone()));
        Self { db, feedback }
    }

    /// Uses a caller-supplied store, e.g. a test double.
    pub fn with_store(db: DatabaseConnection, feedback: Arc<dyn FeedbackStore>) -> Self {
        Self { db, feedback }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn feedback(&self) -> &dyn FeedbackStore {
        self.feedback.as_ref()
    }
}
