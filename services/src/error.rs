use db::models::feedback::FeedbackStatus;
use sea_orm::DbErr;
use thiserror::Error;

/// Failures a [`FeedbackStore`](crate::FeedbackStore) can report.
///
/// The HTTP layer maps each variant to a status code; only `Database`
/// becomes a server error.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Feedback {0} not found")]
    NotFound(i64),

    #[error("Cannot move feedback from '{from}' to '{to}'")]
    InvalidTransition {
        from: FeedbackStatus,
        to: FeedbackStatus,
    },

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl ServiceError {
    /// Turns SeaORM's `RecordNotFound` into `NotFound(id)`, passing anything else through.
    pub fn from_db(err: DbErr, id: i64) -> Self {
        match err {
            DbErr::RecordNotFound(_) => ServiceError::NotFound(id),
            other => ServiceError::Database(other),
        }
    }
}
