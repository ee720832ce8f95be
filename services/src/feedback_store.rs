//! # Feedback Store
//!
//! The capability the HTTP layer talks to. Handlers only ever see
//! `Arc<dyn FeedbackStore>`, so the persistence behind it can be swapped
//! (SeaORM in production, anything else in tests).

use crate::error::ServiceError;
use async_trait::async_trait;

pub use db::models::feedback::FeedbackStatus;
pub use db::models::feedback::Model as Feedback;

/// Everything needed to create a feedback record.
///
/// When `content` is `None` the store fills it in from `score` and
/// `missing_points` using the text generator.
#[derive(Debug, Clone, Default)]
pub struct CreateFeedback {
    pub user_id: i64,
    pub submission_id: Option<i64>,
    pub score: Option<i32>,
    pub missing_points: Vec<String>,
    pub content: Option<String>,
}

#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn create_feedback(&self, params: CreateFeedback) -> Result<Feedback, ServiceError>;

    async fn get_feedback_by_id(&self, id: i64) -> Result<Feedback, ServiceError>;

    /// All records, ordered by id.
    async fn get_all_feedbacks(&self) -> Result<Vec<Feedback>, ServiceError>;

    async fn get_feedbacks_by_user_id(&self, user_id: i64) -> Result<Vec<Feedback>, ServiceError>;

    async fn get_feedbacks_by_status(
        &self,
        status: FeedbackStatus,
    ) -> Result<Vec<Feedback>, ServiceError>;

    async fn update_feedback_status(
        &self,
        id: i64,
        status: FeedbackStatus,
    ) -> Result<Feedback, ServiceError>;

    /// Fails with [`ServiceError::NotFound`] when nothing was deleted.
    async fn delete_feedback(&self, id: i64) -> Result<(), ServiceError>;
}
