use crate::error::ServiceError;
use crate::feedback_store::{CreateFeedback, Feedback, FeedbackStatus, FeedbackStore};
use crate::feedback_text::generate_feedback_text;
use async_trait::async_trait;
use db::models::feedback::Model as FeedbackModel;
use sea_orm::DatabaseConnection;

pub const MAX_SCORE: i32 = 20;

/// SeaORM-backed [`FeedbackStore`].
#[derive(Clone)]
pub struct FeedbackService {
    db: DatabaseConnection,
}

impl FeedbackService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn check(params: &CreateFeedback) -> Result<(), ServiceError> {
        if params.user_id < 1 {
            return Err(ServiceError::Validation(
                "user_id must be a positive integer".into(),
            ));
        }
        if let Some(score) = params.score {
            if !(0..=MAX_SCORE).contains(&score) {
                return Err(ServiceError::Validation(format!(
                    "score must be between 0 and {MAX_SCORE}"
                )));
            }
        }
        if let Some(content) = &params.content {
            if content.trim().is_empty() {
                return Err(ServiceError::Validation("content must not be blank".into()));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl FeedbackStore for FeedbackService {
    async fn create_feedback(&self, params: CreateFeedback) -> Result<Feedback, ServiceError> {
        Self::check(&params)?;

        let (content, status) = match params.content {
            Some(content) => (content, FeedbackStatus::Pending),
            None => (
                generate_feedback_text(params.score, &params.missing_points),
                FeedbackStatus::Generated,
            ),
        };

        let feedback = FeedbackModel::create(
            &self.db,
            params.user_id,
            params.submission_id,
            params.score,
            &content,
            status,
        )
        .await?;

        log::info!(
            "Created feedback {} for user {} ({})",
            feedback.id,
            feedback.user_id,
            feedback.status
        );
        Ok(feedback)
    }

    async fn get_feedback_by_id(&self, id: i64) -> Result<Feedback, ServiceError> {
        FeedbackModel::find_by_id(&self.db, id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    async fn get_all_feedbacks(&self) -> Result<Vec<Feedback>, ServiceError> {
        Ok(FeedbackModel::find_all(&self.db).await?)
    }

    async fn get_feedbacks_by_user_id(&self, user_id: i64) -> Result<Vec<Feedback>, ServiceError> {
        Ok(FeedbackModel::find_by_user(&self.db, user_id).await?)
    }

    async fn get_feedbacks_by_status(
        &self,
        status: FeedbackStatus,
    ) -> Result<Vec<Feedback>, ServiceError> {
        Ok(FeedbackModel::find_by_status(&self.db, status).await?)
    }

    async fn update_feedback_status(
        &self,
        id: i64,
        status: FeedbackStatus,
    ) -> Result<Feedback, ServiceError> {
        let current = self.get_feedback_by_id(id).await?;

        if !current.status.can_transition_to(status) {
            log::warn!(
                "Rejected status change for feedback {}: {} -> {}",
                id,
                current.status,
                status
            );
            return Err(ServiceError::InvalidTransition {
                from: current.status,
                to: status,
            });
        }

        FeedbackModel::set_status(&self.db, id, status)
            .await
            .map_err(|e| ServiceError::from_db(e, id))
    }

    async fn delete_feedback(&self, id: i64) -> Result<(), ServiceError> {
        if FeedbackModel::delete(&self.db, id).await? {
            log::info!("Deleted feedback {}", id);
            Ok(())
        } else {
            Err(ServiceError::NotFound(id))
        }
    }
}
