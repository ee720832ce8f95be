pub mod error;
pub mod feedback_service;
pub mod feedback_store;
pub mod feedback_text;

pub use error::ServiceError;
pub use feedback_service::FeedbackService;
pub use feedback_store::{CreateFeedback, Feedback, FeedbackStatus, FeedbackStore};
