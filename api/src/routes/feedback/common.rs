//! # Feedback DTOs
//!
//! Request and response bodies for the `/feedback` route group, plus the
//! mapping from [`ServiceError`] to HTTP responses.

use crate::response::ApiResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, Serialize};
use services::{CreateFeedback, Feedback, FeedbackStatus, ServiceError};
use validator::{Validate, ValidationErrors};

/// Body of `POST /feedback`.
///
/// Field names are snake_case; the camelCase spellings used by the web
/// client are accepted as aliases.
#[derive(Debug, Deserialize, Validate)]
pub struct FeedbackRequest {
    #[serde(alias = "userId")]
    #[validate(range(min = 1, message = "user_id must be a positive integer"))]
    pub user_id: i64,

    #[serde(alias = "submissionId")]
    #[validate(range(min = 1, message = "submission_id must be a positive integer"))]
    pub submission_id: Option<i64>,

    #[validate(range(min = 0, max = 20, message = "score must be between 0 and 20"))]
    pub score: Option<i32>,

    #[serde(alias = "missingPoints")]
    pub missing_points: Option<Vec<String>>,

    #[validate(length(min = 1, max = 5000, message = "content must be 1-5000 characters"))]
    pub content: Option<String>,
}

impl From<FeedbackRequest> for CreateFeedback {
    fn from(req: FeedbackRequest) -> Self {
        Self {
            user_id: req.user_id,
            submission_id: req.submission_id,
            score: req.score,
            missing_points: req.missing_points.unwrap_or_default(),
            content: req.content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub id: i64,
    pub user_id: i64,
    pub submission_id: Option<i64>,
    pub score: Option<i32>,
    pub content: String,
    pub status: FeedbackStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Feedback> for FeedbackResponse {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id,
            user_id: feedback.user_id,
            submission_id: feedback.submission_id,
            score: feedback.score,
            content: feedback.content,
            status: feedback.status,
            created_at: feedback.created_at.to_rfc3339(),
            updated_at: feedback.updated_at.to_rfc3339(),
        }
    }
}

/// Body of `POST /feedback/generate`.
///
/// Every field is optional. `student_text` and `reference_text` are accepted
/// for compatibility but do not influence the generated text.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFeedbackRequest {
    #[serde(default, alias = "student_id", deserialize_with = "string_or_number")]
    pub student_id: Option<String>,

    pub score: Option<i32>,

    #[serde(alias = "missing_points")]
    pub missing_points: Option<Vec<String>>,

    #[serde(alias = "student_text")]
    pub student_text: Option<String>,

    #[serde(alias = "reference_text")]
    pub reference_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateFeedbackResponse {
    pub feedback: String,
}

/// `?status=` on `PUT /feedback/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: FeedbackStatus,
}

/// Student ids arrive as strings from some clients and as numbers from others.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    }))
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn validation_error_response(errors: &ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(format!(
            "Validation failed: {}",
            format_validation_errors(errors)
        ))),
    )
        .into_response()
}

/// Maps a store failure onto a status code and error envelope.
///
/// Database details are logged, never returned to the caller.
pub fn service_error_response(err: ServiceError) -> Response {
    let (status, message) = match &err {
        ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        ServiceError::InvalidTransition { .. } => {
            tracing::warn!(error = %err, "Rejected feedback status change");
            (StatusCode::CONFLICT, err.to_string())
        }
        ServiceError::Validation(msg) => {
            (StatusCode::BAD_REQUEST, format!("Validation failed: {msg}"))
        }
        ServiceError::Database(db_err) => {
            tracing::error!(error = %db_err, "Feedback store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };

    (status, Json(ApiResponse::<()>::error(message))).into_response()
}
