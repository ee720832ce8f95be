//! Feedback read handlers.
//!
//! Lists are returned in id order. A status that is not one of
//! `pending`, `generated`, `reviewed`, `published` (any casing) is rejected
//! by the `Path` extractor with `400 Bad Request` before the store is touched.

use crate::routes::feedback::common::{FeedbackResponse, service_error_response};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::{Feedback, FeedbackStatus, ServiceError};

fn list_response(result: Result<Vec<Feedback>, ServiceError>) -> Response {
    match result {
        Ok(feedbacks) => {
            let body: Vec<FeedbackResponse> =
                feedbacks.into_iter().map(FeedbackResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => service_error_response(e),
    }
}

/// GET /api/feedback/{id}
///
/// ### Responses
/// - `200 OK`: the record
/// - `404 Not Found`: no record with this id
/// - `400 Bad Request`: id is not an integer
pub async fn get_feedback_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match app_state.feedback().get_feedback_by_id(id).await {
        Ok(feedback) => (StatusCode::OK, Json(FeedbackResponse::from(feedback))).into_response(),
        Err(e) => service_error_response(e),
    }
}

/// GET /api/feedback
pub async fn get_all_feedbacks(State(app_state): State<AppState>) -> impl IntoResponse {
    list_response(app_state.feedback().get_all_feedbacks().await)
}

/// GET /api/feedback/user/{user_id}
///
/// Returns an empty list when the user has no feedback.
pub async fn get_feedbacks_by_user_id(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
) -> impl IntoResponse {
    list_response(app_state.feedback().get_feedbacks_by_user_id(user_id).await)
}

/// GET /api/feedback/status/{status}
pub async fn get_feedbacks_by_status(
    State(app_state): State<AppState>,
    Path(status): Path<FeedbackStatus>,
) -> impl IntoResponse {
    list_response(app_state.feedback().get_feedbacks_by_status(status).await)
}
