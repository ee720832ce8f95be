use crate::routes::feedback::common::{FeedbackResponse, StatusQuery, service_error_response};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

/// PUT /api/feedback/{id}/status?status={status}
///
/// Moves a feedback record to another review stage.
///
/// ### Responses
/// - `200 OK`: the updated record
/// - `400 Bad Request`: missing or unknown `status`, or non-integer id
/// - `404 Not Found`: no record with this id
/// - `409 Conflict`: the record is `published` and cannot change stage
pub async fn update_feedback_status(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<StatusQuery>,
) -> impl IntoResponse {
    match app_state
        .feedback()
        .update_feedback_status(id, query.status)
        .await
    {
        Ok(feedback) => (StatusCode::OK, Json(FeedbackResponse::from(feedback))).into_response(),
        Err(e) => service_error_response(e),
    }
}
