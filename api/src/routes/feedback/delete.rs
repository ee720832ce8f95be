use crate::routes::feedback::common::service_error_response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// DELETE /api/feedback/{id}
///
/// Unlike most deletes on the platform this is not idempotent: deleting an
/// id that does not exist is reported so callers can tell it apart from a
/// successful removal.
///
/// ### Responses
/// - `204 No Content`: deleted, empty body
/// - `404 Not Found`: no record with this id
/// - `500 Internal Server Error`: database failure
pub async fn delete_feedback(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match app_state.feedback().delete_feedback(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => service_error_response(e),
    }
}
