//! # Feedback Creation Routes
//!
//! - `POST /api/feedback/generate`: Generate a comment from a score
//! - `POST /api/feedback`: Create a feedback record

use crate::routes::feedback::common::{
    FeedbackRequest, FeedbackResponse, GenerateFeedbackRequest, GenerateFeedbackResponse,
    service_error_response, validation_error_response,
};
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use services::feedback_text::generate_feedback_text;
use validator::Validate;

/// POST /api/feedback/generate
///
/// Produces a French comment from a score (out of 20) and the points the
/// student missed. Nothing is stored.
///
/// ### Request Body
/// ```json
/// {
///   "studentId": "u123",
///   "score": 7,
///   "missingPoints": ["grammaire", "structure"],
///   "studentText": "...",
///   "referenceText": "..."
/// }
/// ```
/// All fields are optional; a missing `score` counts as 0.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "feedback": "Des efforts supplémentaires sont nécessaires. Il est important de revoir les concepts clés. \n\nPoints à améliorer : grammaire, structure"
/// }
/// ```
pub async fn generate_feedback(Json(req): Json<GenerateFeedbackRequest>) -> impl IntoResponse {
    tracing::debug!(
        student_id = req.student_id.as_deref().unwrap_or("unknown"),
        score = ?req.score,
        "Generating feedback text"
    );

    let missing_points = req.missing_points.as_deref().unwrap_or_default();
    let feedback = generate_feedback_text(req.score, missing_points);

    (StatusCode::OK, Json(GenerateFeedbackResponse { feedback }))
}

/// POST /api/feedback
///
/// Creates a feedback record.
///
/// ### Request Body
/// ```json
/// {
///   "user_id": 4,
///   "submission_id": 17,
///   "score": 14,
///   "missing_points": ["conclusion"],
///   "content": "Optional. Generated from score and missing_points when absent."
/// }
/// ```
///
/// ### Response: 201 Created
/// The created record as a `FeedbackResponse`.
///
/// ### Errors:
/// - 400 Bad Request: Validation failure
/// - 422 Unprocessable Entity: Body does not match the expected shape
/// - 500 Internal Server Error: Database failure
pub async fn create_feedback(
    State(app_state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return validation_error_response(&e);
    }

    match app_state.feedback().create_feedback(req.into()).await {
        Ok(feedback) => (
            StatusCode::CREATED,
            Json(FeedbackResponse::from(feedback)),
        )
            .into_response(),
        Err(e) => service_error_response(e),
    }
}
