//! Feedback routes.
//!
//! - `POST   /feedback/generate`          → [`post::generate_feedback`]
//! - `POST   /feedback`                   → [`post::create_feedback`]
//! - `GET    /feedback`                   → [`get::get_all_feedbacks`]
//! - `GET    /feedback/{id}`              → [`get::get_feedback_by_id`]
//! - `GET    /feedback/user/{user_id}`    → [`get::get_feedbacks_by_user_id`]
//! - `GET    /feedback/status/{status}`   → [`get::get_feedbacks_by_status`]
//! - `PUT    /feedback/{id}/status`       → [`put::update_feedback_status`]
//! - `DELETE /feedback/{id}`              → [`delete::delete_feedback`]
//!
//! Handlers hold no logic of their own beyond binding and validation; every
//! operation is forwarded to the [`FeedbackStore`](services::FeedbackStore)
//! in `AppState`.

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/generate", post(post::generate_feedback))
        .route(
            "/",
            post(post::create_feedback).get(get::get_all_feedbacks),
        )
        .route(
            "/{id}",
            get(get::get_feedback_by_id).delete(delete::delete_feedback),
        )
        .route("/user/{user_id}", get(get::get_feedbacks_by_user_id))
        .route("/status/{status}", get(get::get_feedbacks_by_status))
        .route("/{id}/status", put(put::update_feedback_status))
}
