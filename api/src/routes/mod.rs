//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint
//! - `/feedback` → Feedback records and feedback text generation

use crate::routes::{feedback::feedback_routes, health::health_routes};
use crate::state::AppState;
use axum::Router;

pub mod feedback;
pub mod health;

/// Builds the router for every HTTP endpoint, with `app_state` already applied.
///
/// Mount it under `/api`:
///
/// ```ignore
/// let app = Router::new().nest("/api", routes(app_state));
/// ```
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/feedback", feedback_routes())
        .with_state(app_state)
}
