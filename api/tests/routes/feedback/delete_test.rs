#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use db::models::feedback::{FeedbackStatus, Model as FeedbackModel};
    use tower::ServiceExt;

    fn request(method: &str, uri: &str) -> Request<AxumBody> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(AxumBody::empty())
            .unwrap()
    }

    /// Test Case: Delete then read back
    #[tokio::test]
    async fn test_delete_feedback_success() {
        let (app, app_state) = make_test_app().await;
        let feedback =
            FeedbackModel::create(app_state.db(), 5, None, None, "À supprimer", FeedbackStatus::Pending)
                .await
                .unwrap();
        let uri = format!("/api/feedback/{}", feedback.id);

        let response = app.clone().oneshot(request("DELETE", &uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());

        let response = app.oneshot(request("GET", &uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Test Case: Deleting twice reports the second attempt as not found
    #[tokio::test]
    async fn test_delete_feedback_twice() {
        let (app, app_state) = make_test_app().await;
        let feedback =
            FeedbackModel::create(app_state.db(), 5, None, None, "Une fois", FeedbackStatus::Pending)
                .await
                .unwrap();
        let uri = format!("/api/feedback/{}", feedback.id);

        let first = app.clone().oneshot(request("DELETE", &uri)).await.unwrap();
        assert_eq!(first.status(), StatusCode::NO_CONTENT);

        let second = app.oneshot(request("DELETE", &uri)).await.unwrap();
        assert_eq!(second.status(), StatusCode::NOT_FOUND);

        let json = body_json(second).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], format!("Feedback {} not found", feedback.id));
    }

    /// Test Case: Other records are untouched
    #[tokio::test]
    async fn test_delete_feedback_leaves_others() {
        let (app, app_state) = make_test_app().await;
        let doomed =
            FeedbackModel::create(app_state.db(), 5, None, None, "a", FeedbackStatus::Pending)
                .await
                .unwrap();
        let kept =
            FeedbackModel::create(app_state.db(), 5, None, None, "b", FeedbackStatus::Pending)
                .await
                .unwrap();

        let uri = format!("/api/feedback/{}", doomed.id);
        let response = app.oneshot(request("DELETE", &uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let remaining = FeedbackModel::find_all(app_state.db()).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);
    }
}
