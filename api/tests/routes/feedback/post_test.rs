#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use db::models::feedback::{FeedbackStatus, Model as FeedbackModel};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn post_feedback(body: String) -> Request<AxumBody> {
        Request::builder()
            .method("POST")
            .uri("/api/feedback")
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(body))
            .unwrap()
    }

    /// Test Case: Content supplied by the caller is stored as-is
    #[tokio::test]
    async fn test_create_feedback_with_content() {
        let (app, _) = make_test_app().await;

        let body = json!({
            "user_id": 4,
            "submission_id": 17,
            "score": 14,
            "content": "Bonne structure, conclusion trop courte."
        });
        let response = app.oneshot(post_feedback(body.to_string())).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert!(json["id"].as_i64().unwrap() > 0);
        assert_eq!(json["user_id"], 4);
        assert_eq!(json["submission_id"], 17);
        assert_eq!(json["score"], 14);
        assert_eq!(json["content"], "Bonne structure, conclusion trop courte.");
        assert_eq!(json["status"], "pending");
        assert!(json["created_at"].is_string());
        assert!(json["updated_at"].is_string());
    }

    /// Test Case: Missing content is generated from score and missing points
    #[tokio::test]
    async fn test_create_feedback_generates_content() {
        let (app, app_state) = make_test_app().await;

        let body = json!({
            "userId": 9,
            "score": 7,
            "missingPoints": ["grammaire", "structure"]
        });
        let response = app.oneshot(post_feedback(body.to_string())).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(
            json["content"],
            "Des efforts supplémentaires sont nécessaires. Il est important de revoir les concepts clés. \n\nPoints à améliorer : grammaire, structure"
        );
        assert_eq!(json["status"], "generated");
        assert_eq!(json["submission_id"], Value::Null);

        let stored = FeedbackModel::find_by_id(app_state.db(), json["id"].as_i64().unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, FeedbackStatus::Generated);
        assert_eq!(stored.user_id, 9);
    }

    /// Test Case: Field validation failures are reported together
    #[tokio::test]
    async fn test_create_feedback_validation_failure() {
        let (app, app_state) = make_test_app().await;

        let body = json!({ "user_id": 0, "score": 21 });
        let response = app.oneshot(post_feedback(body.to_string())).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["data"], Value::Null);
        let message = json["message"].as_str().unwrap();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("user_id must be a positive integer"));
        assert!(message.contains("score must be between 0 and 20"));

        assert!(FeedbackModel::find_all(app_state.db()).await.unwrap().is_empty());
    }

    /// Test Case: Empty content is rejected rather than regenerated
    #[tokio::test]
    async fn test_create_feedback_rejects_empty_content() {
        let (app, _) = make_test_app().await;

        let body = json!({ "user_id": 1, "content": "" });
        let response = app.oneshot(post_feedback(body.to_string())).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .contains("content must be 1-5000 characters")
        );
    }

    /// Test Case: A body missing required fields never reaches the store
    #[tokio::test]
    async fn test_create_feedback_missing_user_id() {
        let (app, app_state) = make_test_app().await;

        let response = app
            .oneshot(post_feedback(json!({ "score": 12 }).to_string()))
            .await
            .unwrap();
        assert!(response.status().is_client_error());

        assert!(FeedbackModel::find_all(app_state.db()).await.unwrap().is_empty());
    }

    /// Test Case: Body that is not JSON at all
    #[tokio::test]
    async fn test_create_feedback_malformed_json() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(post_feedback("{ not json".to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
