#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn generate(body: Value) -> (StatusCode, Value) {
        let (app, _) = make_test_app().await;
        let req = Request::builder()
            .method("POST")
            .uri("/api/feedback/generate")
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        (status, body_json(response).await)
    }

    #[tokio::test]
    async fn high_score_without_missing_points() {
        let (status, json) = generate(json!({ "score": 18, "missingPoints": [] })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["feedback"],
            "Excellent travail ! Vous avez démontré une très bonne compréhension du sujet. "
        );
    }

    #[tokio::test]
    async fn low_score_lists_missing_points_in_order() {
        let (status, json) = generate(json!({
            "studentId": "u123",
            "score": 7,
            "missingPoints": ["grammaire", "structure"],
            "studentText": "Mon essai",
            "referenceText": "Le corrigé"
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["feedback"],
            "Des efforts supplémentaires sont nécessaires. Il est important de revoir les concepts clés. \n\nPoints à améliorer : grammaire, structure"
        );
    }

    #[tokio::test]
    async fn response_is_not_wrapped_in_envelope() {
        let (_, json) = generate(json!({ "score": 12 })).await;

        assert!(json.get("success").is_none());
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(
            json["feedback"],
            "Bon travail ! Vous avez une bonne compréhension globale, mais quelques améliorations sont possibles. "
        );
    }

    #[tokio::test]
    async fn null_and_empty_inputs_are_equivalent() {
        let (_, with_nulls) = generate(json!({ "score": null, "missingPoints": null })).await;
        let (_, empty_body) = generate(json!({})).await;
        let (_, zero) = generate(json!({ "score": 0, "missingPoints": [] })).await;

        assert_eq!(with_nulls, empty_body);
        assert_eq!(empty_body, zero);
        assert_eq!(
            zero["feedback"],
            "Des efforts supplémentaires sont nécessaires. Il est important de revoir les concepts clés. "
        );
    }

    #[tokio::test]
    async fn tier_boundaries() {
        let (_, ten) = generate(json!({ "score": 10 })).await;
        let (_, nine) = generate(json!({ "score": 9 })).await;
        let (_, sixteen) = generate(json!({ "score": 16 })).await;

        assert!(ten["feedback"].as_str().unwrap().starts_with("Travail satisfaisant. "));
        assert!(nine["feedback"].as_str().unwrap().starts_with("Des efforts supplémentaires"));
        assert!(sixteen["feedback"].as_str().unwrap().starts_with("Excellent travail ! "));
    }

    #[tokio::test]
    async fn snake_case_fields_and_numeric_student_id_are_accepted() {
        let (status, json) = generate(json!({
            "student_id": 42,
            "score": 14,
            "missing_points": ["conclusion"]
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(
            json["feedback"]
                .as_str()
                .unwrap()
                .ends_with("\n\nPoints à améliorer : conclusion")
        );
    }
}
