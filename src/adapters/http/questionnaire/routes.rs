//! Route configuration for questionnaire endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_current_question, get_report, health_check, home, start_questionnaire, submit_answer,
    QuestionnaireAppState,
};

/// Creates the questionnaire router with all endpoints.
///
/// Routes:
/// - `GET /` - Service banner
/// - `POST /start_questionnaire` - Start a session from symptom text
/// - `POST /submit_answer` - Answer and navigate (`next`, `previous`, `skip`)
/// - `POST /get_current_question` - Current question of a session
/// - `POST /get_report` - Risk report for a session
/// - `GET /health_check` - Health and active session count
pub fn questionnaire_router() -> Router<QuestionnaireAppState> {
    Router::new()
        .route("/", get(home))
        .route("/start_questionnaire", post(start_questionnaire))
        .route("/submit_answer", post(submit_answer))
        .route("/get_current_question", post(get_current_question))
        .route("/get_report", post(get_report))
        .route("/health_check", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ids::UuidSessionIdGenerator;
    use crate::adapters::storage::InMemorySessionRegistry;
    use crate::domain::catalog::TemplateCatalog;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = QuestionnaireAppState::new(
            TemplateCatalog::builtin(),
            Arc::new(InMemorySessionRegistry::new()),
            Arc::new(UuidSessionIdGenerator),
        );
        questionnaire_router().with_state(state)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn banner_lists_endpoints() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "Medical Questionnaire API is running!");
        assert!(body["endpoints"].as_array().unwrap().len() >= 4);
    }

    #[tokio::test]
    async fn start_returns_first_question() {
        let response = app()
            .oneshot(post_json(
                "/start_questionnaire",
                serde_json::json!({"symptom": "I have a fever"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["category"], "fever");
        assert_eq!(body["message"], "Starting questionnaire for: I have a fever");
        assert_eq!(body["question"]["id"], "temperature");
        assert_eq!(body["question"]["current"], 1);
        assert_eq!(body["question"]["total"], 10);
    }

    #[tokio::test]
    async fn unknown_session_is_404() {
        let response = app()
            .oneshot(post_json(
                "/get_current_question",
                serde_json::json!({"session_id": "does-not-exist"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body, serde_json::json!({"success": false, "error": "Invalid session"}));
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/submit_answer")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["success"], false);
    }

    #[tokio::test]
    async fn unknown_action_is_rejected_without_recording() {
        let app = app();
        let started = json_body(
            app.clone()
                .oneshot(post_json("/start_questionnaire", serde_json::json!({"symptom": "stomach"})))
                .await
                .unwrap(),
        )
        .await;
        let session_id = started["session_id"].clone();

        let response = app
            .clone()
            .oneshot(post_json(
                "/submit_answer",
                serde_json::json!({"session_id": session_id, "answer": "Yes", "action": "jump"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["success"], false);

        let report = json_body(
            app.oneshot(post_json("/get_report", serde_json::json!({"session_id": session_id})))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(report["report"]["questions_answered"], 0);
        assert_eq!(report["report"]["total_questions"], 12);
    }

    #[tokio::test]
    async fn health_check_reports_zero_sessions() {
        let response = app()
            .oneshot(Request::builder().uri("/health_check").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["active_sessions"], 0);
    }
}
