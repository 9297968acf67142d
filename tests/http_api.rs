//! Integration tests for the HTTP API.
//!
//! Requests go through the full application router, including the CORS,
//! trace and timeout layers.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use symptom_triage::adapters::http::{app_router, QuestionnaireAppState};
use symptom_triage::adapters::ids::UuidSessionIdGenerator;
use symptom_triage::adapters::storage::InMemorySessionRegistry;
use symptom_triage::config::ServerConfig;
use symptom_triage::domain::catalog::TemplateCatalog;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    let state = QuestionnaireAppState::new(
        TemplateCatalog::builtin(),
        Arc::new(InMemorySessionRegistry::new()),
        Arc::new(UuidSessionIdGenerator),
    );
    app_router(state, &ServerConfig::default()).unwrap()
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn full_questionnaire_over_http() {
    let app = app();

    let (status, start) = post(&app, "/start_questionnaire", json!({"symptom": "bad cough"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(start["success"], true);
    assert_eq!(start["category"], "cough");
    let session_id = start["session_id"].as_str().unwrap().to_string();

    let (_, health) = get(&app, "/health_check").await;
    assert_eq!(health["active_sessions"], 1);

    let (_, step) = post(
        &app,
        "/submit_answer",
        json!({"session_id": session_id, "answer": "Dry cough"}),
    )
    .await;
    assert_eq!(step["completed"], false);
    assert_eq!(step["question"]["current"], 2);

    let (_, back) = post(
        &app,
        "/submit_answer",
        json!({"session_id": session_id, "action": "previous"}),
    )
    .await;
    assert_eq!(back["question"]["id"], "cough_type");

    let mut last = Value::Null;
    for _ in 0..10 {
        let (_, body) = post(
            &app,
            "/submit_answer",
            json!({"session_id": session_id, "answer": "Yes"}),
        )
        .await;
        last = body;
    }
    assert_eq!(last["completed"], true);
    assert_eq!(last["message"], "Questionnaire completed!");
    assert_eq!(last["session_id"], session_id.as_str());

    let (_, current) = post(&app, "/get_current_question", json!({"session_id": session_id})).await;
    assert_eq!(current["completed"], true);
    assert_eq!(current["question"], Value::Null);

    let (status, report) = post(&app, "/get_report", json!({"session_id": session_id})).await;
    assert_eq!(status, StatusCode::OK);
    let report = &report["report"];
    assert_eq!(report["severity"], "High");
    assert_eq!(report["urgency"], "Seek immediate medical attention");
    assert_eq!(report["total_questions"], 10);
    assert_eq!(report["questions_answered"], 10);
    assert_eq!(report["recommendations"][1], "Use a humidifier");
}

#[tokio::test]
async fn report_is_available_mid_questionnaire() {
    let app = app();
    let (_, start) = post(&app, "/start_questionnaire", json!({"symptom": "fever"})).await;
    let session_id = start["session_id"].as_str().unwrap();

    let (status, body) = post(&app, "/get_report", json!({"session_id": session_id})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["report"]["risk_score"], 0);
    assert_eq!(body["report"]["detailed_answers"][0]["answer"], "Not answered");
    assert_eq!(body["report"]["initial_description"], "fever");
}

#[tokio::test]
async fn unknown_session_returns_404_on_every_session_endpoint() {
    let app = app();
    let missing = uuid::Uuid::new_v4().to_string();

    for uri in ["/submit_answer", "/get_current_question", "/get_report"] {
        let (status, body) = post(&app, uri, json!({"session_id": missing})).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Invalid session");
    }
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = app()
        .oneshot(Request::builder().uri("/next_question").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
