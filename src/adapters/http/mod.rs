//! HTTP adapters - REST API implementations.
//!
//! [`app_router`] mounts the questionnaire endpoints and wraps them in the
//! shared middleware stack (outermost first): trace, CORS, request timeout.

pub mod questionnaire;

pub use questionnaire::{questionnaire_router, QuestionnaireAppState};

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{ServerConfig, ValidationError};

/// Builds the full application router for `state`.
///
/// # Errors
///
/// Returns `InvalidCorsOrigin` if a configured origin is not a valid header value.
pub fn app_router(
    state: QuestionnaireAppState,
    server: &ServerConfig,
) -> Result<Router, ValidationError> {
    Ok(questionnaire_router()
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(server)?)
                .layer(TimeoutLayer::new(server.request_timeout())),
        ))
}

fn cors_layer(server: &ServerConfig) -> Result<CorsLayer, ValidationError> {
    let origins = server.cors_header_values()?;
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ids::UuidSessionIdGenerator;
    use crate::adapters::storage::InMemorySessionRegistry;
    use crate::domain::catalog::TemplateCatalog;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> QuestionnaireAppState {
        QuestionnaireAppState::new(
            TemplateCatalog::builtin(),
            Arc::new(InMemorySessionRegistry::new()),
            Arc::new(UuidSessionIdGenerator),
        )
    }

    #[tokio::test]
    async fn any_origin_allowed_by_default() {
        let app = app_router(state(), &ServerConfig::default()).unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health_check")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn configured_origins_are_echoed() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };
        let app = app_router(state(), &server).unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health_check")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let server = ServerConfig {
            cors_origins: Some("bad\norigin".to_string()),
            ..Default::default()
        };
        assert!(app_router(state(), &server).is_err());
    }
}
