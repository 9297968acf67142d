//! HTTP handlers for questionnaire endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    GetCurrentQuestionHandler, GetCurrentQuestionQuery, GetReportHandler, GetReportQuery,
    HealthHandler, StartQuestionnaireCommand, StartQuestionnaireHandler, SubmitAnswerCommand,
    SubmitAnswerHandler,
};
use crate::domain::catalog::TemplateCatalog;
use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::QuestionnaireError;
use crate::ports::{SessionIdGenerator, SessionRegistry};

use super::dto::{
    BannerResponse, CurrentQuestionResponse, ErrorResponse, HealthResponse, ReportEnvelope,
    SessionRequest, StartQuestionnaireRequest, StartQuestionnaireResponse, SubmitAnswerRequest,
    SubmitAnswerResponse,
};

const ENDPOINTS: &[&str] = &[
    "/start_questionnaire",
    "/submit_answer",
    "/get_current_question",
    "/get_report",
    "/health_check",
];

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct QuestionnaireAppState {
    pub catalog: Arc<TemplateCatalog>,
    pub registry: Arc<dyn SessionRegistry>,
    pub id_generator: Arc<dyn SessionIdGenerator>,
}

impl QuestionnaireAppState {
    pub fn new(
        catalog: Arc<TemplateCatalog>,
        registry: Arc<dyn SessionRegistry>,
        id_generator: Arc<dyn SessionIdGenerator>,
    ) -> Self {
        Self {
            catalog,
            registry,
            id_generator,
        }
    }

    pub fn start_handler(&self) -> StartQuestionnaireHandler {
        StartQuestionnaireHandler::new(
            self.catalog.clone(),
            self.registry.clone(),
            self.id_generator.clone(),
        )
    }

    pub fn submit_handler(&self) -> SubmitAnswerHandler {
        SubmitAnswerHandler::new(self.registry.clone())
    }

    pub fn current_question_handler(&self) -> GetCurrentQuestionHandler {
        GetCurrentQuestionHandler::new(self.registry.clone())
    }

    pub fn report_handler(&self) -> GetReportHandler {
        GetReportHandler::new(self.registry.clone())
    }

    pub fn health_handler(&self) -> HealthHandler {
        HealthHandler::new(self.registry.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Service banner
pub async fn home() -> Json<BannerResponse> {
    Json(BannerResponse {
        status: "Medical Questionnaire API is running!",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS,
    })
}

/// POST /start_questionnaire - Select a template and open a session
pub async fn start_questionnaire(
    State(state): State<QuestionnaireAppState>,
    payload: Result<Json<StartQuestionnaireRequest>, JsonRejection>,
) -> Result<impl IntoResponse, QuestionnaireApiError> {
    let Json(req) = payload?;
    let message = format!("Starting questionnaire for: {}", req.symptom);

    let result = state
        .start_handler()
        .handle(StartQuestionnaireCommand {
            symptom: req.symptom,
            description: req.description,
        })
        .await?;

    Ok(Json(StartQuestionnaireResponse {
        success: true,
        session_id: result.session_id.to_string(),
        category: result.category,
        message,
        question: result.question,
    }))
}

/// POST /submit_answer - Record an answer and navigate
pub async fn submit_answer(
    State(state): State<QuestionnaireAppState>,
    payload: Result<Json<SubmitAnswerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, QuestionnaireApiError> {
    let Json(req) = payload?;
    let session_id = parse_session_id(&req.session_id)?;

    let result = state
        .submit_handler()
        .handle(SubmitAnswerCommand {
            session_id,
            answer: req.answer,
            action: req.action,
        })
        .await?;

    let response = if result.completed {
        SubmitAnswerResponse {
            success: true,
            completed: true,
            question: None,
            message: Some("Questionnaire completed!".to_string()),
            session_id: Some(session_id.to_string()),
        }
    } else {
        SubmitAnswerResponse {
            success: true,
            completed: false,
            question: result.question,
            message: None,
            session_id: None,
        }
    };
    Ok(Json(response))
}

/// POST /get_current_question - Read the question under the cursor
pub async fn get_current_question(
    State(state): State<QuestionnaireAppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, QuestionnaireApiError> {
    let Json(req) = payload?;
    let session_id = parse_session_id(&req.session_id)?;

    let result = state
        .current_question_handler()
        .handle(GetCurrentQuestionQuery { session_id })
        .await?;

    Ok(Json(CurrentQuestionResponse {
        success: true,
        question: result.question,
        completed: result.completed,
    }))
}

/// POST /get_report - Generate the risk report
pub async fn get_report(
    State(state): State<QuestionnaireAppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, QuestionnaireApiError> {
    let Json(req) = payload?;
    let session_id = parse_session_id(&req.session_id)?;

    let report = state
        .report_handler()
        .handle(GetReportQuery { session_id })
        .await?;

    Ok(Json(ReportEnvelope {
        success: true,
        report: report.into(),
    }))
}

/// GET /health_check - Liveness and session count
pub async fn health_check(
    State(state): State<QuestionnaireAppState>,
) -> Result<impl IntoResponse, QuestionnaireApiError> {
    let result = state.health_handler().handle().await?;
    Ok(Json(HealthResponse {
        status: "healthy",
        active_sessions: result.active_sessions,
        timestamp: result.timestamp.to_rfc3339(),
    }))
}

/// Unparseable ids cannot name a registered session.
fn parse_session_id(raw: &str) -> Result<SessionId, QuestionnaireApiError> {
    raw.parse::<SessionId>()
        .map_err(|_| QuestionnaireError::invalid_session(raw).into())
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub enum QuestionnaireApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<QuestionnaireError> for QuestionnaireApiError {
    fn from(err: QuestionnaireError) -> Self {
        match err {
            QuestionnaireError::InvalidSession(_) => QuestionnaireApiError::NotFound(err.message()),
            QuestionnaireError::NoCurrentQuestion => {
                QuestionnaireApiError::BadRequest(err.message())
            }
            QuestionnaireError::InvalidCategory(_) | QuestionnaireError::Infrastructure(_) => {
                tracing::error!(code = %err.code(), error = %err, "Questionnaire request failed");
                QuestionnaireApiError::Internal(err.message())
            }
        }
    }
}

impl From<JsonRejection> for QuestionnaireApiError {
    fn from(rejection: JsonRejection) -> Self {
        QuestionnaireApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for QuestionnaireApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            QuestionnaireApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            QuestionnaireApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            QuestionnaireApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
