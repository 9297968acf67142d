//! HTTP DTOs for questionnaire endpoints.
//!
//! Field names follow the public JSON contract of the questionnaire API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::NavigationAction;
use crate::domain::catalog::{Category, Weight};
use crate::domain::foundation::QuestionId;
use crate::domain::questionnaire::{Answer, QuestionView};
use crate::domain::report::{AnswerDetail, Medication, Report};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct StartQuestionnaireRequest {
    #[serde(default)]
    pub symptom: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    pub session_id: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub action: NavigationAction,
}

/// Request body carrying only a session id.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRequest {
    pub session_id: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct StartQuestionnaireResponse {
    pub success: bool,
    pub session_id: String,
    pub category: Category,
    pub message: String,
    pub question: Option<QuestionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerResponse {
    pub success: bool,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentQuestionResponse {
    pub success: bool,
    pub question: Option<QuestionView>,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEnvelope {
    pub success: bool,
    pub report: ReportResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerDetailResponse {
    pub question: String,
    pub answer: String,
    pub importance: Weight,
}

impl From<AnswerDetail> for AnswerDetailResponse {
    fn from(detail: AnswerDetail) -> Self {
        Self {
            question: detail.question,
            answer: detail.answer,
            importance: detail.importance,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub session_id: String,
    pub category: Category,
    pub initial_description: String,
    /// `%Y-%m-%d %H:%M`
    pub assessment_date: String,
    pub questions_answered: usize,
    pub total_questions: usize,
    pub severity: String,
    pub urgency: String,
    pub risk_score: u32,
    pub recommendations: Vec<String>,
    pub suggested_medications: Vec<Medication>,
    pub answers: BTreeMap<QuestionId, Answer>,
    pub detailed_answers: Vec<AnswerDetailResponse>,
    pub disclaimer: String,
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self {
            session_id: report.session_id.to_string(),
            category: report.category,
            initial_description: report.description,
            assessment_date: report.generated_at.to_minute_string(),
            questions_answered: report.questions_answered,
            total_questions: report.total_questions,
            severity: report.severity.label().to_string(),
            urgency: report.urgency.to_string(),
            risk_score: report.risk_score,
            recommendations: report.recommendations.iter().map(|r| r.to_string()).collect(),
            suggested_medications: report.medications.to_vec(),
            answers: report.answers,
            detailed_answers: report.details.into_iter().map(Into::into).collect(),
            disclaimer: report.disclaimer.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub active_sessions: usize,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BannerResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [&'static str],
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
