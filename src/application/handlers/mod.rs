//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod questionnaire;

pub use questionnaire::{
    GetCurrentQuestionHandler, GetCurrentQuestionQuery, GetCurrentQuestionResult,
    GetReportHandler, GetReportQuery,
    HealthHandler, HealthResult,
    NavigationAction, SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult,
    StartQuestionnaireCommand, StartQuestionnaireHandler, StartQuestionnaireResult,
};
