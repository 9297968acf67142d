//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (start, submit) mutate sessions; queries (current question,
//! report, health) only read them.

pub mod handlers;

pub use handlers::{
    GetCurrentQuestionHandler, GetCurrentQuestionQuery, GetCurrentQuestionResult,
    GetReportHandler, GetReportQuery,
    HealthHandler, HealthResult,
    NavigationAction, SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult,
    StartQuestionnaireCommand, StartQuestionnaireHandler, StartQuestionnaireResult,
};
