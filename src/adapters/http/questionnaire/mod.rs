//! HTTP adapter for questionnaire endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, ReportResponse, SessionRequest, StartQuestionnaireRequest,
    StartQuestionnaireResponse, SubmitAnswerRequest, SubmitAnswerResponse,
};
pub use handlers::{QuestionnaireApiError, QuestionnaireAppState};
pub use routes::questionnaire_router;
