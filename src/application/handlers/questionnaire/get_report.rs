//! GetReportHandler - Query handler for a session's risk report.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::QuestionnaireError;
use crate::domain::report::{Report, ReportGenerator};
use crate::ports::SessionRegistry;

use super::find_session;

/// Query for the report of a session.
#[derive(Debug, Clone)]
pub struct GetReportQuery {
    pub session_id: SessionId,
}

/// Handler for generating reports. Works at any point in the questionnaire.
pub struct GetReportHandler {
    registry: Arc<dyn SessionRegistry>,
}

impl GetReportHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, query: GetReportQuery) -> Result<Report, QuestionnaireError> {
        let shared = find_session(self.registry.as_ref(), &query.session_id).await?;
        let report = ReportGenerator::generate(&*shared.lock().await);

        tracing::info!(
            session_id = %query.session_id,
            risk_score = report.risk_score,
            severity = %report.severity,
            "Report generated"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionRegistry;
    use crate::application::handlers::questionnaire::test_support::FailingRegistry;
    use crate::domain::catalog::{Category, TemplateCatalog};
    use crate::domain::questionnaire::QuestionnaireSession;
    use crate::domain::report::Severity;

    #[tokio::test]
    async fn generates_report_for_partial_session() {
        let registry = Arc::new(InMemorySessionRegistry::new());
        let id = SessionId::new();
        let mut session =
            QuestionnaireSession::create(id, Category::Fever, "hot", &TemplateCatalog::builtin())
                .unwrap();
        session.submit_answer("Above 103°F").unwrap();
        registry.put(session).await.unwrap();

        let report = GetReportHandler::new(registry)
            .handle(GetReportQuery { session_id: id })
            .await
            .unwrap();

        assert_eq!(report.session_id, id);
        assert_eq!(report.risk_score, 3);
        assert_eq!(report.severity, Severity::Low);
        assert_eq!(report.questions_answered, 1);
        assert_eq!(report.description, "hot");
    }

    #[tokio::test]
    async fn unknown_session_is_invalid() {
        let registry = Arc::new(InMemorySessionRegistry::new());
        let err = GetReportHandler::new(registry)
            .handle(GetReportQuery {
                session_id: SessionId::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, QuestionnaireError::InvalidSession(_)));
    }

    #[tokio::test]
    async fn registry_failure_is_infrastructure_error() {
        let err = GetReportHandler::new(Arc::new(FailingRegistry))
            .handle(GetReportQuery {
                session_id: SessionId::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, QuestionnaireError::Infrastructure(_)));
    }
}
