//! StartQuestionnaireHandler - Command handler for starting a questionnaire.

use std::sync::Arc;

use crate::domain::catalog::{Category, TemplateCatalog};
use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::{QuestionView, QuestionnaireError, QuestionnaireSession};
use crate::ports::{SessionIdGenerator, SessionRegistry};

/// Command to start a questionnaire from free-text symptoms.
#[derive(Debug, Clone)]
pub struct StartQuestionnaireCommand {
    pub symptom: String,
    /// Defaults to `symptom` when absent.
    pub description: Option<String>,
}

/// Result of starting a questionnaire.
#[derive(Debug, Clone)]
pub struct StartQuestionnaireResult {
    pub session_id: SessionId,
    pub category: Category,
    pub question: Option<QuestionView>,
}

/// Handler for starting questionnaires.
pub struct StartQuestionnaireHandler {
    catalog: Arc<TemplateCatalog>,
    registry: Arc<dyn SessionRegistry>,
    id_generator: Arc<dyn SessionIdGenerator>,
}

impl StartQuestionnaireHandler {
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

    pub async fn handle(
        &self,
        cmd: StartQuestionnaireCommand,
    ) -> Result<StartQuestionnaireResult, QuestionnaireError> {
        // 1. Pick a template from the symptom text
        let category = self.catalog.select(&cmd.symptom);
        let description = cmd.description.unwrap_or_else(|| cmd.symptom.clone());

        // 2. Create the session aggregate
        let session_id = self.id_generator.next_id();
        let session =
            QuestionnaireSession::create(session_id, category, description, &self.catalog)?;
        let category = session.category();
        let question = session.current_question();

        // 3. Register it
        self.registry.put(session).await?;

        tracing::info!(
            session_id = %session_id,
            category = %category,
            "Questionnaire started"
        );

        Ok(StartQuestionnaireResult {
            session_id,
            category,
            question,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionRegistry;
    use crate::application::handlers::questionnaire::test_support::{
        FailingRegistry, FixedIdGenerator,
    };

    fn handler(registry: Arc<dyn SessionRegistry>, id: SessionId) -> StartQuestionnaireHandler {
        StartQuestionnaireHandler::new(
            TemplateCatalog::builtin(),
            registry,
            Arc::new(FixedIdGenerator(id)),
        )
    }

    fn command(symptom: &str) -> StartQuestionnaireCommand {
        StartQuestionnaireCommand {
            symptom: symptom.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn selects_category_and_registers_session() {
        let registry = Arc::new(InMemorySessionRegistry::new());
        let id = SessionId::new();
        let result = handler(registry.clone(), id)
            .handle(command("Bad migraine since morning"))
            .await
            .unwrap();

        assert_eq!(result.session_id, id);
        assert_eq!(result.category, Category::Headache);
        let question = result.question.unwrap();
        assert_eq!(question.current, 1);
        assert_eq!(question.total, 12);

        let stored = registry.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.lock().await.description(), "Bad migraine since morning");
    }

    #[tokio::test]
    async fn unmatched_symptom_uses_default_category() {
        let registry = Arc::new(InMemorySessionRegistry::new());
        let result = handler(registry, SessionId::new())
            .handle(command("itchy elbow"))
            .await
            .unwrap();
        assert_eq!(result.category, Category::Stomach);
    }

    #[tokio::test]
    async fn explicit_description_is_kept() {
        let registry = Arc::new(InMemorySessionRegistry::new());
        let id = SessionId::new();
        handler(registry.clone(), id)
            .handle(StartQuestionnaireCommand {
                symptom: "cough".to_string(),
                description: Some("Dry cough for a week".to_string()),
            })
            .await
            .unwrap();

        let stored = registry.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.lock().await.description(), "Dry cough for a week");
    }

    #[tokio::test]
    async fn registry_failure_is_infrastructure_error() {
        let err = handler(Arc::new(FailingRegistry), SessionId::new())
            .handle(command("fever"))
            .await
            .unwrap_err();
        assert!(matches!(err, QuestionnaireError::Infrastructure(_)));
    }
}
