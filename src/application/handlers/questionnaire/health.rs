//! HealthHandler - Query handler for service health.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::questionnaire::QuestionnaireError;
use crate::ports::SessionRegistry;

#[derive(Debug, Clone)]
pub struct HealthResult {
    pub active_sessions: usize,
    pub timestamp: Timestamp,
}

pub struct HealthHandler {
    registry: Arc<dyn SessionRegistry>,
}

impl HealthHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self) -> Result<HealthResult, QuestionnaireError> {
        Ok(HealthResult {
            active_sessions: self.registry.count().await?,
            timestamp: Timestamp::now(),
        })
    }
}
