//! Read-only view of the question under the cursor.

use serde::Serialize;

use crate::domain::catalog::{Question, QuestionKind};
use crate::domain::foundation::QuestionId;

/// The current question together with its position in the working list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub options: Vec<String>,
    /// 1-based position.
    pub current: usize,
    pub total: usize,
    /// `current / total * 100`.
    pub progress: f64,
}

impl QuestionView {
    /// Builds a view for `question` at 0-based `index` of a list of `total`.
    pub(crate) fn at(question: &Question, index: usize, total: usize) -> Self {
        let current = index + 1;
        Self {
            id: question.id.clone(),
            question: question.prompt.clone(),
            kind: question.kind,
            options: question.presented_options(),
            current,
            total,
            progress: current as f64 / total as f64 * 100.0,
        }
    }
}
