//! Report module - risk scoring and self-care guidance.

mod guidance;
mod report;
mod risk;

pub use guidance::{Guidance, Medication};
pub use report::{AnswerDetail, Report, ReportGenerator, DISCLAIMER};
pub use risk::{RiskScorer, Severity, HIGH_CONCERN_ANSWERS, HIGH_THRESHOLD, MODERATE_THRESHOLD};
