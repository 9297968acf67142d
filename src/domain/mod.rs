//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `catalog` - Question templates, follow-up rules and template selection
//! - `questionnaire` - Session state machine over a growing question list
//! - `report` - Risk scoring and self-care guidance

pub mod catalog;
pub mod foundation;
pub mod questionnaire;
pub mod report;
