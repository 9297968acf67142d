//! Template catalog module.
//!
//! Static question templates per symptom category, the conditional follow-up
//! map, and keyword-based template selection.

mod builtin;
mod catalog;
mod category;
mod errors;
mod question;
mod selector;
mod template;

pub use catalog::TemplateCatalog;
pub use category::Category;
pub use errors::CatalogError;
pub use question::{Question, QuestionKind, Weight, IMPLIED_YES_NO};
pub use selector::TemplateSelector;
pub use template::{FollowUpsByAnswer, Template};
