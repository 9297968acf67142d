//! Questionnaire module - the session state machine.
//!
//! Navigation over a working list of questions that grows as answers
//! trigger follow-ups.

mod answer;
mod errors;
mod session;
mod status;
mod view;

pub use answer::{Answer, NOT_ANSWERED, SKIPPED};
pub use errors::QuestionnaireError;
pub use session::{Advance, QuestionnaireSession};
pub use status::QuestionnaireStatus;
pub use view::QuestionView;
