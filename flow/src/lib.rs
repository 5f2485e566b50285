//! Intestacy Flow - Question Graph Layer
//!
//! This crate defines the **structural** side of the interview:
//! - `QuestionId`: the closed catalogue of yes/no questions
//! - `QuestionFlow`: the transition table between questions
//! - `FlowState`: position in the graph
//! - `Schematic`: serialisable view of the graph
//!
//! **IMPORTANT**: This layer is Pure Rust - no IO, no Async.

pub mod question;
pub mod schematic;
pub mod state;
pub mod transition;

pub use question::{Question, QuestionId, UNKNOWN_QUESTION_TEXT, UnknownQuestionError, catalog};
pub use schematic::Schematic;
pub use state::FlowState;
pub use transition::{AnswerSource, QuestionFlow};
