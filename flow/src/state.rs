//! FlowState - Position in the Question Graph
//!
//! An interview is either waiting on a question or has reached a terminal.
//! Advancing consumes the current state and produces the next one, so a
//! stale position can never be answered twice.
//!
//! # Example
//! ```rust
//! use intestacy_flow::{FlowState, QuestionId};
//!
//! let state = FlowState::active(QuestionId::Children).advance(false);
//! assert_eq!(state.current(), Some(QuestionId::ParentsAlive));
//! ```

use crate::question::QuestionId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "question", rename_all = "lowercase")]
pub enum FlowState {
    /// Waiting for an answer to this question
    Active(QuestionId),
    /// Branch exhausted - ready to calculate
    Terminal,
}

impl FlowState {
    /// Create a new active state
    pub fn active(question: QuestionId) -> Self {
        FlowState::Active(question)
    }

    /// Check if the flow has terminated
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::Terminal)
    }

    /// The question being asked, if any
    pub fn current(&self) -> Option<QuestionId> {
        match self {
            FlowState::Active(q) => Some(*q),
            FlowState::Terminal => None,
        }
    }

    /// Apply an answer to the current question.
    ///
    /// A terminal state stays terminal.
    pub fn advance(self, answer: bool) -> FlowState {
        match self {
            FlowState::Active(q) => q.next(answer).into(),
            FlowState::Terminal => FlowState::Terminal,
        }
    }
}

impl From<Option<QuestionId>> for FlowState {
    fn from(next: Option<QuestionId>) -> Self {
        next.map_or(FlowState::Terminal, FlowState::Active)
    }
}
