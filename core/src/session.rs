//! Session - One Interview
//!
//! A session owns the answer state of a single interview and decides, after
//! every answer, whether to ask another question or hand the state to the
//! engine. Sessions are values: [`Session::answer`] consumes the session and
//! returns its successor.
//!
//! Two signals can end an interview. The engine's
//! [`can_determine_distribution`](DistributionEngine::can_determine_distribution)
//! is checked first; the flow reaching a terminal is checked second.

use crate::answers::AnswerState;
use crate::distribution::{DistributionEngine, DistributionResult};
use intestacy_flow::{FlowState, Question, QuestionFlow, QuestionId};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Session {0} is complete; there is no question to answer")]
    Finished(Uuid),
    #[error("Answer for {answered} does not match the current question {current}")]
    OutOfTurn { answered: String, current: QuestionId },
}

/// What the interview needs next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStep {
    Ask(Question),
    Ready(DistributionResult),
}

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    engine: DistributionEngine,
    flow: QuestionFlow,
    state: AnswerState,
    position: FlowState,
}

impl Session {
    /// Begin an interview from a profile.
    ///
    /// If marital status is already in `state` the interview opens on the
    /// children question, otherwise on the married question.
    pub fn start(engine: DistributionEngine, state: AnswerState) -> Self {
        let flow = QuestionFlow::new();
        let first = flow.first_question_id(&state);
        let id = Uuid::new_v4();
        tracing::info!(session = %id, first = %first, "Interview started");

        Self {
            id,
            engine,
            flow,
            state,
            position: FlowState::active(first),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &AnswerState {
        &self.state
    }

    pub fn into_state(self) -> AnswerState {
        self.state
    }

    /// Whether the engine already has enough to calculate.
    pub fn can_determine(&self) -> bool {
        self.engine.can_determine_distribution(&self.state)
    }

    /// The question to ask next, or `None` once the interview is over.
    pub fn current_question(&self) -> Option<QuestionId> {
        if self.can_determine() {
            return None;
        }
        self.position.current()
    }

    pub fn is_complete(&self) -> bool {
        self.current_question().is_none()
    }

    pub fn step(&self) -> SessionStep {
        match self.current_question() {
            Some(id) => SessionStep::Ask(id.question()),
            None => SessionStep::Ready(self.engine.calculate_distribution(&self.state)),
        }
    }

    /// Record an answer to the current question.
    pub fn answer(self, answer: bool) -> Result<Session, SessionError> {
        let question = self
            .current_question()
            .ok_or(SessionError::Finished(self.id))?;

        let span = tracing::info_span!("session", id = %self.id);
        let _guard = span.enter();

        let state = self.state.apply(question, answer);
        let position = self.position.advance(answer);
        tracing::debug!(question = %question, answer, next = ?position, "Answer recorded");

        let next = Session {
            state,
            position,
            ..self
        };
        if next.is_complete() {
            tracing::info!(
                answered = next.state.answered().len(),
                determined = next.can_determine(),
                flow_terminal = next.position.is_terminal(),
                "Interview complete"
            );
        }
        Ok(next)
    }

    /// Answer the current question by its string id, as a form would.
    ///
    /// Fails if `id` is not the question currently being asked.
    pub fn answer_by_id(self, id: &str, answer: bool) -> Result<Session, SessionError> {
        let current = self
            .current_question()
            .ok_or(SessionError::Finished(self.id))?;
        if id != current.as_str() {
            return Err(SessionError::OutOfTurn {
                answered: id.to_string(),
                current,
            });
        }
        self.answer(answer)
    }

    /// Throw away every answer and start over with the same profile.
    pub fn restart(self) -> Session {
        let profile = AnswerState::new()
            .with_name(self.state.name)
            .with_estate_value(self.state.estate_value);
        Session::start(self.engine, profile)
    }

    /// Whether the flow layer alone considers the path finished.
    pub fn flow_terminal(&self) -> bool {
        self.state.married.is_some() && self.flow.pending_question(&self.state).is_none()
    }
}
