//! Transition - The Question Graph
//!
//! Each question moves to the next one based on a single yes/no answer.
//! The graph mirrors the statutory order of entitlement:
//! spouse, issue, parents, full siblings, half-siblings, grandparents,
//! full aunts/uncles, half-aunts/uncles, Crown.
//!
//! A class confirmed present excludes every more distant class, so the
//! graph short-circuits to a terminal as soon as one is found.

use crate::question::{Question, QuestionId, UNKNOWN_QUESTION_TEXT, UnknownQuestionError, catalog};
use crate::schematic::Schematic;
use std::collections::BTreeMap;

/// Read access to recorded answers.
///
/// Implemented by whatever holds the interview state; the flow layer
/// never owns or retains it.
pub trait AnswerSource {
    /// The recorded answer for `id`, or `None` if it was never asked.
    fn answer(&self, id: QuestionId) -> Option<bool>;
}

impl AnswerSource for BTreeMap<QuestionId, bool> {
    fn answer(&self, id: QuestionId) -> Option<bool> {
        self.get(&id).copied()
    }
}

impl QuestionId {
    /// The question that follows this one for `answer`, or `None` when the
    /// branch is exhausted.
    pub fn next(self, answer: bool) -> Option<QuestionId> {
        use QuestionId::*;

        match (self, answer) {
            (Married, _) => Some(Children),

            (Children, true) => Some(ChildrenDeceased),
            (Children, false) => Some(ParentsAlive),
            (ChildrenDeceased, true) => Some(DeceasedChildrenHadChildren),
            (ChildrenDeceased, false) => None,
            (DeceasedChildrenHadChildren, _) => None,

            (ParentsAlive, true) => None,
            (ParentsAlive, false) => Some(Siblings),

            (Siblings, true) => Some(FullSiblings),
            (Siblings, false) => Some(Grandparents),
            (FullSiblings, true) => Some(SiblingsDeceasedWithChildren),
            (FullSiblings, false) => Some(HalfSiblings),
            (SiblingsDeceasedWithChildren, _) => None,
            (HalfSiblings, _) => None,

            (Grandparents, true) => None,
            (Grandparents, false) => Some(AuntsUncles),

            (AuntsUncles, true) => Some(FullAuntsUncles),
            (AuntsUncles, false) => None,
            (FullAuntsUncles, true) => Some(AuntsUnclesDeceasedWithChildren),
            (FullAuntsUncles, false) => Some(HalfAuntsUncles),
            (AuntsUnclesDeceasedWithChildren, _) => None,
            (HalfAuntsUncles, _) => None,
        }
    }
}

/// Stateless lookup facade over the question graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionFlow;

impl QuestionFlow {
    pub fn new() -> Self {
        QuestionFlow
    }

    /// Route a string id and answer to the next question.
    ///
    /// Fails fast on ids outside the catalogue: routing cannot make
    /// progress without a known node.
    pub fn get_next_question_id(
        &self,
        current_id: &str,
        answer: bool,
    ) -> Result<Option<QuestionId>, UnknownQuestionError> {
        let current: QuestionId = current_id.parse()?;
        Ok(current.next(answer))
    }

    /// Display text for a string id. Unknown ids get a fallback instead of an error.
    pub fn get_question_text(&self, id: &str) -> &'static str {
        id.parse::<QuestionId>()
            .map(|q| q.text())
            .unwrap_or(UNKNOWN_QUESTION_TEXT)
    }

    pub fn get_question(&self, id: &str) -> Option<Question> {
        id.parse::<QuestionId>().ok().map(|q| q.question())
    }

    pub fn all_questions(&self) -> Vec<Question> {
        catalog()
    }

    /// Node/edge view of the graph for presentation layers.
    pub fn schematic(&self) -> Schematic {
        Schematic::question_graph()
    }

    /// Where an interview starts: the married question until marital status
    /// is known, the children question afterwards.
    pub fn first_question_id<A: AnswerSource>(&self, answers: &A) -> QuestionId {
        match answers.answer(QuestionId::Married) {
            None => QuestionId::Married,
            Some(_) => QuestionId::Children,
        }
    }

    /// Walk the succession graph from `children` along the recorded answers.
    ///
    /// Returns the first question on the path that has no answer yet, or
    /// `None` when the path reaches a terminal.
    pub fn pending_question<A: AnswerSource>(&self, answers: &A) -> Option<QuestionId> {
        let mut current = QuestionId::Children;
        loop {
            let answer = answers.answer(current)?;
            current = current.next(answer)?;
        }
    }
}
