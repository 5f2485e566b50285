//! Question - The Fixed Catalogue
//!
//! Every yes/no question the interview can ask is a variant of
//! [`QuestionId`]. The wire form of an id is its camelCase name
//! (`"childrenDeceased"`), which is also the name of the answer field
//! the question governs.
//!
//! The question texts are a contract with presentation layers and tests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fallback text for ids that are not in the catalogue.
pub const UNKNOWN_QUESTION_TEXT: &str = "Unknown question";

/// Raised when a string id does not name a catalogue question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown question id: {0}")]
pub struct UnknownQuestionError(pub String);

/// Identifier of a catalogue question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionId {
    Married,
    Children,
    ChildrenDeceased,
    DeceasedChildrenHadChildren,
    ParentsAlive,
    Siblings,
    FullSiblings,
    SiblingsDeceasedWithChildren,
    HalfSiblings,
    Grandparents,
    AuntsUncles,
    FullAuntsUncles,
    AuntsUnclesDeceasedWithChildren,
    HalfAuntsUncles,
}

impl QuestionId {
    /// Catalogue order.
    pub const ALL: [QuestionId; 14] = [
        QuestionId::Married,
        QuestionId::Children,
        QuestionId::ChildrenDeceased,
        QuestionId::DeceasedChildrenHadChildren,
        QuestionId::ParentsAlive,
        QuestionId::Siblings,
        QuestionId::FullSiblings,
        QuestionId::SiblingsDeceasedWithChildren,
        QuestionId::HalfSiblings,
        QuestionId::Grandparents,
        QuestionId::AuntsUncles,
        QuestionId::FullAuntsUncles,
        QuestionId::AuntsUnclesDeceasedWithChildren,
        QuestionId::HalfAuntsUncles,
    ];

    /// The camelCase wire id.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::Married => "married",
            QuestionId::Children => "children",
            QuestionId::ChildrenDeceased => "childrenDeceased",
            QuestionId::DeceasedChildrenHadChildren => "deceasedChildrenHadChildren",
            QuestionId::ParentsAlive => "parentsAlive",
            QuestionId::Siblings => "siblings",
            QuestionId::FullSiblings => "fullSiblings",
            QuestionId::SiblingsDeceasedWithChildren => "siblingsDeceasedWithChildren",
            QuestionId::HalfSiblings => "halfSiblings",
            QuestionId::Grandparents => "grandparents",
            QuestionId::AuntsUncles => "auntsUncles",
            QuestionId::FullAuntsUncles => "fullAuntsUncles",
            QuestionId::AuntsUnclesDeceasedWithChildren => "auntsUnclesDeceasedWithChildren",
            QuestionId::HalfAuntsUncles => "halfAuntsUncles",
        }
    }

    /// The question as shown to the user.
    pub fn text(&self) -> &'static str {
        match self {
            QuestionId::Married => "Are you married or in a civil partnership?",
            QuestionId::Children => "Do you have any children?",
            QuestionId::ChildrenDeceased => "Are any of your children deceased?",
            QuestionId::DeceasedChildrenHadChildren => {
                "Did any of your deceased children have children of their own?"
            }
            QuestionId::ParentsAlive => "Are either of your parents alive?",
            QuestionId::Siblings => "Do you have any siblings?",
            QuestionId::FullSiblings => "Do you have any full siblings (same two parents)?",
            QuestionId::SiblingsDeceasedWithChildren => {
                "Are any of your siblings deceased with children of their own?"
            }
            QuestionId::HalfSiblings => "Do you have any half siblings (one shared parent)?",
            QuestionId::Grandparents => "Do you have any living grandparents?",
            QuestionId::AuntsUncles => "Do you have any living aunts or uncles?",
            QuestionId::FullAuntsUncles => {
                "Do you have any full aunts or uncles (siblings of your parents)?"
            }
            QuestionId::AuntsUnclesDeceasedWithChildren => {
                "Are any of your aunts or uncles deceased with children of their own?"
            }
            QuestionId::HalfAuntsUncles => {
                "Do you have any half aunts or uncles (half-siblings of your parents)?"
            }
        }
    }

    pub fn question(&self) -> Question {
        Question {
            id: *self,
            text: self.text(),
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = UnknownQuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownQuestionError(s.to_string()))
    }
}

/// A catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
}

/// The whole catalogue, in catalogue order.
pub fn catalog() -> Vec<Question> {
    QuestionId::ALL.iter().map(QuestionId::question).collect()
}
