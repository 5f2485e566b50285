//! Answer state for a single interview.
//!
//! A field stays `None` until its question is answered. Fields on branches
//! the interview never reached stay `None` for good: that is pruning, not
//! "unknown".

use crate::validation::ValidationError;
use intestacy_flow::{AnswerSource, QuestionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marital status as reported by the profile step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Cohabiting,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub const ALL: [MaritalStatus; 5] = [
        MaritalStatus::Single,
        MaritalStatus::Married,
        MaritalStatus::Cohabiting,
        MaritalStatus::Divorced,
        MaritalStatus::Widowed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "single",
            MaritalStatus::Married => "married",
            MaritalStatus::Cohabiting => "cohabiting",
            MaritalStatus::Divorced => "divorced",
            MaritalStatus::Widowed => "widowed",
        }
    }

    pub fn is_married(&self) -> bool {
        matches!(self, MaritalStatus::Married)
    }

    pub fn is_cohabiting(&self) -> bool {
        matches!(self, MaritalStatus::Cohabiting)
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaritalStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        MaritalStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or(ValidationError::MaritalStatusUnknown)
    }
}

/// Every fact the distribution rules read.
///
/// Serialises with the catalogue's camelCase ids, so a saved answer file
/// reads like `{"married": true, "children": false, "estateValue": 500000}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerState {
    pub name: String,
    pub estate_value: Decimal,
    pub married: Option<bool>,
    pub cohabiting: Option<bool>,
    pub children: Option<bool>,
    pub children_deceased: Option<bool>,
    pub deceased_children_had_children: Option<bool>,
    pub parents_alive: Option<bool>,
    pub siblings: Option<bool>,
    pub full_siblings: Option<bool>,
    pub half_siblings: Option<bool>,
    pub siblings_deceased_with_children: Option<bool>,
    pub grandparents: Option<bool>,
    pub aunts_uncles: Option<bool>,
    pub full_aunts_uncles: Option<bool>,
    pub half_aunts_uncles: Option<bool>,
    pub aunts_uncles_deceased_with_children: Option<bool>,
}

impl AnswerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_estate_value(mut self, value: Decimal) -> Self {
        self.estate_value = value;
        self
    }

    /// Collapse the marital status into the `married`/`cohabiting` flags.
    pub fn with_marital_status(mut self, status: MaritalStatus) -> Self {
        self.married = Some(status.is_married());
        self.cohabiting = Some(status.is_cohabiting());
        self
    }

    /// Record an answer, producing the next state.
    pub fn apply(mut self, question: QuestionId, answer: bool) -> Self {
        *self.slot_mut(question) = Some(answer);
        self
    }

    pub fn answer(&self, question: QuestionId) -> Option<bool> {
        *self.slot(question)
    }

    pub fn is_answered(&self, question: QuestionId) -> bool {
        self.answer(question).is_some()
    }

    /// Answered questions in catalogue order.
    pub fn answered(&self) -> Vec<(QuestionId, bool)> {
        QuestionId::ALL
            .into_iter()
            .filter_map(|q| self.answer(q).map(|a| (q, a)))
            .collect()
    }

    fn slot(&self, question: QuestionId) -> &Option<bool> {
        match question {
            QuestionId::Married => &self.married,
            QuestionId::Children => &self.children,
            QuestionId::ChildrenDeceased => &self.children_deceased,
            QuestionId::DeceasedChildrenHadChildren => &self.deceased_children_had_children,
            QuestionId::ParentsAlive => &self.parents_alive,
            QuestionId::Siblings => &self.siblings,
            QuestionId::FullSiblings => &self.full_siblings,
            QuestionId::SiblingsDeceasedWithChildren => &self.siblings_deceased_with_children,
            QuestionId::HalfSiblings => &self.half_siblings,
            QuestionId::Grandparents => &self.grandparents,
            QuestionId::AuntsUncles => &self.aunts_uncles,
            QuestionId::FullAuntsUncles => &self.full_aunts_uncles,
            QuestionId::AuntsUnclesDeceasedWithChildren => {
                &self.aunts_uncles_deceased_with_children
            }
            QuestionId::HalfAuntsUncles => &self.half_aunts_uncles,
        }
    }

    fn slot_mut(&mut self, question: QuestionId) -> &mut Option<bool> {
        match question {
            QuestionId::Married => &mut self.married,
            QuestionId::Children => &mut self.children,
            QuestionId::ChildrenDeceased => &mut self.children_deceased,
            QuestionId::DeceasedChildrenHadChildren => &mut self.deceased_children_had_children,
            QuestionId::ParentsAlive => &mut self.parents_alive,
            QuestionId::Siblings => &mut self.siblings,
            QuestionId::FullSiblings => &mut self.full_siblings,
            QuestionId::SiblingsDeceasedWithChildren => &mut self.siblings_deceased_with_children,
            QuestionId::HalfSiblings => &mut self.half_siblings,
            QuestionId::Grandparents => &mut self.grandparents,
            QuestionId::AuntsUncles => &mut self.aunts_uncles,
            QuestionId::FullAuntsUncles => &mut self.full_aunts_uncles,
            QuestionId::AuntsUnclesDeceasedWithChildren => {
                &mut self.aunts_uncles_deceased_with_children
            }
            QuestionId::HalfAuntsUncles => &mut self.half_aunts_uncles,
        }
    }
}

impl AnswerSource for AnswerState {
    fn answer(&self, id: QuestionId) -> Option<bool> {
        AnswerState::answer(self, id)
    }
}
