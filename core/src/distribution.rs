//! # Distribution: Intestacy Rules
//!
//! The engine maps an [`AnswerState`] to a monetary allocation plus
//! explanatory text. It is a pure function of its input: the same state
//! always yields the same result, and nothing is retained between calls.
//!
//! Rules are evaluated in order and the first match wins:
//!
//! 1. Cohabiting - partner takes nothing, relatives take as if unmarried
//! 2. Married, no children - spouse takes everything
//! 3. Married, children, estate within the statutory legacy - spouse takes everything
//! 4. Married, children, estate above the statutory legacy - legacy plus half
//!    the remainder to the spouse, half the remainder to the children
//! 5. - 10. Children, parents, siblings, grandparents, aunts/uncles, Crown
//!
//! The engine is total: calling it on an incomplete state is not an
//! error, it simply falls through to whichever rule the state satisfies.
//! Use [`DistributionEngine::can_determine_distribution`] first.

use crate::answers::AnswerState;
use crate::beneficiary::BeneficiaryClass;
use crate::config::EngineConfig;
use crate::currency::format_gbp;
use intestacy_flow::QuestionFlow;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub const COHABITING_WARNING: &str =
    "As a cohabiting partner, you have no automatic inheritance rights under UK law.";

const PER_STIRPES: &str = "(who will share their parent's portion per stirpes)";

/// The rule that decided a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "class", rename_all = "camelCase")]
pub enum DistributionRule {
    /// Cohabiting partner; the class is whoever takes instead
    Cohabiting(BeneficiaryClass),
    SpouseNoChildren,
    SpouseWithinStatutoryLegacy,
    SpouseAndChildren,
    /// Unmarried succession; the class is the closest one present
    Hierarchy(BeneficiaryClass),
}

impl DistributionRule {
    /// Classes that receive a share under this rule, in result order.
    pub fn beneficiaries(&self) -> Vec<BeneficiaryClass> {
        match self {
            DistributionRule::Cohabiting(class) | DistributionRule::Hierarchy(class) => {
                vec![*class]
            }
            DistributionRule::SpouseNoChildren | DistributionRule::SpouseWithinStatutoryLegacy => {
                vec![BeneficiaryClass::Spouse]
            }
            DistributionRule::SpouseAndChildren => {
                vec![BeneficiaryClass::Spouse, BeneficiaryClass::Children]
            }
        }
    }
}

/// The closest class present when there is no spouse to take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyBeneficiary {
    pub class: BeneficiaryClass,
    /// Who exactly shares the estate; `None` for the Crown
    pub description: Option<String>,
}

/// Structured allocation. The four per-beneficiary vectors are index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionData {
    pub shares: Vec<Decimal>,
    pub labels: Vec<String>,
    pub colors: Vec<String>,
    pub beneficiaries: Vec<String>,
    pub total_value: Decimal,
    pub warnings: Vec<String>,
}

/// One line of a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub beneficiary: String,
    pub share: Decimal,
    /// Whole-number percentage of the estate
    pub percentage: Decimal,
}

impl DistributionData {
    fn new(total_value: Decimal) -> Self {
        Self {
            total_value,
            ..Default::default()
        }
    }

    fn push(&mut self, class: BeneficiaryClass, share: Decimal) {
        self.shares.push(share);
        self.labels.push(class.label().to_string());
        self.colors.push(class.color().to_string());
        self.beneficiaries.push(class.label().to_string());
    }

    /// Shares add up to the estate exactly.
    pub fn is_conserved(&self) -> bool {
        self.shares.iter().copied().sum::<Decimal>() == self.total_value
    }

    pub fn breakdown(&self) -> Vec<Allocation> {
        self.beneficiaries
            .iter()
            .zip(&self.shares)
            .map(|(beneficiary, share)| Allocation {
                beneficiary: beneficiary.clone(),
                share: *share,
                percentage: percentage_of(*share, self.total_value),
            })
            .collect()
    }

    /// `The estate valued at £X will be distributed to: A and B.`
    pub fn summary(&self) -> String {
        format!(
            "The estate valued at {} will be distributed to: {}.",
            format_gbp(self.total_value),
            self.beneficiaries.join(" and ")
        )
    }
}

fn percentage_of(share: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (share / total * Decimal::from(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionResult {
    pub text: String,
    pub data: DistributionData,
}

#[derive(Debug, Clone, Default)]
pub struct DistributionEngine {
    config: EngineConfig,
    flow: QuestionFlow,
}

impl DistributionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            flow: QuestionFlow::new(),
        }
    }

    pub fn statutory_legacy(&self) -> Decimal {
        self.config.statutory_legacy
    }

    /// Whether the state already holds enough to calculate.
    ///
    /// Checked before every question so the interview can stop as soon as
    /// the outcome is fixed.
    pub fn can_determine_distribution(&self, state: &AnswerState) -> bool {
        if state.married == Some(true) {
            return match state.children {
                None => false,
                Some(false) => true,
                Some(true) if state.estate_value <= self.statutory_legacy() => true,
                Some(true) => children_facts_known(state),
            };
        }

        if state.children == Some(true) {
            return children_facts_known(state);
        }

        let class_found = [
            state.parents_alive,
            state.full_siblings,
            state.half_siblings,
            state.grandparents,
            state.full_aunts_uncles,
            state.half_aunts_uncles,
        ]
        .contains(&Some(true));

        // every branch answered "no" all the way down: the Crown takes
        let exhausted =
            state.children == Some(false) && self.flow.pending_question(state).is_none();

        class_found || exhausted
    }

    /// Pick the single rule that governs this state.
    pub fn select_rule(&self, state: &AnswerState) -> DistributionRule {
        if state.cohabiting == Some(true) {
            return DistributionRule::Cohabiting(resolve_hierarchy(state).class);
        }

        if state.married == Some(true) {
            return if state.children != Some(true) {
                DistributionRule::SpouseNoChildren
            } else if state.estate_value <= self.statutory_legacy() {
                DistributionRule::SpouseWithinStatutoryLegacy
            } else {
                DistributionRule::SpouseAndChildren
            };
        }

        DistributionRule::Hierarchy(resolve_hierarchy(state).class)
    }

    pub fn calculate_distribution(&self, state: &AnswerState) -> DistributionResult {
        let estate = state.estate_value;
        let rule = self.select_rule(state);
        tracing::debug!(?rule, %estate, "Distribution rule selected");

        let mut data = DistributionData::new(estate);
        let text = match rule {
            DistributionRule::Cohabiting(_) => {
                let hierarchy = resolve_hierarchy(state);
                data.push(hierarchy.class, estate);
                data.warnings.push(COHABITING_WARNING.to_string());
                cohabiting_text(&hierarchy, estate)
            }
            DistributionRule::SpouseNoChildren | DistributionRule::SpouseWithinStatutoryLegacy => {
                data.push(BeneficiaryClass::Spouse, estate);
                format!(
                    "Your entire estate of {} will pass to your spouse/civil partner.",
                    format_gbp(estate)
                )
            }
            DistributionRule::SpouseAndChildren => {
                let legacy = self.statutory_legacy();
                let remainder = estate - legacy;
                let children_share = remainder / Decimal::from(2);
                // spouse takes the rest so the two shares always sum to the estate
                let spouse_share = estate - children_share;
                data.push(BeneficiaryClass::Spouse, spouse_share);
                data.push(BeneficiaryClass::Children, children_share);
                spouse_and_children_text(state, legacy, spouse_share - legacy, children_share)
            }
            DistributionRule::Hierarchy(_) => {
                let hierarchy = resolve_hierarchy(state);
                data.push(hierarchy.class, estate);
                hierarchy_sentence(&hierarchy, estate)
            }
        };

        DistributionResult { text, data }
    }

    /// The indented one-line hierarchy summary used in the cohabiting text.
    pub fn inheritance_hierarchy_text(&self, state: &AnswerState) -> String {
        format!(
            "  - {}",
            hierarchy_sentence(&resolve_hierarchy(state), state.estate_value)
        )
    }
}

fn children_facts_known(state: &AnswerState) -> bool {
    match state.children_deceased {
        None => false,
        Some(true) => state.deceased_children_had_children.is_some(),
        Some(false) => true,
    }
}

fn with_per_stirpes(living: &str, deceased: &str, substituted: Option<bool>) -> String {
    if substituted == Some(true) {
        format!("{living} and the children of {deceased} {PER_STIRPES}")
    } else {
        living.to_string()
    }
}

/// Walk the unmarried order of entitlement and return the closest class present.
pub fn resolve_hierarchy(state: &AnswerState) -> HierarchyBeneficiary {
    let found = |class: BeneficiaryClass, description: String| HierarchyBeneficiary {
        class,
        description: Some(description),
    };

    if state.children == Some(true) {
        return found(
            BeneficiaryClass::Children,
            with_per_stirpes(
                "your living children",
                "your deceased children",
                state.children_deceased,
            ),
        );
    }

    if state.parents_alive == Some(true) {
        return found(
            BeneficiaryClass::Parents,
            "your surviving parent(s) in equal shares".to_string(),
        );
    }

    if state.siblings == Some(true) {
        if state.full_siblings == Some(true) {
            return found(
                BeneficiaryClass::FullSiblings,
                with_per_stirpes(
                    "your living full siblings",
                    "your deceased full siblings",
                    state.siblings_deceased_with_children,
                ),
            );
        }
        if state.half_siblings == Some(true) {
            return found(
                BeneficiaryClass::HalfSiblings,
                with_per_stirpes(
                    "your living half-siblings",
                    "your deceased half-siblings",
                    state.siblings_deceased_with_children,
                ),
            );
        }
    }

    if state.grandparents == Some(true) {
        return found(BeneficiaryClass::Grandparents, "your grandparents".to_string());
    }

    if state.aunts_uncles == Some(true) {
        if state.full_aunts_uncles == Some(true) {
            return found(
                BeneficiaryClass::FullAuntsUncles,
                with_per_stirpes(
                    "your living full aunts and uncles",
                    "your deceased full aunts and uncles",
                    state.aunts_uncles_deceased_with_children,
                ),
            );
        }
        if state.half_aunts_uncles == Some(true) {
            return found(
                BeneficiaryClass::HalfAuntsUncles,
                with_per_stirpes(
                    "your living half-aunts and half-uncles",
                    "your deceased half-aunts and half-uncles",
                    state.aunts_uncles_deceased_with_children,
                ),
            );
        }
    }

    HierarchyBeneficiary {
        class: BeneficiaryClass::Crown,
        description: None,
    }
}

fn hierarchy_sentence(hierarchy: &HierarchyBeneficiary, estate: Decimal) -> String {
    let value = format_gbp(estate);
    match (hierarchy.class, hierarchy.description.as_deref()) {
        (BeneficiaryClass::Parents, Some(description)) => {
            format!("Your entire estate of {value} will pass to {description}.")
        }
        (_, Some(description)) => {
            format!("Your entire estate of {value} will be divided equally between {description}.")
        }
        (_, None) => format!("Your estate of {value} will pass to the Crown (Bona Vacantia)."),
    }
}

fn cohabiting_text(hierarchy: &HierarchyBeneficiary, estate: Decimal) -> String {
    [
        format!("Warning: {COHABITING_WARNING}"),
        String::new(),
        format!(
            "Your estate of {} will be distributed as follows:",
            format_gbp(estate)
        ),
        "• Your cohabiting partner will not automatically inherit anything".to_string(),
        "• Your estate will pass to your relatives according to intestacy rules:".to_string(),
        format!("  - {}", hierarchy_sentence(hierarchy, estate)),
        String::new(),
        "To protect your partner, you should create a valid Will.".to_string(),
    ]
    .join("\n")
}

fn spouse_and_children_text(
    state: &AnswerState,
    legacy: Decimal,
    spouse_half: Decimal,
    children_share: Decimal,
) -> String {
    // grandchildren only step in when a deceased child left issue
    let children = match (state.children_deceased, state.deceased_children_had_children) {
        (Some(true), had_children) => {
            with_per_stirpes("Your living children", "your deceased children", had_children)
        }
        _ => "Your children".to_string(),
    };

    [
        "Your estate will be distributed as follows:".to_string(),
        "• Your spouse/civil partner will receive:".to_string(),
        format!("  - First {} as statutory legacy", format_gbp(legacy)),
        format!(
            "  - Plus {} (half of the remainder) as an absolute interest",
            format_gbp(spouse_half)
        ),
        format!(
            "• {children} will share: {} (half of the remainder). \
             The children's share of the residue is held on statutory trusts.",
            format_gbp(children_share)
        ),
        "• The capital of your spouse's absolute interest portion will pass to the children \
         upon your spouse's death."
            .to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::MaritalStatus;
    use intestacy_flow::QuestionId;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn engine() -> DistributionEngine {
        DistributionEngine::default()
    }

    fn estate(value: i64) -> AnswerState {
        AnswerState::new().with_estate_value(Decimal::from(value))
    }

    fn single(value: i64) -> AnswerState {
        estate(value).with_marital_status(MaritalStatus::Single)
    }

    fn married(value: i64) -> AnswerState {
        estate(value).with_marital_status(MaritalStatus::Married)
    }

    fn shares(result: &DistributionResult) -> Vec<Decimal> {
        result.data.shares.clone()
    }

    // ------------------------------------------------------------------
    // Spouse rules
    // ------------------------------------------------------------------

    #[test]
    fn test_married_without_children() {
        let state = married(500_000).apply(QuestionId::Children, false);
        let result = engine().calculate_distribution(&state);

        assert!(result.text.contains(
            "Your entire estate of £500,000.00 will pass to your spouse/civil partner."
        ));
        assert_eq!(shares(&result), vec![Decimal::from(500_000)]);
        assert_eq!(result.data.labels, vec!["Spouse/Civil Partner"]);
        assert_eq!(result.data.beneficiaries, vec!["Spouse/Civil Partner"]);
        assert_eq!(result.data.colors, vec!["#4B9CD3"]);
        assert!(result.data.warnings.is_empty());
    }

    #[test]
    fn test_married_with_children_within_statutory_legacy() {
        for value in [300_000, 322_000] {
            let state = married(value).apply(QuestionId::Children, true);
            let result = engine().calculate_distribution(&state);

            assert_eq!(
                engine().select_rule(&state),
                DistributionRule::SpouseWithinStatutoryLegacy
            );
            assert!(result.text.contains(&format!(
                "Your entire estate of {} will pass to your spouse/civil partner.",
                format_gbp(Decimal::from(value))
            )));
            assert_eq!(shares(&result), vec![Decimal::from(value)]);
        }
    }

    #[test]
    fn test_married_with_children_above_statutory_legacy() {
        let state = married(500_000)
            .apply(QuestionId::Children, true)
            .apply(QuestionId::ChildrenDeceased, false);
        let result = engine().calculate_distribution(&state);

        assert_eq!(
            shares(&result),
            vec![Decimal::from(411_000), Decimal::from(89_000)]
        );
        assert_eq!(result.data.labels, vec!["Spouse/Civil Partner", "Children"]);
        assert_eq!(result.data.colors, vec!["#4B9CD3", "#95D47A"]);
        assert!(result.text.contains("Your spouse/civil partner will receive:"));
        assert!(result.text.contains("First £322,000.00 as statutory legacy"));
        assert!(result.text.contains("Plus £89,000.00 (half of the remainder)"));
        assert!(result.text.contains(
            "Your children will share: £89,000.00 (half of the remainder). \
             The children's share of the residue is held on statutory trusts."
        ));
        assert!(result.text.contains(
            "• The capital of your spouse's absolute interest portion will pass to the children \
             upon your spouse's death."
        ));
    }

    #[test]
    fn test_married_with_deceased_children_without_issue() {
        let state = married(600_000)
            .apply(QuestionId::Children, true)
            .apply(QuestionId::ChildrenDeceased, true)
            .apply(QuestionId::DeceasedChildrenHadChildren, false);
        let result = engine().calculate_distribution(&state);

        assert!(result.text.contains("Plus £139,000.00 (half of the remainder)"));
        assert!(result.text.contains("• Your living children will share: £139,000.00"));
        assert!(!result.text.contains("per stirpes"));
    }

    #[test]
    fn test_married_with_deceased_children_with_issue_uses_per_stirpes_wording() {
        let state = married(600_000)
            .apply(QuestionId::Children, true)
            .apply(QuestionId::ChildrenDeceased, true)
            .apply(QuestionId::DeceasedChildrenHadChildren, true);
        let result = engine().calculate_distribution(&state);

        assert!(result.text.contains(
            "Your living children and the children of your deceased children \
             (who will share their parent's portion per stirpes) will share: £139,000.00"
        ));
    }

    #[test]
    fn test_statutory_legacy_follows_config() {
        let engine = DistributionEngine::new(EngineConfig {
            statutory_legacy: Decimal::from(270_000),
        });
        let state = married(300_000).apply(QuestionId::Children, true);
        let result = engine.calculate_distribution(&state);

        assert_eq!(
            shares(&result),
            vec![Decimal::from(285_000), Decimal::from(15_000)]
        );
        assert!(result.text.contains("First £270,000.00 as statutory legacy"));
    }

    #[test]
    fn test_odd_remainder_is_split_exactly() {
        let state = married(0)
            .with_estate_value(Decimal::from_str("322000.01").unwrap())
            .apply(QuestionId::Children, true);
        let result = engine().calculate_distribution(&state);

        assert_eq!(result.data.shares[1], Decimal::from_str("0.005").unwrap());
        assert_eq!(result.data.shares[0], Decimal::from_str("322000.005").unwrap());
        assert!(result.data.is_conserved());
    }

    // ------------------------------------------------------------------
    // Unmarried hierarchy
    // ------------------------------------------------------------------

    #[test]
    fn test_unmarried_with_children() {
        let state = single(500_000)
            .apply(QuestionId::Children, true)
            .apply(QuestionId::ChildrenDeceased, false);
        let result = engine().calculate_distribution(&state);

        assert!(result.text.contains(
            "Your entire estate of £500,000.00 will be divided equally between your living children."
        ));
        assert_eq!(result.data.labels, vec!["Children"]);
        assert_eq!(shares(&result), vec![Decimal::from(500_000)]);
    }

    #[test]
    fn test_deceased_children_always_use_per_stirpes_wording() {
        for had_children in [Some(true), Some(false), None] {
            let mut state = single(500_000)
                .apply(QuestionId::Children, true)
                .apply(QuestionId::ChildrenDeceased, true);
            state.deceased_children_had_children = had_children;
            let result = engine().calculate_distribution(&state);

            assert!(result.text.contains(
                "divided equally between your living children and the children of your \
                 deceased children (who will share their parent's portion per stirpes)."
            ));
            assert_eq!(result.data.labels, vec!["Children"]);
        }
    }

    #[test]
    fn test_parents_alive() {
        let state = single(500_000)
            .apply(QuestionId::Children, false)
            .apply(QuestionId::ParentsAlive, true);
        let result = engine().calculate_distribution(&state);

        assert!(result.text.contains(
            "Your entire estate of £500,000.00 will pass to your surviving parent(s) in equal shares."
        ));
        assert_eq!(result.data.labels, vec!["Parents"]);
    }

    #[test]
    fn test_full_siblings_take_before_half_siblings() {
        let state = single(500_000)
            .apply(QuestionId::Children, false)
            .apply(QuestionId::ParentsAlive, false)
            .apply(QuestionId::Siblings, true)
            .apply(QuestionId::FullSiblings, true)
            .apply(QuestionId::HalfSiblings, true);
        let result = engine().calculate_distribution(&state);

        assert!(result.text.contains(
            "Your entire estate of £500,000.00 will be divided equally between your living full siblings."
        ));
        assert_eq!(result.data.labels, vec!["Full Siblings"]);
    }

    #[test]
    fn test_full_siblings_per_stirpes() {
        let state = single(500_000)
            .apply(QuestionId::Children, false)
            .apply(QuestionId::ParentsAlive, false)
            .apply(QuestionId::Siblings, true)
            .apply(QuestionId::FullSiblings, true)
            .apply(QuestionId::SiblingsDeceasedWithChildren, true);
        let result = engine().calculate_distribution(&state);

        assert!(result.text.contains(
            "your living full siblings and the children of your deceased full siblings \
             (who will share their parent's portion per stirpes)."
        ));
    }

    #[test]
    fn test_half_siblings() {
        let state = single(500_000)
            .apply(QuestionId::Children, false)
            .apply(QuestionId::ParentsAlive, false)
            .apply(QuestionId::Siblings, true)
            .apply(QuestionId::FullSiblings, false)
            .apply(QuestionId::HalfSiblings, true);
        let result = engine().calculate_distribution(&state);

        assert!(result.text.contains("divided equally between your living half-siblings."));
        assert_eq!(result.data.labels, vec!["Half-Siblings"]);
        assert_eq!(result.data.colors, vec!["#E36588"]);
    }

    #[test]
    fn test_grandparents() {
        let state = single(500_000)
            .apply(QuestionId::Children, false)
            .apply(QuestionId::ParentsAlive, false)
            .apply(QuestionId::Siblings, false)
            .apply(QuestionId::Grandparents, true);
        let result = engine().calculate_distribution(&state);

        assert!(result.text.contains(
            "Your entire estate of £500,000.00 will be divided equally between your grandparents."
        ));
        assert_eq!(result.data.labels, vec!["Grandparents"]);
    }

    #[test]
    fn test_aunts_and_uncles() {
        let base = single(500_000)
            .apply(QuestionId::Children, false)
            .apply(QuestionId::ParentsAlive, false)
            .apply(QuestionId::Siblings, false)
            .apply(QuestionId::Grandparents, false)
            .apply(QuestionId::AuntsUncles, true);

        let full = engine().calculate_distribution(
            &base
                .clone()
                .apply(QuestionId::FullAuntsUncles, true)
                .apply(QuestionId::AuntsUnclesDeceasedWithChildren, true),
        );
        assert_eq!(full.data.labels, vec!["Full Aunts and Uncles"]);
        assert!(full.text.contains(
            "your living full aunts and uncles and the children of your deceased full aunts \
             and uncles (who will share their parent's portion per stirpes)."
        ));

        let half = engine().calculate_distribution(
            &base
                .apply(QuestionId::FullAuntsUncles, false)
                .apply(QuestionId::HalfAuntsUncles, true),
        );
        assert_eq!(half.data.labels, vec!["Half-Aunts and Half-Uncles"]);
        assert!(half.text.contains("your living half-aunts and half-uncles."));
    }

    #[test]
    fn test_crown_fallback() {
        let state = single(500_000)
            .apply(QuestionId::Children, false)
            .apply(QuestionId::ParentsAlive, false)
            .apply(QuestionId::Siblings, false)
            .apply(QuestionId::Grandparents, false)
            .apply(QuestionId::AuntsUncles, false);
        let result = engine().calculate_distribution(&state);

        assert!(result.text.contains("will pass to the Crown (Bona Vacantia)"));
        assert_eq!(
            result.text,
            "Your estate of £500,000.00 will pass to the Crown (Bona Vacantia)."
        );
        assert_eq!(shares(&result), vec![Decimal::from(500_000)]);
        assert_eq!(result.data.beneficiaries, vec!["Crown (Bona Vacantia)"]);
        assert_eq!(result.data.colors, vec!["#8C8C8C"]);
    }

    // ------------------------------------------------------------------
    // Cohabiting
    // ------------------------------------------------------------------

    #[test]
    fn test_cohabiting_with_parents_alive() {
        let state = estate(570_000)
            .with_marital_status(MaritalStatus::Cohabiting)
            .apply(QuestionId::Children, false)
            .apply(QuestionId::ParentsAlive, true);
        let result = engine().calculate_distribution(&state);

        assert!(result.text.starts_with(&format!("Warning: {COHABITING_WARNING}")));
        assert!(result.text.contains("will pass to your surviving parent(s)"));
        assert!(result.text.contains("• Your cohabiting partner will not automatically inherit anything"));
        assert!(result.text.ends_with("To protect your partner, you should create a valid Will."));
        assert_eq!(result.data.beneficiaries, vec!["Parents"]);
        assert_eq!(shares(&result), vec![Decimal::from(570_000)]);
        assert_eq!(result.data.warnings, vec![COHABITING_WARNING]);
        assert_eq!(
            engine().select_rule(&state),
            DistributionRule::Cohabiting(BeneficiaryClass::Parents)
        );
    }

    #[test]
    fn test_cohabiting_with_no_relatives_goes_to_crown() {
        let state = estate(570_000)
            .with_marital_status(MaritalStatus::Cohabiting)
            .apply(QuestionId::Children, false)
            .apply(QuestionId::ParentsAlive, false)
            .apply(QuestionId::Siblings, false)
            .apply(QuestionId::Grandparents, false)
            .apply(QuestionId::AuntsUncles, false);
        let result = engine().calculate_distribution(&state);

        assert!(result.text.contains(COHABITING_WARNING));
        assert!(result.text.contains(
            "  - Your estate of £570,000.00 will pass to the Crown (Bona Vacantia)."
        ));
        assert_eq!(result.data.beneficiaries, vec!["Crown (Bona Vacantia)"]);
        assert_eq!(shares(&result), vec![Decimal::from(570_000)]);
    }

    #[test]
    fn test_cohabiting_overrides_married_flag() {
        let mut state = married(500_000).apply(QuestionId::Children, false);
        state.cohabiting = Some(true);

        let result = engine().calculate_distribution(&state);
        assert!(!result.data.beneficiaries.contains(&"Spouse/Civil Partner".to_string()));
    }

    #[test]
    fn test_inheritance_hierarchy_text() {
        let state = single(250_000)
            .apply(QuestionId::Children, false)
            .apply(QuestionId::ParentsAlive, false)
            .apply(QuestionId::Siblings, false)
            .apply(QuestionId::Grandparents, true);

        assert_eq!(
            engine().inheritance_hierarchy_text(&state),
            "  - Your entire estate of £250,000.00 will be divided equally between your grandparents."
        );
    }

    // ------------------------------------------------------------------
    // Sufficiency
    // ------------------------------------------------------------------

    #[test]
    fn test_can_determine_for_married() {
        let engine = engine();
        assert!(!engine.can_determine_distribution(&married(500_000)));
        assert!(engine.can_determine_distribution(&married(500_000).apply(QuestionId::Children, false)));
        assert!(engine.can_determine_distribution(&married(300_000).apply(QuestionId::Children, true)));

        let above = married(500_000).apply(QuestionId::Children, true);
        assert!(!engine.can_determine_distribution(&above));
        let above = above.apply(QuestionId::ChildrenDeceased, true);
        assert!(!engine.can_determine_distribution(&above));
        let above = above.apply(QuestionId::DeceasedChildrenHadChildren, false);
        assert!(engine.can_determine_distribution(&above));
    }

    #[test]
    fn test_can_determine_for_unmarried_children() {
        let engine = engine();
        let state = single(100_000).apply(QuestionId::Children, true);
        assert!(!engine.can_determine_distribution(&state));
        assert!(engine.can_determine_distribution(&state.clone().apply(QuestionId::ChildrenDeceased, false)));

        let state = state.apply(QuestionId::ChildrenDeceased, true);
        assert!(!engine.can_determine_distribution(&state));
        assert!(engine.can_determine_distribution(&state.apply(QuestionId::DeceasedChildrenHadChildren, true)));
    }

    #[test]
    fn test_can_determine_once_a_class_is_found() {
        let engine = engine();
        let state = single(100_000).apply(QuestionId::Children, false);
        assert!(!engine.can_determine_distribution(&state));

        for id in [
            QuestionId::ParentsAlive,
            QuestionId::FullSiblings,
            QuestionId::HalfSiblings,
            QuestionId::Grandparents,
            QuestionId::FullAuntsUncles,
            QuestionId::HalfAuntsUncles,
        ] {
            assert!(
                engine.can_determine_distribution(&state.clone().apply(id, true)),
                "{id} should be decisive"
            );
        }
    }

    #[test]
    fn test_can_determine_when_every_branch_is_no() {
        let engine = engine();
        let state = single(100_000)
            .apply(QuestionId::Children, false)
            .apply(QuestionId::ParentsAlive, false)
            .apply(QuestionId::Siblings, false)
            .apply(QuestionId::Grandparents, false);
        assert!(!engine.can_determine_distribution(&state));
        assert!(engine.can_determine_distribution(&state.apply(QuestionId::AuntsUncles, false)));
    }

    #[test]
    fn test_breakdown_and_summary() {
        let state = married(500_000).apply(QuestionId::Children, true);
        let data = engine().calculate_distribution(&state).data;
        let breakdown = data.breakdown();

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].percentage, Decimal::from(82));
        assert_eq!(breakdown[1].percentage, Decimal::from(18));
        assert_eq!(
            data.summary(),
            "The estate valued at £500,000.00 will be distributed to: Spouse/Civil Partner and Children."
        );
    }

    #[test]
    fn test_result_serializes_camel_case_numbers() {
        let state = married(500_000).apply(QuestionId::Children, false);
        let json = serde_json::to_value(engine().calculate_distribution(&state)).unwrap();

        assert_eq!(json["data"]["totalValue"].as_f64(), Some(500_000.0));
        assert_eq!(json["data"]["shares"][0].as_f64(), Some(500_000.0));
    }

    // ------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------

    fn arb_state() -> impl Strategy<Value = AnswerState> {
        (
            prop::collection::vec(prop::option::of(any::<bool>()), 15),
            1i64..=5_000_000_000,
        )
            .prop_map(|(flags, pence)| {
                let mut state = AnswerState::new().with_estate_value(Decimal::new(pence, 2));
                state.cohabiting = flags[14];
                for (id, flag) in QuestionId::ALL.into_iter().zip(flags) {
                    if let Some(answer) = flag {
                        state = state.apply(id, answer);
                    }
                }
                state
            })
    }

    proptest! {
        #[test]
        fn prop_shares_sum_to_estate(state in arb_state()) {
            let result = engine().calculate_distribution(&state);
            prop_assert!(result.data.is_conserved());
            prop_assert_eq!(result.data.total_value, state.estate_value);
        }

        #[test]
        fn prop_vectors_stay_aligned(state in arb_state()) {
            let data = engine().calculate_distribution(&state).data;
            prop_assert_eq!(data.labels.len(), data.shares.len());
            prop_assert_eq!(data.colors.len(), data.shares.len());
            prop_assert_eq!(data.beneficiaries.len(), data.shares.len());
        }

        #[test]
        fn prop_exactly_one_rule_decides(state in arb_state()) {
            let engine = engine();
            let rule = engine.select_rule(&state);
            let expected: Vec<String> = rule
                .beneficiaries()
                .iter()
                .map(|class| class.label().to_string())
                .collect();

            let result = engine.calculate_distribution(&state);
            prop_assert_eq!(result.data.beneficiaries, expected);
            prop_assert_eq!(engine.select_rule(&state), rule);
        }
    }
}
