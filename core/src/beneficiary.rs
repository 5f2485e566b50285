use serde::{Deserialize, Serialize};

/// Classes of people (or the Crown) that can take under intestacy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BeneficiaryClass {
    Spouse,
    Children,
    Parents,
    FullSiblings,
    HalfSiblings,
    Grandparents,
    FullAuntsUncles,
    HalfAuntsUncles,
    Crown,
}

impl BeneficiaryClass {
    /// Relatives in order of entitlement when there is no spouse.
    pub const HIERARCHY: [BeneficiaryClass; 8] = [
        BeneficiaryClass::Children,
        BeneficiaryClass::Parents,
        BeneficiaryClass::FullSiblings,
        BeneficiaryClass::HalfSiblings,
        BeneficiaryClass::Grandparents,
        BeneficiaryClass::FullAuntsUncles,
        BeneficiaryClass::HalfAuntsUncles,
        BeneficiaryClass::Crown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BeneficiaryClass::Spouse => "Spouse/Civil Partner",
            BeneficiaryClass::Children => "Children",
            BeneficiaryClass::Parents => "Parents",
            BeneficiaryClass::FullSiblings => "Full Siblings",
            BeneficiaryClass::HalfSiblings => "Half-Siblings",
            BeneficiaryClass::Grandparents => "Grandparents",
            BeneficiaryClass::FullAuntsUncles => "Full Aunts and Uncles",
            BeneficiaryClass::HalfAuntsUncles => "Half-Aunts and Half-Uncles",
            BeneficiaryClass::Crown => "Crown (Bona Vacantia)",
        }
    }

    /// Chart colour used by presentation layers.
    pub fn color(&self) -> &'static str {
        match self {
            BeneficiaryClass::Spouse => "#4B9CD3",
            BeneficiaryClass::Children => "#95D47A",
            BeneficiaryClass::Parents => "#F3C969",
            BeneficiaryClass::FullSiblings | BeneficiaryClass::HalfSiblings => "#E36588",
            BeneficiaryClass::Grandparents => "#9B6EBF",
            BeneficiaryClass::FullAuntsUncles | BeneficiaryClass::HalfAuntsUncles => "#F78E69",
            BeneficiaryClass::Crown => "#8C8C8C",
        }
    }
}
