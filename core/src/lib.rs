//! Intestacy Core - Distribution Engine
//!
//! Answer state, validation and the intestacy rules for England & Wales.
//! The question graph itself lives in `intestacy-flow`.

pub mod answers;
pub mod beneficiary;
pub mod config;
pub mod currency;
pub mod distribution;
pub mod session;
pub mod validation;

pub use answers::{AnswerState, MaritalStatus};
pub use beneficiary::BeneficiaryClass;
pub use config::{ConfigError, EngineConfig, STATUTORY_LEGACY};
pub use currency::{format_gbp, round_currency};
pub use distribution::{
    Allocation, COHABITING_WARNING, DistributionData, DistributionEngine, DistributionResult,
    DistributionRule, HierarchyBeneficiary, resolve_hierarchy,
};
pub use session::{Session, SessionError, SessionStep};
pub use validation::{ValidationError, parse_answer, validate_estate_value, validate_name};

pub use intestacy_flow::{Question, QuestionFlow, QuestionId};
