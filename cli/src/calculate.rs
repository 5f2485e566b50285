//! `intestacy calculate <answers.json>` - distribution for a saved answer file.

use anyhow::{Context, Result};
use intestacy_core::{AnswerState, DistributionEngine, DistributionResult, validation};
use std::path::Path;

pub fn calculate_from_file(
    engine: &DistributionEngine,
    path: &Path,
) -> Result<(AnswerState, DistributionResult)> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file: {}", path.display()))?;
    let state: AnswerState = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse answers file: {}", path.display()))?;

    validation::validate_estate_amount(state.estate_value)?;

    if !engine.can_determine_distribution(&state) {
        tracing::warn!(
            path = %path.display(),
            "Answers are incomplete; result follows the facts that are present"
        );
    }

    let result = engine.calculate_distribution(&state);
    Ok((state, result))
}
