//! Plain-text rendering of answers and distribution results.

use intestacy_core::validation::answer_label;
use intestacy_core::{AnswerState, DistributionResult, format_gbp};
use std::io::{self, Write};

/// Recap of every recorded answer, in the order the questions are asked.
pub fn write_answers<W: Write>(out: &mut W, state: &AnswerState) -> io::Result<()> {
    writeln!(out, "Your answers:")?;
    for (question, answer) in state.answered() {
        writeln!(out, "  {} {}", question.text(), answer_label(answer))?;
    }
    Ok(())
}

pub fn write_result<W: Write>(out: &mut W, name: &str, result: &DistributionResult) -> io::Result<()> {
    let data = &result.data;

    let heading = if name.trim().is_empty() {
        "Distribution Results".to_string()
    } else {
        format!("Distribution Results for {}", name.trim())
    };
    writeln!(out, "{heading}")?;
    writeln!(out, "{}", "=".repeat(heading.chars().count()))?;
    writeln!(out, "Estate value: {}", format_gbp(data.total_value))?;
    writeln!(out)?;
    writeln!(out, "{}", result.text)?;
    writeln!(out)?;
    writeln!(out, "Breakdown:")?;
    for allocation in data.breakdown() {
        writeln!(
            out,
            "  {}: {} ({}%)",
            allocation.beneficiary,
            format_gbp(allocation.share),
            allocation.percentage
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{}", data.summary())
}
