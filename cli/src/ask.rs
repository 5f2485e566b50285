//! Interactive interview
//!
//! `intestacy ask` - profile prompts, then yes/no questions until the
//! session is ready to calculate.

use anyhow::{Context, Result, bail};
use intestacy_core::{
    AnswerState, DistributionEngine, DistributionResult, MaritalStatus, Session, SessionStep,
    ValidationError, parse_answer, validate_estate_value, validate_name,
};
use std::io::{BufRead, Write};

/// Profile values given on the command line.
#[derive(Debug, Default, Clone)]
pub struct ProfileArgs {
    pub name: Option<String>,
    pub estate: Option<String>,
    pub status: Option<String>,
}

/// Run the whole interview over the given reader and writer.
pub fn run_interview<R: BufRead, W: Write>(
    engine: DistributionEngine,
    profile: &ProfileArgs,
    input: &mut R,
    output: &mut W,
) -> Result<(AnswerState, DistributionResult)> {
    let state = read_profile(profile, input, output)?;
    let mut session = Session::start(engine, state);

    loop {
        match session.step() {
            SessionStep::Ready(result) => return Ok((session.into_state(), result)),
            SessionStep::Ask(question) => {
                let answer = prompt(input, output, &format!("{} (yes/no): ", question.text), |raw| {
                    parse_answer(raw).ok_or("Please answer yes or no")
                })?;
                session = session.answer(answer)?;
            }
        }
    }
}

fn read_profile<R: BufRead, W: Write>(
    profile: &ProfileArgs,
    input: &mut R,
    output: &mut W,
) -> Result<AnswerState> {
    let name = match &profile.name {
        Some(raw) => validate_name(raw)?,
        None => prompt(input, output, "Your name: ", validate_name)?,
    };

    let estate = match &profile.estate {
        Some(raw) => validate_estate_value(raw)?,
        None => prompt(input, output, "Estimated estate value (£): ", validate_estate_value)?,
    };

    let status = match &profile.status {
        Some(raw) => Some(raw.parse::<MaritalStatus>()?),
        None => prompt(
            input,
            output,
            "Marital status (single, married, cohabiting, divorced, widowed; blank to skip): ",
            parse_optional_status,
        )?,
    };

    let state = AnswerState::new().with_name(name).with_estate_value(estate);
    Ok(match status {
        Some(status) => state.with_marital_status(status),
        None => state,
    })
}

fn parse_optional_status(raw: &str) -> Result<Option<MaritalStatus>, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some)
}

/// Ask until `parse` accepts the line, echoing its error message otherwise.
fn prompt<R, W, T, E, F>(input: &mut R, output: &mut W, text: &str, parse: F) -> Result<T>
where
    R: BufRead,
    W: Write,
    E: std::fmt::Display,
    F: Fn(&str) -> Result<T, E>,
{
    loop {
        write!(output, "{text}")?;
        output.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            bail!("Input ended before the interview finished");
        }

        match parse(line.trim_end_matches(['\r', '\n'])) {
            Ok(value) => return Ok(value),
            Err(message) => writeln!(output, "{message}")?,
        }
    }
}
