//! Intestacy CLI - Command-line interface for the intestacy decision engine
//!
//! # Commands
//! - `intestacy ask` - Run the interview interactively
//! - `intestacy calculate <answers.json>` - Calculate from a saved answer file
//! - `intestacy questions` - Print the question catalogue
//! - `intestacy schematic` - Export the question graph as JSON

mod ask;
mod calculate;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use intestacy_core::{DistributionEngine, DistributionResult, EngineConfig};
use intestacy_flow::QuestionFlow;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Who inherits when there is no Will (England & Wales)
#[derive(Parser)]
#[command(name = "intestacy")]
#[command(
    author,
    version,
    about = "Work out how an estate passes under the intestacy rules"
)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the questions interactively
    Ask {
        /// Your name
        #[arg(short, long)]
        name: Option<String>,

        /// Estimated estate value, e.g. "£500,000"
        #[arg(short, long)]
        estate: Option<String>,

        /// Marital status (single, married, cohabiting, divorced, widowed)
        #[arg(short, long)]
        status: Option<String>,

        /// Engine config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Calculate a distribution from a saved answer file
    Calculate {
        /// Answer file (JSON, camelCase question ids)
        answers: PathBuf,

        /// Engine config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every question the interview can ask
    Questions {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the question graph as schematic JSON
    Schematic {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Ask {
            name,
            estate,
            status,
            config,
            json,
        } => {
            let profile = ask::ProfileArgs {
                name,
                estate,
                status,
            };
            run_ask_command(&profile, config.as_deref(), json)
        }
        Commands::Calculate {
            answers,
            config,
            json,
        } => run_calculate_command(&answers, config.as_deref(), json),
        Commands::Questions { json } => run_questions_command(json),
        Commands::Schematic { output } => run_schematic_command(output.as_deref()),
    }
}

/// Logs go to stderr so stdout stays clean for JSON output.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,intestacy_core=debug"
    } else {
        "warn,intestacy_core=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_engine(config: Option<&std::path::Path>) -> Result<DistributionEngine> {
    let config = match config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => EngineConfig::default(),
    };
    Ok(DistributionEngine::new(config))
}

fn print_result(name: &str, result: &DistributionResult, json: bool) -> Result<()> {
    if json {
        let output =
            serde_json::to_string_pretty(result).context("Failed to serialize result")?;
        println!("{}", output);
    } else {
        let mut stdout = std::io::stdout().lock();
        render::write_result(&mut stdout, name, result).context("Failed to write result")?;
    }
    Ok(())
}

fn run_ask_command(
    profile: &ask::ProfileArgs,
    config: Option<&std::path::Path>,
    json: bool,
) -> Result<()> {
    let engine = load_engine(config)?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    let (state, result) = ask::run_interview(engine, profile, &mut input, &mut output)?;

    if !json {
        writeln!(output)?;
        render::write_answers(&mut output, &state).context("Failed to write answers")?;
    }
    writeln!(output)?;
    print_result(&state.name, &result, json)
}

fn run_calculate_command(
    answers: &std::path::Path,
    config: Option<&std::path::Path>,
    json: bool,
) -> Result<()> {
    let engine = load_engine(config)?;
    let (state, result) = calculate::calculate_from_file(&engine, answers)?;
    print_result(&state.name, &result, json)
}

fn run_questions_command(json: bool) -> Result<()> {
    let questions = QuestionFlow::new().all_questions();
    if json {
        let output =
            serde_json::to_string_pretty(&questions).context("Failed to serialize questions")?;
        println!("{}", output);
        return Ok(());
    }

    for question in questions {
        println!("{:<32} {}", question.id.as_str(), question.text);
    }
    Ok(())
}

fn run_schematic_command(output: Option<&std::path::Path>) -> Result<()> {
    let schematic = QuestionFlow::new().schematic();
    let json =
        serde_json::to_string_pretty(&schematic).context("Failed to serialize schematic")?;

    match output {
        Some(path) => {
            std::fs::write(path, json.as_bytes()).context("Failed to write output file")?;
            println!("Schematic saved to: {}", path.display());
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
