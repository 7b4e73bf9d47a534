//! Classifies side-length triples given on the command line, or the
//! built-in samples when none are given.
//!
//! Run with: `cargo run --features cli -- 1,1.5,2 3,3,3 none`

use anyhow::{Context, Result};
use clap::Parser;
use triangulation::{Outcome, SAMPLES, evaluate_all, logging};

#[derive(Parser)]
#[command(name = "triangulation")]
#[command(version, about = "Validate and classify triangles by their side lengths")]
struct Cli {
    /// Comma-separated side lengths, e.g. `1,1.5,2`; `none` stands for a missing input
    #[arg(allow_hyphen_values = true)]
    triples: Vec<String>,

    /// Output one JSON object per line
    #[arg(long)]
    json: bool,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Parses `1,1.5,2` into lengths; `none` maps to an absent input
fn parse_triple(arg: &str) -> Result<Option<Vec<f64>>> {
    if arg.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    arg.split(',')
        .map(|field| {
            field
                .trim()
                .parse::<f64>()
                .with_context(|| format!("invalid side length {field:?} in {arg:?}"))
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

fn print(outcomes: &[Outcome], json: bool) -> Result<()> {
    for outcome in outcomes {
        if json {
            println!(
                "{}",
                serde_json::to_string(outcome).context("failed to serialize outcome")?
            );
        } else {
            println!("{outcome}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level);

    let outcomes = if cli.triples.is_empty() {
        evaluate_all(SAMPLES.iter().copied())
    } else {
        let inputs = cli
            .triples
            .iter()
            .map(|arg| parse_triple(arg))
            .collect::<Result<Vec<_>>>()?;
        evaluate_all(inputs.iter().map(Option::as_deref))
    };

    print(&outcomes, cli.json)
}
