// chhanda-check: Check verse against a chosen meter and suggest fixes.
//
// Usage:
//   chhanda-check --meter Indravajra [OPTIONS] [LINE...]
//
// Exits with status 1 when the text does not conform.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use chhanda_cli::{CommonArgs, InputArgs, percent, print_json};
use chhanda_core::check::{MeterCheck, Suggestion};
use chhanda_core::enums::weights_to_string;
use chhanda_core::gana::ganas_to_string;
use chhanda_engine::check::suggest::DEFAULT_MAX_SUGGESTIONS;
use chhanda_engine::suggest_corrections;

/// Check Devanagari verse against a meter.
#[derive(Debug, Parser)]
#[command(name = "chhanda-check", version)]
struct Cli {
    /// Meter name (Latin or Devanagari)
    #[arg(short = 'M', long)]
    meter: String,

    #[command(flatten)]
    input: InputArgs,

    /// Maximum number of suggestions
    #[arg(long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
    max_suggestions: usize,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Serialize)]
struct Report<'a> {
    check: &'a MeterCheck,
    suggestions: &'a [Suggestion],
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let handle = cli.common.handle()?;
    let text = cli.input.read()?;

    let check = handle.check(&text, &cli.meter)?;
    let suggestions = suggest_corrections(&check, cli.max_suggestions);

    if cli.common.json {
        print_json(&Report {
            check: &check,
            suggestions: &suggestions,
        })?;
    } else {
        println!("Meter: {}", check.meter);
        for line in &check.lines {
            let mark = if line.is_correct { "ok" } else { "!!" };
            println!("[{mark}] {}: {}", line.line_index + 1, line.line);
            println!("     actual:   {}", ganas_to_string(&line.ganas));
            println!("     expected: {}", ganas_to_string(&line.expected_ganas));
            if !line.is_correct {
                println!(
                    "     weights:  {} ({} match)",
                    weights_to_string(&line.syllables),
                    percent(line.match_percentage)
                );
            }
        }
        println!(
            "Overall: {}/{} syllables, {}/{} ganas ({})",
            check.correct_syllables,
            check.total_syllables,
            check.correct_ganas,
            check.total_ganas,
            percent(check.overall_match_percentage)
        );
        if !suggestions.is_empty() {
            println!("Suggestions:");
            for s in &suggestions {
                println!("  - {s}");
            }
        }
    }

    Ok(if check.is_correct {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
