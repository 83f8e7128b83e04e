// chhanda-compare: Compare the metrical patterns of two poems.
//
// Usage:
//   chhanda-compare [OPTIONS] FIRST_FILE SECOND_FILE

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use chhanda_cli::{CommonArgs, percent, print_json, read_text};

/// Compare two poems line by line.
#[derive(Debug, Parser)]
#[command(name = "chhanda-compare", version)]
struct Cli {
    /// First poem
    first: PathBuf,

    /// Second poem
    second: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let handle = cli.common.handle()?;
    let first = read_text(&[], Some(&cli.first))?;
    let second = read_text(&[], Some(&cli.second))?;
    let comparison = handle.compare(&first, &second);

    if cli.common.json {
        return print_json(&comparison);
    }

    println!(
        "First:  {}",
        comparison.first.overall_chhanda.as_deref().unwrap_or("(none)")
    );
    println!(
        "Second: {}",
        comparison.second.overall_chhanda.as_deref().unwrap_or("(none)")
    );
    println!(
        "Same meter: {}, same pattern: {}, similarity {}",
        comparison.same_chhanda,
        comparison.same_pattern,
        percent(comparison.similarity_percentage)
    );
    for d in &comparison.differences {
        let mark = if d.matches { "=" } else { "≠" };
        println!(
            "{:>3} {mark} {} | {}",
            d.line_index + 1,
            d.first_pattern,
            if d.second_pattern.is_empty() { "-" } else { d.second_pattern.as_str() }
        );
    }
    Ok(())
}
