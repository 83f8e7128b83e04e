// chhanda-analyze: Detect the meter of a stanza.
//
// Prints every line's weight pattern, gana sequence and meter, then the
// overall meter and the Anustubh verdict.
//
// Usage:
//   chhanda-analyze [OPTIONS] [LINE...]
//   chhanda-analyze --file poem.txt --json

use anyhow::Result;
use clap::Parser;

use chhanda_cli::{CommonArgs, InputArgs, print_json};
use chhanda_core::enums::weights_to_string;
use chhanda_core::gana::ganas_to_string;

/// Detect the meter (chhanda) of Devanagari verse.
#[derive(Debug, Parser)]
#[command(name = "chhanda-analyze", version)]
struct Cli {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let handle = cli.common.handle()?;
    let text = cli.input.read()?;
    let analysis = handle.analyze(&text);

    if cli.common.json {
        return print_json(&analysis);
    }

    for (i, line) in analysis.results.iter().enumerate() {
        println!("{}: {}", i + 1, line.line);
        println!("   weights: {}", weights_to_string(&line.syllables));
        println!("   ganas:   {}", ganas_to_string(&line.ganas));
        println!("   meter:   {}", line.chhanda.as_deref().unwrap_or("-"));
    }
    println!();
    println!(
        "Overall meter: {}",
        analysis.overall_chhanda.as_deref().unwrap_or("(none)")
    );
    let anustubh = &analysis.anustubh;
    println!(
        "Anustubh: {} (confidence {}%, {})",
        if anustubh.is_anustubh { "yes" } else { "no" },
        anustubh.confidence,
        anustubh.input_format
    );
    Ok(())
}
