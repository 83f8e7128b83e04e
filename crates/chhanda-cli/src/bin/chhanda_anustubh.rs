// chhanda-anustubh: Check a stanza against the Anustubh (shloka) rules.
//
// Usage:
//   chhanda-anustubh [OPTIONS] [LINE...]
//
// Accepts four lines (one pada each), two lines, or the whole stanza on
// one line.

use anyhow::Result;
use clap::Parser;

use chhanda_cli::{CommonArgs, InputArgs, print_json};
use chhanda_core::enums::weights_to_string;

/// Check whether a stanza follows the Anustubh meter.
#[derive(Debug, Parser)]
#[command(name = "chhanda-anustubh", version)]
struct Cli {
    #[command(flatten)]
    input: InputArgs,

    /// Padas that must end in a heavy syllable
    #[arg(long, value_name = "N")]
    required_heavy: Option<usize>,

    #[command(flatten)]
    common: CommonArgs,
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut handle = cli.common.handle()?;
    if let Some(n) = cli.required_heavy {
        handle.set_required_heavy_eighth(n);
    }
    let text = cli.input.read()?;
    let result = handle.anustubh(&text);

    if cli.common.json {
        return print_json(&result);
    }

    println!(
        "Anustubh: {} (confidence {}%)",
        yes_no(result.is_anustubh),
        result.confidence
    );
    println!("Format: {}, {} syllables", result.input_format, result.total_syllables);
    for pada in &result.padas {
        let sixth = match pada.sixth_heavy {
            Some(v) => format!(", 6th heavy: {}", yes_no(v)),
            None => String::new(),
        };
        println!(
            "Pada {}: {} ({} syllables) 8th heavy: {}, 5th light: {}{}",
            pada.index + 1,
            weights_to_string(&pada.syllables),
            pada.syllable_count,
            yes_no(pada.eighth_heavy),
            yes_no(pada.fifth_light),
            sixth
        );
    }
    for error in &result.errors {
        println!("  ! {error}");
    }
    Ok(())
}
