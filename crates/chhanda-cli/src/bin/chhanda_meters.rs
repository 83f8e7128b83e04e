// chhanda-meters: List the meter table or identify a weight pattern.
//
// Usage:
//   chhanda-meters [OPTIONS]
//   chhanda-meters --pattern "SSI SSI ISI SS"

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;

use chhanda_cli::{CommonArgs, print_json};
use chhanda_core::enums::weights_to_string;
use chhanda_core::gana::ganas_to_string;

/// List known meters or find the meter for an I/S pattern.
#[derive(Debug, Parser)]
#[command(name = "chhanda-meters", version)]
struct Cli {
    /// Weight pattern to identify (I/S or L/G, spaces allowed)
    #[arg(short, long)]
    pattern: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MeterRow {
    name: String,
    devanagari: Option<String>,
    pattern: String,
    syllables: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let handle = cli.common.handle()?;

    if let Some(pattern) = &cli.pattern {
        let Some(meter) = handle.meter_for_pattern(pattern) else {
            bail!("no meter matches {pattern}");
        };
        if cli.common.json {
            return print_json(meter);
        }
        println!("{}", meter.name());
        return Ok(());
    }

    let rows: Vec<MeterRow> = handle
        .table()
        .iter()
        .map(|m| MeterRow {
            name: m.name().to_string(),
            devanagari: m.devanagari().map(str::to_string),
            pattern: ganas_to_string(m.pattern()),
            syllables: m.syllable_count(),
        })
        .collect();

    if cli.common.json {
        return print_json(&rows);
    }

    for (row, meter) in rows.iter().zip(handle.table().iter()) {
        let pattern = if meter.is_positional() {
            "(positional)".to_string()
        } else {
            format!("{} [{}]", row.pattern, weights_to_string(&meter.weights()))
        };
        println!(
            "{:<18} {:<18} {:>2}  {}",
            row.name,
            row.devanagari.as_deref().unwrap_or(""),
            row.syllables,
            pattern
        );
    }
    Ok(())
}
