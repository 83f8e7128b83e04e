// chhanda-syllables: Show aksharas and syllable weights line by line.
//
// Each akshara is printed with its weight (I/S), or `·` for tokens that
// form no syllable (closing consonants, spaces). With --stats, prints
// counts and percentages for the whole text instead.
//
// Usage:
//   chhanda-syllables [OPTIONS] [LINE...]

use anyhow::Result;
use clap::Parser;

use chhanda_cli::{CommonArgs, InputArgs, percent, print_json};
use chhanda_core::enums::AksharaKind;

/// Split Devanagari text into aksharas and weigh each syllable.
#[derive(Debug, Parser)]
#[command(name = "chhanda-syllables", version)]
struct Cli {
    #[command(flatten)]
    input: InputArgs,

    /// Print summary statistics instead of per-line output
    #[arg(long)]
    stats: bool,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let handle = cli.common.handle()?;
    let text = cli.input.read()?;

    if cli.stats {
        let stats = handle.stats(&text);
        if cli.common.json {
            return print_json(&stats);
        }
        println!("Aksharas:  {}", stats.total_aksharas);
        println!("Syllables: {}", stats.total_syllables);
        println!(
            "Guru (S):  {} ({})",
            stats.heavy_count,
            percent(stats.heavy_percentage)
        );
        println!(
            "Laghu (I): {} ({})",
            stats.light_count,
            percent(stats.light_percentage)
        );
        println!("Ganas:     {}", stats.total_ganas);
        println!("Matras:    {}", stats.total_matras);
        return Ok(());
    }

    let analysis = handle.analyze(&text);
    if cli.common.json {
        return print_json(&analysis.results);
    }

    for line in &analysis.results {
        let cells: Vec<String> = line
            .aksharas
            .iter()
            .zip(&line.akshara_map)
            .filter(|(ak, _)| ak.kind != AksharaKind::Other)
            .map(|(ak, slot)| match slot {
                Some(i) => format!("{}:{}", ak.text, line.syllables[*i]),
                None => format!("{}:·", ak.text),
            })
            .collect();
        println!("{}", cells.join(" "));
    }
    Ok(())
}
