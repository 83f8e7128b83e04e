// chhanda-cli: shared utilities for the command-line tools.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use serde::Serialize;

use chhanda_engine::handle::ChhandaHandle;

/// Environment variable naming a JSON meter table.
pub const METERS_ENV: &str = "CHHANDA_METERS_PATH";

/// Meter table file name looked up in the config directory.
const METERS_FILE: &str = "meters.json";

/// Options shared by every tool.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// JSON meter table to use instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    pub meters: Option<PathBuf>,

    /// Keep dandas, digits and punctuation in lines
    #[arg(long)]
    pub keep_punctuation: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging and build a handle with these options applied.
    pub fn handle(&self) -> Result<ChhandaHandle> {
        init_logging(self.verbose, self.quiet);
        let mut handle = load_handle(self.meters.as_deref())?;
        handle.set_strip_punctuation(!self.keep_punctuation);
        Ok(handle)
    }
}

/// Input text given either inline or through a file; stdin otherwise.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Text to analyze; each argument is one line
    #[arg(value_name = "LINE")]
    pub text: Vec<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    pub fn read(&self) -> Result<String> {
        read_text(&self.text, self.file.as_deref())
    }
}

/// Initialize env_logger from a verbosity count. `RUST_LOG` still wins.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // A second init (tests, repeated calls) is harmless.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

/// Create a handle, loading a meter table if one can be found.
///
/// Search order:
/// 1. `meters_path` argument (if provided; must exist)
/// 2. `CHHANDA_METERS_PATH` environment variable
/// 3. `$XDG_CONFIG_HOME/chhanda/meters.json` or `~/.config/chhanda/meters.json`
/// 4. The built-in table
pub fn load_handle(meters_path: Option<&Path>) -> Result<ChhandaHandle> {
    if let Some(path) = meters_path {
        if !path.is_file() {
            bail!("meter table {} does not exist", path.display());
        }
        return load_table(path);
    }

    for path in search_paths() {
        if path.is_file() {
            return load_table(&path);
        }
    }

    log::debug!("no meter table found, using built-in meters");
    Ok(ChhandaHandle::new())
}

fn load_table(path: &Path) -> Result<ChhandaHandle> {
    log::info!("loading meter table from {}", path.display());
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    ChhandaHandle::from_json(&json)
        .with_context(|| format!("failed to load meter table {}", path.display()))
}

/// Candidate meter table locations, most specific first.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(METERS_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Ok(config) = std::env::var("XDG_CONFIG_HOME") {
        paths.push(PathBuf::from(config).join("chhanda").join(METERS_FILE));
    } else if let Ok(home) = std::env::var("HOME") {
        paths.push(
            PathBuf::from(home)
                .join(".config")
                .join("chhanda")
                .join(METERS_FILE),
        );
    }

    paths
}

/// Read input text: from `file` if given, else the inline lines, else
/// all of stdin.
pub fn read_text(lines: &[String], file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    if !lines.is_empty() {
        return Ok(lines.join("\n"));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize result")?;
    println!("{json}");
    Ok(())
}

/// Format a percentage with one decimal place.
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}
