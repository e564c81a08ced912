//! # Main — CLI Entry Point
//!
//! One subcommand per user action plus `rules`:
//!
//! - `save`: draw lines and store them for the format.
//! - `generate`: draw lines without storing anything.
//! - `show`: print the last stored batch for the format.
//! - `delete`: remove the stored batch for the format.
//! - `rules`: print the built-in format table.
//!
//! ## Global Options
//!
//! - `--db-dir`: where batches are stored (default `~/lottery-db`).
//! - `--config`: TOML file with defaults (default `~/.lottogen/config.toml`).
//!
//! Logging goes to stderr; `LOG_FORMAT=json` switches to JSON lines and
//! `RUST_LOG` adjusts the level.

mod cli;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lottogen::options::Action;
use lottogen::rules::LotteryFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lottogen", version, about = "Generate and keep lottery number lines")]
struct Cli {
    /// Directory holding saved batches (default: ~/lottery-db)
    #[arg(long)]
    db_dir: Option<PathBuf>,

    /// Path to the TOML config file (default: ~/.lottogen/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate lines and save them, replacing the format's previous batch
    Save(DrawArgs),
    /// Generate lines without saving them
    Generate(DrawArgs),
    /// Show the saved batch for a format
    Show(FormatArg),
    /// Delete the saved batch for a format
    Delete(FormatArg),
    /// List the built-in lottery formats
    Rules,
}

#[derive(Args)]
struct FormatArg {
    /// Lottery format, e.g. EUROMILLIONS or lotto-hotpicks
    #[arg(long, short)]
    format: Option<LotteryFormat>,
}

#[derive(Args)]
struct DrawArgs {
    #[command(flatten)]
    format: FormatArg,

    /// Number of lines to generate (1-99)
    #[arg(
        long,
        short,
        value_parser = clap::value_parser!(u32)
            .range(i64::from(lottogen::MIN_LINES)..=i64::from(lottogen::MAX_LINES))
    )]
    lines: Option<u32>,

    /// Seed the random source for repeatable output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();

    let (action, format_arg, draw) = match &cli.command {
        Commands::Save(args) => (Action::Save, &args.format, Some(args)),
        Commands::Generate(args) => (Action::NoSave, &args.format, Some(args)),
        Commands::Show(args) => (Action::Show, args, None),
        Commands::Delete(args) => (Action::Delete, args, None),
        Commands::Rules => {
            print!("{}", lottogen::display::render_rules());
            return Ok(());
        }
    };
    cli::run_action(&cli, action, format_arg, draw)
}
