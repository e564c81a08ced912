//! # CLI Execution Functions
//!
//! Kept out of `main.rs` so the entry point only parses arguments and sets
//! up logging. Resolves the config, builds the options record and the
//! store, commits the action, and prints the outcome.

use anyhow::{Context, Result};
use lottogen::config::{self, Config};
use lottogen::display::render_batch;
use lottogen::options::{Action, OptionsState};
use lottogen::session::Session;
use lottogen::store::Store;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{debug, info};

use super::{Cli, DrawArgs, FormatArg};

/// Run `save`, `generate`, `show` or `delete`. `draw` is present only for
/// the two actions that draw lines.
pub fn run_action(
    cli: &Cli,
    action: Action,
    format_arg: &FormatArg,
    draw: Option<&DrawArgs>,
) -> Result<()> {
    let config = load_config(cli)?;
    let store = Store::new(resolve_db_dir(cli, &config)?);

    let options = build_options(&config, action, format_arg, draw)?;
    debug!("{}", options.status_text());

    let seed = draw.and_then(|d| d.seed);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let session = Session::new(options, store);
    let outcome = session.commit(&mut rng)?;

    if let Some(batch) = &outcome.batch {
        print!("{}", render_batch(batch));
    }
    info!("{}", outcome.status);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config.clone().or_else(config::default_path) {
        Some(path) => Config::load(&path),
        None => Ok(Config::default()),
    }
}

/// `--db-dir`, then the config's `db_dir`, then `~/lottery-db`.
fn resolve_db_dir(cli: &Cli, config: &Config) -> Result<PathBuf> {
    cli.db_dir
        .clone()
        .or_else(|| config.db_dir.clone())
        .or_else(Store::default_dir)
        .context("Cannot determine home directory; pass --db-dir")
}

fn build_options(
    config: &Config,
    action: Action,
    format_arg: &FormatArg,
    draw: Option<&DrawArgs>,
) -> Result<OptionsState> {
    let format = format_arg.format.unwrap_or_else(|| config.format());
    let lines = draw.and_then(|d| d.lines).unwrap_or_else(|| config.lines());
    Ok(OptionsState::new(format, lines, action)?)
}
