// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker terminal game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::error;

use drawpoker_core::{Config, Game, poker::Chips};

pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// The starting bankroll.
    #[clap(long, short = 'B', default_value_t = 100)]
    bankroll: u32,
    /// The initially selected bet.
    #[clap(long, short, default_value_t = 5)]
    bet: u32,
    /// Seed for reproducible decks.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() {
    // Logs go to stderr, redirect it to keep the screen clean.
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config {
        bankroll: Chips::new(cli.bankroll),
        seed: cli.seed,
        ..Config::default()
    };

    let bet_idx = bet_index(&config, Chips::new(cli.bet))?;
    terminal::run(Game::new(config), bet_idx)
}

/// Finds the bet in the configured sizes.
fn bet_index(config: &Config, bet: Chips) -> Result<usize> {
    let Some(idx) = config.bet_sizes.iter().position(|b| b == &bet) else {
        let sizes = config
            .bet_sizes
            .iter()
            .map(|b| b.amount().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        bail!("Invalid bet {bet}, choose one of {sizes}");
    };

    Ok(idx)
}
