// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example equity -- --hole "AS KS" --board "QS 7D 2S"
// [2025-06-01T10:12:30.512Z INFO ] Holding AKs on the flop
// [2025-06-01T10:12:30.512Z INFO ] Best hand: High Card, Ace
// [2025-06-01T10:12:30.512Z INFO ] Draws: 9 outs flush draw: true straight draw: false
// [2025-06-01T10:12:30.540Z INFO ] Equity: 0.651 over 100000 trials
// ```
use anyhow::Result;
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::SmallRng};

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The holding cards, rank first like "AS KD".
    #[clap(long)]
    hole: String,
    /// The board cards.
    #[clap(long, default_value = "")]
    board: String,
    /// Number of trials, defaults to the configured trials for the street.
    #[clap(long, short)]
    trials: Option<u32>,
    /// Number of opponents.
    #[clap(long, short, default_value_t = 1)]
    opponents: u8,
    /// Random generator seed.
    #[clap(long, short, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let hole = parse_cards(&cli.hole)?;
    let board = parse_cards(&cli.board)?;
    let street = Street::from_board_len(board.len())?;

    info!("Holding {} on the {street}", StartingHand::new(&hole)?);

    if board.len() >= 3 {
        let cards = hole.iter().chain(&board).copied().collect::<Vec<_>>();
        let best = BestHand::select(&cards)?;
        let five = best.cards().map(|c| c.to_string()).join(" ");
        info!("Best hand: {} [{five}]", best.rank());
    }

    let draws = Draws::estimate(&hole, &board, street)?;
    info!(
        "Draws: {} outs flush draw: {} straight draw: {}",
        draws.outs(),
        draws.flush_draw(),
        draws.straight_draw()
    );

    let config = EquityConfig {
        opponents: cli.opponents,
        ..EquityConfig::default()
    };

    let mut rng = SmallRng::seed_from_u64(cli.seed);
    let equity = Equity::new(&hole, &board)?.opponents(cli.opponents as usize);
    let res = match cli.trials {
        Some(trials) => equity.estimate(trials, &mut rng)?,
        None => equity.estimate_with(&config, &mut rng)?,
    };

    info!("Equity: {:.3} over {} trials", res.equity(), res.trials());
    Ok(())
}
