// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example chart
// ```
use clap::{Parser, value_parser};
use std::time::Instant;

use showdown_eval::*;

const NUM_TASKS: usize = 4;
const TRIALS_PER_TASK: u32 = 25_000;

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

#[derive(Debug, Parser)]
struct Cli {
    /// The number of opposing players.
    #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u8).range(1..=6))]
    num_players: u8,
    /// Random generator seed.
    #[clap(long, short, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let num_players = cli.num_players as usize;

    separator();

    let now = Instant::now();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut probs = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            // Suited above the diagonal, offsuit below.
            let hand = StartingHand::from_ranks(r1, r2, r1 > r2);
            labels.push(format!("{:<3}", hand.to_string()));

            let res = Equity::new(&hand.cards(), &[])?
                .opponents(num_players)
                .par_estimate(NUM_TASKS, TRIALS_PER_TASK, cli.seed)?;
            probs.push((res.equity() * 100.0).round());
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }

        println!();

        print!("|");
        for prob in &probs {
            print!(" {:2.0}% |", prob);
        }
        println!();

        separator();
    }

    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
    Ok(())
}
