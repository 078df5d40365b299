// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator and equity estimator.
//!
//! Poker hand evaluation for 5, 6 and 7 cards hands, flush and straight draws
//! on the flop and the turn, and Monte Carlo equity against random holdings.
//!
//! To evaluate a hand use [HandRank::best_of], or [BestHand::select] to also
//! get the five cards that make the hand, ranks compare with the usual
//! operators:
//!
//! ```
//! # use showdown_eval::*;
//! let board = parse_cards("KH 9D 5S 5C 2H").unwrap();
//! let mut h1 = parse_cards("KD QC").unwrap();
//! let mut h2 = parse_cards("AC 9C").unwrap();
//! h1.extend(&board);
//! h2.extend(&board);
//!
//! let v1 = HandRank::best_of(&h1).unwrap();
//! let v2 = HandRank::best_of(&h2).unwrap();
//! assert!(v1 > v2);
//! assert_eq!(v1.to_string(), "Two Pair, Kings and Fives");
//! ```
//!
//! Equity is estimated by sampling the missing board cards and the opponents
//! holdings from the unseen cards with an explicit random generator, see
//! [Equity]. The **`parallel`** feature adds [Equity::par_estimate] that runs
//! trials from multiple tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{BestHand, HandCategory, HandRank};

mod draws;
pub use draws::Draws;

mod equity;
pub use equity::{Equity, EquityConfig, EquityResult};

mod preflop;
pub use preflop::StartingHand;

mod street;
pub use street::Street;

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Error, Rank, Result, Suit, check_distinct, parse_cards};
