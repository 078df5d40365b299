// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A [HandRank] is computed by [HandRank::classify] for exactly five cards by
//! counting ranks and suits, ranks have a total order so that two hands can be
//! compared with the usual operators and equal ranks are a split.
//!
//! For 5, 6, and 7 cards hands [HandRank::best_of] returns the best rank out
//! of all the 5-cards subsets, useful for computing odds and other stats, and
//! [BestHand::select] also returns the five cards that make the hand, useful
//! to show a winning hand.

mod best_hand;
pub use best_hand::BestHand;
pub(crate) use best_hand::best_rank;

mod hand_rank;
pub use hand_rank::{HandCategory, HandRank};
