// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert_eq!(kd.rank(), Rank::King);
//! ```
//!
//! Card tokens are always rank first and suit second (`AH`, `TD`), a suit
//! first token like `HA` is an error.
//!
//! The [Deck] type is used to build the deck of unseen cards, and to iterate
//! or sample hands from it. For example to sample 10 random 5-cards hands
//! from the cards left after removing a holding:
//!
//! ```
//! # use showdown_cards::*;
//! # use rand::{SeedableRng, rngs::SmallRng};
//! let holding = parse_cards("AS AH").unwrap();
//! let deck = Deck::without(&holding).unwrap();
//! assert_eq!(deck.count(), 50);
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let mut counter = 0;
//! deck.sample(&mut rng, 10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! })
//! .unwrap();
//! assert_eq!(counter, 10);
//! ```
//!
//! The **`parallel`** feature enables parallel sampling with a given number
//! of tasks, the closure `task_id` can be used to store per task data to
//! reduce contention. The following uses 4 tasks and samples 10 7-cards
//! hands for each task:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_sample() {
//! # use std::sync::atomic;
//! # use showdown_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default()
//!     .par_sample(4, 10, 7, 42, |task_id, hand| {
//!         assert_eq!(hand.len(), 7);
//!         counter.fetch_add(1, atomic::Ordering::Relaxed);
//!     })
//!     .unwrap();
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 40);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit, check_distinct, parse_cards};

mod error;
pub use error::{Error, Result};
