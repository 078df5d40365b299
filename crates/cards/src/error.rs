// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and evaluation errors.
use thiserror::Error;

use crate::Card;

/// Errors returned when building cards, decks and hands.
///
/// None of these errors is transient, they all signal bad input or a logic
/// error in the caller (for example the same card dealt twice) and should
/// not be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A malformed card token or an unknown rank or suit symbol.
    #[error("invalid card {0}")]
    InvalidCard(String),
    /// The same card appears more than once in a set of cards.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A card was removed from a deck that doesn't contain it.
    #[error("card {0} is not in the deck")]
    MissingCard(Card),
    /// An invalid configuration value.
    #[error("invalid configuration {0}")]
    InvalidConfig(String),
    /// An unknown street label.
    #[error("invalid street {0}")]
    InvalidStreet(String),
    /// Wrong number of cards for an operation.
    #[error("expected {expected} cards, found {found}")]
    InsufficientCards {
        /// The accepted number of cards.
        expected: &'static str,
        /// The number of cards passed.
        found: usize,
    },
    /// More cards requested than the deck holds.
    #[error("cannot take {requested} cards from a deck of {remaining}")]
    DeckExhausted {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Cards result type.
pub type Result<T> = std::result::Result<T, Error>;
