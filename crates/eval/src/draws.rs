// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Flush and straight draws on the flop and the turn.
//!
//! The outs count is a rough heuristic: flush outs and straight outs are
//! added together without removing the cards that complete both draws, and
//! cards already seen are not removed from the straight outs. The total is
//! capped at [Draws::MAX_OUTS].
use log::trace;
use serde::{Deserialize, Serialize};

use crate::{Card, Error, Rank, Result, Street, check_distinct};

/// The draws of a holding on an incomplete board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draws {
    outs: u8,
    flush_draw: bool,
    straight_draw: bool,
}

impl Draws {
    /// Outs cap.
    pub const MAX_OUTS: u8 = 15;
    /// Outs for a flush draw.
    pub const FLUSH_OUTS: u8 = 9;
    /// Outs for each rank that completes a straight.
    pub const STRAIGHT_RANK_OUTS: u8 = 4;

    /// Estimates the draws for a holding and the board on a street.
    ///
    /// The board must have the street number of cards. Draws are only defined
    /// on the flop and the turn, on other streets this returns no draws.
    ///
    /// ```
    /// # use showdown_eval::*;
    /// let hole = parse_cards("5H 6D").unwrap();
    /// let board = parse_cards("7C 8S KD").unwrap();
    /// let draws = Draws::estimate(&hole, &board, Street::Flop).unwrap();
    /// assert!(draws.straight_draw());
    /// assert_eq!(draws.outs(), 8);
    /// ```
    pub fn estimate(hole: &[Card], board: &[Card], street: Street) -> Result<Draws> {
        if hole.len() != 2 {
            return Err(Error::InsufficientCards {
                expected: "2",
                found: hole.len(),
            });
        }

        street.check_board(board.len())?;

        let mut cards = [hole[0]; 7];
        cards[2..2 + board.len()].copy_from_slice(board);
        cards[1] = hole[1];
        let cards = &cards[..2 + board.len()];
        check_distinct(cards)?;

        if !matches!(street, Street::Flop | Street::Turn) {
            return Ok(Draws::default());
        }

        let flush_draw = has_flush_draw(cards);
        let straight_ranks = straight_draw_ranks(cards);

        let mut outs = straight_ranks * Self::STRAIGHT_RANK_OUTS;
        if flush_draw {
            outs += Self::FLUSH_OUTS;
        }

        let draws = Draws {
            outs: outs.min(Self::MAX_OUTS),
            flush_draw,
            straight_draw: straight_ranks > 0,
        };

        trace!("Draws {street} {cards:?}: {draws:?}");
        Ok(draws)
    }

    /// The number of cards that complete a draw.
    pub fn outs(&self) -> u8 {
        self.outs
    }

    /// Four or more cards of the same suit, a made flush also reports a
    /// flush draw.
    pub fn flush_draw(&self) -> bool {
        self.flush_draw
    }

    /// Some five ranks window has four ranks and misses one, a made straight
    /// also reports the windows next to it.
    pub fn straight_draw(&self) -> bool {
        self.straight_draw
    }
}

/// Some suit reaches four cards.
fn has_flush_draw(cards: &[Card]) -> bool {
    let mut counts = [0u8; 4];
    for card in cards {
        counts[card.suit_bits().trailing_zeros() as usize] += 1;
    }

    counts.iter().any(|&c| c >= 4)
}

/// Counts the ranks that complete a five ranks window with four ranks present,
/// two ranks for open ended and double gutshot draws, one for a gutshot.
fn straight_draw_ranks(cards: &[Card]) -> u8 {
    // Bit v for rank value v, the ace is both 14 and 1.
    let mut values = 0u16;
    for card in cards {
        values |= 1 << card.rank().value();
    }

    let ace = 1 << Rank::Ace.value();
    if values & ace != 0 {
        values |= 1 << 1;
    }

    let mut missing = 0u16;
    for low in 1..=10 {
        let window = 0b11111 << low;
        if (values & window).count_ones() == 4 {
            missing |= window & !values;
        }
    }

    // The low ace completes the same cards as the high ace.
    if missing & (1 << 1) != 0 {
        missing = (missing & !(1 << 1)) | ace;
    }

    missing.count_ones().min(2) as u8
}
