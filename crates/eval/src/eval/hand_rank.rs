// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classifier.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, Error, Rank, Result, check_distinct};

/// A hand category from the lowest to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pairs.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five ranks in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Straight and flush.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{s}")
    }
}

/// The rank of a five cards hand.
///
/// A rank is a category and a tie-break key of rank values (2 for a deuce up
/// to 14 for an ace), ranks compare by category first and then by key. The
/// key meaning depends on the category:
///
/// ```text
///   High Card, Flush          five ranks descending
///   One Pair                  pair, three kickers descending
///   Two Pair                  high pair, low pair, kicker
///   Three of a Kind           trips, two kickers descending
///   Straight, Straight Flush  the high card (5 for the wheel A-2-3-4-5)
///   Full House                trips, pair
///   Four of a Kind            quads, kicker
///   Royal Flush               ace
/// ```
///
/// Hands with equal ranks split the pot. A rank is only built by classifying
/// cards, it serializes but doesn't deserialize, deserialize a [BestHand]
/// to get a rank back from its cards.
///
/// [BestHand]: crate::BestHand
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HandRank {
    category: HandCategory,
    key: [u8; 5],
    len: u8,
}

/// Rank mask for A-2-3-4-5.
const WHEEL: u16 = 0b1_0000_0000_1111;

impl HandRank {
    /// Classifies exactly five distinct cards.
    ///
    /// ```
    /// # use showdown_eval::*;
    /// let cards = parse_cards("2H 2C 2D 7S 7H").unwrap();
    /// let rank = HandRank::classify(&cards).unwrap();
    /// assert_eq!(rank.category(), HandCategory::FullHouse);
    /// assert_eq!(rank.key(), &[2, 7]);
    /// ```
    pub fn classify(cards: &[Card]) -> Result<HandRank> {
        let cards: &[Card; 5] = cards.try_into().map_err(|_| Error::InsufficientCards {
            expected: "5",
            found: cards.len(),
        })?;

        check_distinct(cards)?;
        Ok(Self::from_five(cards))
    }

    /// Classifies five cards known to be distinct.
    pub(crate) fn from_five(cards: &[Card; 5]) -> HandRank {
        let mut counts = [0u8; 13];
        let mut mask = 0u16;
        let mut suits = 0xf;

        for card in cards {
            counts[card.rank_bits() as usize] += 1;
            mask |= card.rank_mask();
            suits &= card.suit_bits();
        }

        let is_flush = suits != 0;
        let straight = straight_high(mask);

        if let (Some(high), true) = (straight, is_flush) {
            let category = if high == Rank::Ace.value() {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };

            return Self::new(category, &[high]);
        }

        // Groups of (count, rank value) with higher ranks first, the stable
        // sort by count keeps kickers in descending order.
        let mut groups = [(0u8, 0u8); 5];
        let mut len = 0;
        for (rank, &count) in counts.iter().enumerate().rev() {
            if count > 0 {
                groups[len] = (count, rank as u8 + 2);
                len += 1;
            }
        }

        let groups = &mut groups[..len];
        groups.sort_by(|a, b| b.0.cmp(&a.0));

        let category = match (groups[0].0, groups[1].0) {
            (4, _) => HandCategory::FourOfAKind,
            (3, 2) => HandCategory::FullHouse,
            _ if is_flush => HandCategory::Flush,
            _ if straight.is_some() => HandCategory::Straight,
            (3, _) => HandCategory::ThreeOfAKind,
            (2, 2) => HandCategory::TwoPair,
            (2, _) => HandCategory::OnePair,
            _ => HandCategory::HighCard,
        };

        match straight {
            Some(high) if category == HandCategory::Straight => Self::new(category, &[high]),
            _ => {
                let mut key = [0u8; 5];
                for (k, (_, rank)) in key.iter_mut().zip(groups.iter()) {
                    *k = *rank;
                }

                Self::new(category, &key[..len])
            }
        }
    }

    fn new(category: HandCategory, key: &[u8]) -> HandRank {
        let mut rank = HandRank {
            category,
            key: [0; 5],
            len: key.len() as u8,
        };

        rank.key[..key.len()].copy_from_slice(key);
        rank
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tie-break key as rank values.
    pub fn key(&self) -> &[u8] {
        &self.key[..self.len as usize]
    }

    /// The tie-break key as ranks.
    pub fn key_ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.key().iter().filter_map(|&v| Rank::from_value(v))
    }
}

/// Returns the straight high card value for a five ranks mask.
fn straight_high(mask: u16) -> Option<u8> {
    if mask.count_ones() != 5 {
        return None;
    }

    if mask == WHEEL {
        return Some(Rank::Five.value());
    }

    let low = mask.trailing_zeros();
    (mask >> low == 0b11111).then_some(low as u8 + 6)
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ranks = self.key_ranks();
        let mut next = || ranks.next().ok_or(fmt::Error);

        match self.category {
            HandCategory::HighCard => write!(f, "High Card, {}", next()?.name()),
            HandCategory::OnePair => write!(f, "One Pair, {}", next()?.plural()),
            HandCategory::TwoPair => {
                let (high, low) = (next()?, next()?);
                write!(f, "Two Pair, {} and {}", high.plural(), low.plural())
            }
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind, {}", next()?.plural()),
            HandCategory::Straight => write!(f, "Straight, {} high", next()?.name()),
            HandCategory::Flush => write!(f, "Flush, {} high", next()?.name()),
            HandCategory::FullHouse => {
                let (trips, pair) = (next()?, next()?);
                write!(f, "Full House, {} full of {}", trips.plural(), pair.plural())
            }
            HandCategory::FourOfAKind => write!(f, "Four of a Kind, {}", next()?.plural()),
            HandCategory::StraightFlush => write!(f, "Straight Flush, {} high", next()?.name()),
            HandCategory::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}
