// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Starting hands notation.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, Error, Rank, Result, Suit};

/// A starting hand class like `AKs`, `T9o` or `QQ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StartingHand {
    high: Rank,
    low: Rank,
    suited: bool,
}

impl StartingHand {
    /// The starting hand for a holding.
    ///
    /// ```
    /// # use showdown_eval::*;
    /// let hole = parse_cards("TD KD").unwrap();
    /// assert_eq!(StartingHand::new(&hole).unwrap().to_string(), "KTs");
    /// ```
    pub fn new(hole: &[Card]) -> Result<Self> {
        let [c1, c2] = hole else {
            return Err(Error::InsufficientCards {
                expected: "2",
                found: hole.len(),
            });
        };

        if c1 == c2 {
            return Err(Error::DuplicateCard(*c1));
        }

        Ok(Self::from_ranks(c1.rank(), c2.rank(), c1.suit() == c2.suit()))
    }

    /// The starting hand for two ranks in any order, pairs are never suited.
    pub fn from_ranks(r1: Rank, r2: Rank, suited: bool) -> Self {
        Self {
            high: r1.max(r2),
            low: r1.min(r2),
            suited: suited && r1 != r2,
        }
    }

    /// The higher rank.
    pub fn high(&self) -> Rank {
        self.high
    }

    /// The lower rank.
    pub fn low(&self) -> Rank {
        self.low
    }

    /// Both cards have the same rank.
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    /// Both cards have the same suit.
    pub fn is_suited(&self) -> bool {
        self.suited
    }

    /// A holding for this starting hand.
    pub fn cards(&self) -> [Card; 2] {
        let low_suit = if self.suited {
            Suit::Hearts
        } else {
            Suit::Spades
        };

        [
            Card::new(self.high, Suit::Hearts),
            Card::new(self.low, low_suit),
        ]
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pair() {
            write!(f, "{}{}", self.high, self.low)
        } else if self.suited {
            write!(f, "{}{}s", self.high, self.low)
        } else {
            write!(f, "{}{}o", self.high, self.low)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, parse_cards};
    use ahash::HashSet;

    fn hand(s: &str) -> StartingHand {
        StartingHand::new(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn notation() {
        assert_eq!(hand("AS KS").to_string(), "AKs");
        assert_eq!(hand("KS AD").to_string(), "AKo");
        assert_eq!(hand("QH QC").to_string(), "QQ");
        assert_eq!(hand("9C TD").to_string(), "T9o");

        let h = hand("2H 7H");
        assert_eq!((h.high(), h.low()), (Rank::Seven, Rank::Deuce));
        assert!(h.is_suited() && !h.is_pair());
    }

    #[test]
    fn all_classes() {
        let mut classes = HashSet::default();
        Deck::default().for_each(2, |hole| {
            classes.insert(StartingHand::new(hole).unwrap());
        });
        assert_eq!(classes.len(), 169);

        for class in classes {
            let cards = class.cards();
            assert_eq!(StartingHand::new(&cards).unwrap(), class);
        }
    }

    #[test]
    fn starting_hand_serde() {
        let h = hand("KS TS");
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(serde_json::from_str::<StartingHand>(&json).unwrap(), h);
        assert!(json.contains("King") && json.contains("Ten"), "{json}");
    }

    #[test]
    fn errors() {
        let cards = parse_cards("AS KS QS").unwrap();
        assert!(StartingHand::new(&cards).is_err());
        assert!(StartingHand::new(&cards[..1]).is_err());
        assert_eq!(
            StartingHand::new(&[cards[0], cards[0]]),
            Err(Error::DuplicateCard(cards[0]))
        );
        assert!(!StartingHand::from_ranks(Rank::Ace, Rank::Ace, true).is_suited());
    }
}
