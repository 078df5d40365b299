// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards out of 5, 6 or 7 cards.
use serde::{Deserialize, Serialize};

use super::HandRank;
use crate::{Card, Error, Result, check_distinct};

/// Creates the table of 5-cards subsets positions out of N cards.
const fn make_subsets<const N: usize, const M: usize>() -> [[u8; 5]; M] {
    let mut out = [[0u8; 5]; M];
    let mut idx = 0;
    let mut mask = 0u32;

    while mask < (1 << N) {
        if mask.count_ones() == 5 {
            let mut pos = 0;
            let mut bit = 0;
            while bit < N {
                if mask & (1 << bit) != 0 {
                    out[idx][pos] = bit as u8;
                    pos += 1;
                }
                bit += 1;
            }
            idx += 1;
        }
        mask += 1;
    }

    assert!(idx == M, "M must be nck(N, 5)");
    out
}

const SUBSETS_5: [[u8; 5]; 1] = make_subsets::<5, 1>();
const SUBSETS_6: [[u8; 5]; 6] = make_subsets::<6, 6>();
const SUBSETS_7: [[u8; 5]; 21] = make_subsets::<7, 21>();

/// The best five cards hand and its rank.
///
/// Serializes as its five cards, the rank is classified again when
/// deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "[Card; 5]", try_from = "[Card; 5]")]
pub struct BestHand {
    rank: HandRank,
    cards: [Card; 5],
}

impl BestHand {
    /// Selects the best five cards hand out of 5, 6 or 7 distinct cards.
    ///
    /// ```
    /// # use showdown_eval::*;
    /// let cards = parse_cards("KH KC 5D 5S 9H 2C 3D").unwrap();
    /// let best = BestHand::select(&cards).unwrap();
    /// assert_eq!(best.rank().category(), HandCategory::TwoPair);
    /// assert_eq!(best.rank().to_string(), "Two Pair, Kings and Fives");
    /// ```
    pub fn select(cards: &[Card]) -> Result<BestHand> {
        validate(cards)?;

        let (rank, subset) = best_rank(cards);
        let mut best = [cards[0]; 5];
        for (card, &pos) in best.iter_mut().zip(subset) {
            *card = cards[pos as usize];
        }

        Ok(BestHand { rank, cards: best })
    }

    /// The hand rank.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The five cards that make the hand.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }
}

impl From<BestHand> for [Card; 5] {
    fn from(best: BestHand) -> [Card; 5] {
        best.cards
    }
}

impl TryFrom<[Card; 5]> for BestHand {
    type Error = Error;

    fn try_from(cards: [Card; 5]) -> Result<Self> {
        BestHand::select(&cards)
    }
}

impl HandRank {
    /// The rank of the best five cards hand out of 5, 6 or 7 distinct cards.
    pub fn best_of(cards: &[Card]) -> Result<HandRank> {
        validate(cards)?;
        Ok(best_rank(cards).0)
    }
}

fn validate(cards: &[Card]) -> Result<()> {
    if !(5..=7).contains(&cards.len()) {
        return Err(Error::InsufficientCards {
            expected: "5 to 7",
            found: cards.len(),
        });
    }

    check_distinct(cards)
}

/// Returns the best rank and its subset positions for 5 to 7 distinct cards.
#[inline]
pub(crate) fn best_rank(cards: &[Card]) -> (HandRank, &'static [u8; 5]) {
    let subsets: &'static [[u8; 5]] = match cards.len() {
        5 => &SUBSETS_5,
        6 => &SUBSETS_6,
        7 => &SUBSETS_7,
        n => unreachable!("invalid hand size {n}"),
    };

    let mut best = (HandRank::from_five(&pick(cards, &subsets[0])), &subsets[0]);
    for subset in &subsets[1..] {
        let rank = HandRank::from_five(&pick(cards, subset));
        if rank > best.0 {
            best = (rank, subset);
        }
    }

    best
}

#[inline]
fn pick(cards: &[Card], subset: &[u8; 5]) -> [Card; 5] {
    subset.map(|pos| cards[pos as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, HandCategory, parse_cards};
    use proptest::prelude::*;

    #[test]
    fn subsets_tables() {
        assert_eq!(SUBSETS_5, [[0, 1, 2, 3, 4]]);
        assert!(SUBSETS_7.iter().all(|s| s.windows(2).all(|w| w[0] < w[1])));

        let mut unique = SUBSETS_7.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 21);
        assert!(SUBSETS_6.iter().all(|s| s[4] < 6));
    }

    #[test]
    fn select_best() {
        let cards = parse_cards("AS KS 2D QS JS 7C TS").unwrap();
        let best = BestHand::select(&cards).unwrap();
        assert_eq!(best.rank().category(), HandCategory::RoyalFlush);

        let mut picked = best.cards().to_vec();
        picked.sort_by_key(|c| c.id());
        let mut expected = parse_cards("AS KS QS JS TS").unwrap();
        expected.sort_by_key(|c| c.id());
        assert_eq!(picked, expected);

        // Board plays, the wheel beats nothing higher.
        let cards = parse_cards("AS 2H 3D 4C 5S KD KH").unwrap();
        let rank = HandRank::best_of(&cards).unwrap();
        assert_eq!(rank.category(), HandCategory::Straight);
        assert_eq!(rank.key(), &[5]);

        // Two trips make a full house with the higher trips.
        let cards = parse_cards("9S 9H 9D 4C 4S 4D AH").unwrap();
        let rank = HandRank::best_of(&cards).unwrap();
        assert_eq!(rank.category(), HandCategory::FullHouse);
        assert_eq!(rank.key(), &[9, 4]);

        // Best kicker out of three pairs.
        let cards = parse_cards("QS QH 8D 8C 3S 3D 2H").unwrap();
        assert_eq!(HandRank::best_of(&cards).unwrap().key(), &[12, 8, 3]);
    }

    #[test]
    fn six_cards() {
        let cards = parse_cards("7H 7D 7S 2C 2D AH").unwrap();
        let best = BestHand::select(&cards).unwrap();
        assert_eq!(best.rank().category(), HandCategory::FullHouse);
        assert!(!best.cards().contains(&cards[5]));
    }

    #[test]
    fn select_errors() {
        let cards = parse_cards("AS KS QS JS TS 9S 8S 7S").unwrap();
        for n in [0, 2, 4, 8] {
            assert_eq!(
                BestHand::select(&cards[..n]),
                Err(Error::InsufficientCards {
                    expected: "5 to 7",
                    found: n
                })
            );
        }

        let mut dup = cards[..7].to_vec();
        dup[6] = dup[1];
        assert_eq!(HandRank::best_of(&dup), Err(Error::DuplicateCard(dup[1])));
    }

    #[test]
    fn best_hand_serde() {
        let cards = parse_cards("9S 9H 9D 4C 4S 4D AH").unwrap();
        let best = BestHand::select(&cards).unwrap();

        let json = serde_json::to_string(&best).unwrap();
        let de = serde_json::from_str::<BestHand>(&json).unwrap();
        assert_eq!(de, best);
        assert_eq!(de.rank().to_string(), "Full House, Nines full of Fours");

        // The rank comes from the cards.
        let cards = parse_cards("KH KC 5D 5S 9H").unwrap();
        let json = serde_json::to_string(&cards).unwrap();
        let de = serde_json::from_str::<BestHand>(&json).unwrap();
        assert_eq!(de.rank().category(), HandCategory::TwoPair);
        assert_eq!(de.rank().key(), &[13, 5, 9]);

        // Duplicate cards, wrong sizes and bad ids are rejected.
        let dup = [cards[0], cards[0], cards[1], cards[2], cards[3]];
        let json = serde_json::to_string(&dup).unwrap();
        assert!(serde_json::from_str::<BestHand>(&json).is_err());

        let json = serde_json::to_string(&cards[..4]).unwrap();
        assert!(serde_json::from_str::<BestHand>(&json).is_err());

        let json = format!("[{}, 9, 8, 7, 6]", cards[0].id());
        assert!(serde_json::from_str::<BestHand>(&json).is_err());

        // Ranks serialize with their category and key.
        let json = serde_json::to_string(&de.rank()).unwrap();
        assert!(json.contains("TwoPair"), "{json}");
    }

    fn brute_force(cards: &[Card]) -> HandRank {
        let n = cards.len();
        let mut best = None;
        for a in 0..n {
            for b in a + 1..n {
                for c in b + 1..n {
                    for d in c + 1..n {
                        for e in d + 1..n {
                            let hand = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                            let rank = HandRank::classify(&hand).unwrap();
                            best = best.max(Some(rank));
                        }
                    }
                }
            }
        }

        best.unwrap()
    }

    fn hand(n: usize) -> impl Strategy<Value = Vec<Card>> {
        proptest::sample::subsequence(Deck::default().cards().to_vec(), n).prop_shuffle()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn seven_cards_matches_brute_force(cards in hand(7)) {
            let best = BestHand::select(&cards)?;
            prop_assert_eq!(best.rank(), brute_force(&cards));
            prop_assert_eq!(HandRank::classify(best.cards())?, best.rank());
            prop_assert!(best.cards().iter().all(|c| cards.contains(c)));
        }

        #[test]
        fn six_cards_matches_brute_force(cards in hand(6)) {
            prop_assert_eq!(HandRank::best_of(&cards)?, brute_force(&cards));
        }
    }
}
