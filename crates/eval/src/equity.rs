// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity estimator.
//!
//! Each trial completes the board and deals the opponents holdings with cards
//! sampled without replacement from the unseen cards, then compares the best
//! hands at showdown. Opponents holdings are uniformly random: the estimate is
//! the equity against any two cards, not against a realistic range, callers
//! that want range aware equity must weight the results themselves.
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::{Card, Deck, Error, Result, Street, check_distinct, eval::best_rank};

#[cfg(feature = "parallel")]
mod parallel;

const BOARD_SIZE: usize = 5;
const HAND_SIZE: usize = 7;

/// Equity estimator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquityConfig {
    /// Trials with no board cards.
    pub preflop: u32,
    /// Trials on the flop.
    pub flop: u32,
    /// Trials on the turn.
    pub turn: u32,
    /// Trials on the river.
    pub river: u32,
    /// Number of opponents.
    pub opponents: u8,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            preflop: 100,
            flop: 100,
            turn: 50,
            river: 20,
            opponents: 1,
        }
    }
}

impl EquityConfig {
    /// Checks every street has trials and the opponents are 1 to
    /// [Equity::MAX_OPPONENTS].
    pub fn validate(&self) -> Result<()> {
        let streets = [
            (Street::Preflop, self.preflop),
            (Street::Flop, self.flop),
            (Street::Turn, self.turn),
            (Street::River, self.river),
        ];

        if let Some((street, _)) = streets.iter().find(|(_, trials)| *trials == 0) {
            return Err(Error::InvalidConfig(format!("no trials on the {street}")));
        }

        if !(1..=Equity::MAX_OPPONENTS).contains(&(self.opponents as usize)) {
            return Err(Error::InvalidConfig(format!(
                "{} opponents, expected 1 to {}",
                self.opponents,
                Equity::MAX_OPPONENTS
            )));
        }

        Ok(())
    }

    /// The number of trials for a street.
    pub fn trials(&self, street: Street) -> u32 {
        match street {
            Street::Preflop => self.preflop,
            Street::Flop => self.flop,
            Street::Turn => self.turn,
            Street::River => self.river,
        }
    }
}

/// The result of an equity estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EquityResult {
    wins: u32,
    ties: u32,
    losses: u32,
    share: f64,
}

/// A trial outcome, ties carry the number of opponents with the same hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Win,
    Tie(u32),
    Loss,
}

impl EquityResult {
    /// The estimated equity in [0, 1], a split pot counts as a share of a win.
    pub fn equity(&self) -> f64 {
        match self.trials() {
            0 => 0.0,
            n => self.share / n as f64,
        }
    }

    /// The number of trials for this estimate.
    pub fn trials(&self) -> u32 {
        self.wins + self.ties + self.losses
    }

    /// Trials won outright.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Trials split with one or more opponents.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Trials lost.
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Adds the trials of another estimate.
    pub fn merge(&mut self, other: &EquityResult) {
        self.wins += other.wins;
        self.ties += other.ties;
        self.losses += other.losses;
        self.share += other.share;
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => {
                self.wins += 1;
                self.share += 1.0;
            }
            Outcome::Tie(opponents) => {
                self.ties += 1;
                self.share += 1.0 / (opponents + 1) as f64;
            }
            Outcome::Loss => self.losses += 1,
        }
    }
}

/// Equity estimator for a holding and a board.
///
/// ```
/// # use showdown_eval::*;
/// # use rand::{SeedableRng, rngs::SmallRng};
/// let hole = parse_cards("AS AH").unwrap();
/// let mut rng = SmallRng::seed_from_u64(42);
/// let res = Equity::new(&hole, &[]).unwrap().estimate(2_000, &mut rng).unwrap();
/// assert_eq!(res.trials(), 2_000);
/// assert!(res.equity() > 0.8);
/// ```
#[derive(Debug, Clone)]
pub struct Equity {
    hole: [Card; 2],
    board: [Card; BOARD_SIZE],
    board_len: usize,
    opponents: usize,
    deck: Deck,
}

impl Equity {
    /// Maximum number of opponents.
    pub const MAX_OPPONENTS: usize = 9;

    /// Creates an estimator against one opponent.
    ///
    /// The holding must have two cards, the board 0, 3, 4 or 5 cards, and all
    /// cards must be different.
    pub fn new(hole: &[Card], board: &[Card]) -> Result<Self> {
        let hole: [Card; 2] = hole.try_into().map_err(|_| Error::InsufficientCards {
            expected: "2",
            found: hole.len(),
        })?;

        let street = Street::from_board_len(board.len())?;

        let mut seen = [hole[0]; HAND_SIZE];
        seen[1] = hole[1];
        seen[2..2 + board.len()].copy_from_slice(board);
        let seen = &seen[..2 + board.len()];
        check_distinct(seen)?;

        let mut cards = [hole[0]; BOARD_SIZE];
        cards[..board.len()].copy_from_slice(board);

        Ok(Self {
            hole,
            board: cards,
            board_len: street.board_len(),
            opponents: 1,
            deck: Deck::without(seen)?,
        })
    }

    /// Sets the number of opponents.
    ///
    /// Panics if opponents is not 1 <= opponents <= [Self::MAX_OPPONENTS].
    pub fn opponents(mut self, opponents: usize) -> Self {
        assert!(
            (1..=Self::MAX_OPPONENTS).contains(&opponents),
            "1 <= opponents <= {}",
            Self::MAX_OPPONENTS
        );

        self.opponents = opponents;
        self
    }

    /// The street for the known board.
    pub fn street(&self) -> Street {
        match self.board_len {
            0 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }

    /// Estimates the equity with the given number of trials.
    ///
    /// Panics if trials is zero.
    pub fn estimate<R>(&self, trials: u32, rng: &mut R) -> Result<EquityResult>
    where
        R: Rng + ?Sized,
    {
        assert!(trials > 0);

        let mut result = EquityResult::default();
        self.deck
            .sample(rng, trials as usize, self.sample_size(), |sample| {
                result.record(self.showdown(sample));
            })?;

        self.log_result(&result);
        Ok(result)
    }

    /// Estimates the equity with the trials and opponents for this street
    /// from the configuration, fails if the configuration is not valid.
    pub fn estimate_with<R>(&self, config: &EquityConfig, rng: &mut R) -> Result<EquityResult>
    where
        R: Rng + ?Sized,
    {
        config.validate()?;

        let trials = config.trials(self.street());
        if self.opponents == config.opponents as usize {
            self.estimate(trials, rng)
        } else {
            self.clone()
                .opponents(config.opponents as usize)
                .estimate(trials, rng)
        }
    }

    /// The number of cards sampled for each trial.
    fn sample_size(&self) -> usize {
        (BOARD_SIZE - self.board_len) + self.opponents * 2
    }

    /// Runs a showdown for a sample with the missing board cards followed by
    /// the opponents holdings.
    fn showdown(&self, sample: &[Card]) -> Outcome {
        let missing = BOARD_SIZE - self.board_len;

        // The hand has the holding in the first two cards and the board after.
        let mut hand = [self.hole[0]; HAND_SIZE];
        hand[..2].copy_from_slice(&self.hole);
        hand[2..2 + self.board_len].copy_from_slice(&self.board[..self.board_len]);
        hand[2 + self.board_len..].copy_from_slice(&sample[..missing]);

        let (hero, _) = best_rank(&hand);

        let mut tied = 0;
        for holding in sample[missing..].chunks_exact(2) {
            hand[..2].copy_from_slice(holding);
            match best_rank(&hand).0.cmp(&hero) {
                Ordering::Greater => return Outcome::Loss,
                Ordering::Equal => tied += 1,
                Ordering::Less => {}
            }
        }

        if tied == 0 {
            Outcome::Win
        } else {
            Outcome::Tie(tied)
        }
    }

    fn log_result(&self, result: &EquityResult) {
        debug!(
            "Equity {}{} on {} [{}] vs {}: {:.3} ({}/{}/{} of {} trials)",
            self.hole[0],
            self.hole[1],
            self.street(),
            fmt_cards(&self.board[..self.board_len]),
            self.opponents,
            result.equity(),
            result.wins(),
            result.ties(),
            result.losses(),
            result.trials(),
        );
    }
}

fn fmt_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_cards;
    use rand::{SeedableRng, rngs::SmallRng};

    fn equity(hole: &str, board: &str) -> Equity {
        Equity::new(&parse_cards(hole).unwrap(), &parse_cards(board).unwrap()).unwrap()
    }

    #[test]
    fn pocket_aces_preflop() {
        let mut rng = SmallRng::seed_from_u64(42);
        let res = equity("AS AH", "").estimate(5_000, &mut rng).unwrap();
        assert_eq!(res.trials(), 5_000);
        assert!(res.equity() > 0.8, "{}", res.equity());
        assert!(res.equity() < 0.9, "{}", res.equity());
    }

    #[test]
    fn seeded_estimates_repeat() {
        let eq = equity("KD QD", "JD 7C 2S");
        let run = |seed| eq.estimate(500, &mut SmallRng::seed_from_u64(seed)).unwrap();
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn estimates_converge() {
        // Errors shrink as the number of trials grows.
        let eq = equity("AS KS", "");
        let reference = eq
            .estimate(40_000, &mut SmallRng::seed_from_u64(1))
            .unwrap()
            .equity();

        let mean_error = |trials| {
            let runs = 20;
            (0..runs)
                .map(|seed| {
                    let mut rng = SmallRng::seed_from_u64(100 + seed);
                    let e = eq.estimate(trials, &mut rng).unwrap().equity();
                    (e - reference).abs()
                })
                .sum::<f64>()
                / runs as f64
        };

        assert!(mean_error(4_000) < mean_error(40));
        assert!((reference - 0.67).abs() < 0.02, "{reference}");
    }

    #[test]
    fn river_nuts_and_splits() {
        let mut rng = SmallRng::seed_from_u64(3);

        // Royal flush can't lose.
        let res = equity("AS KS", "QS JS TS 2D 3C")
            .estimate(200, &mut rng)
            .unwrap();
        assert_eq!(res.wins(), 200);
        assert_eq!(res.equity(), 1.0);

        // The board is a royal flush, every trial is a split.
        let res = equity("2D 3C", "AS KS QS JS TS")
            .estimate(200, &mut rng)
            .unwrap();
        assert_eq!(res.ties(), 200);
        assert_eq!(res.equity(), 0.5);

        // Three way split.
        let res = equity("2D 3C", "AS KS QS JS TS")
            .opponents(2)
            .estimate(90, &mut rng)
            .unwrap();
        assert_eq!(res.ties(), 90);
        assert!((res.equity() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn more_opponents_less_equity() {
        let eq = equity("JH JD", "");
        let heads_up = eq
            .estimate(3_000, &mut SmallRng::seed_from_u64(9))
            .unwrap();
        let multiway = eq
            .clone()
            .opponents(4)
            .estimate(3_000, &mut SmallRng::seed_from_u64(9))
            .unwrap();
        assert!(multiway.equity() + 0.2 < heads_up.equity());
    }

    #[test]
    fn config_trials() {
        let config = EquityConfig::default();
        let mut rng = SmallRng::seed_from_u64(0);

        for (board, trials) in [("", 100), ("2C 7D 9H", 100), ("2C 7D 9H TS", 50)] {
            let res = equity("AS AH", board)
                .estimate_with(&config, &mut rng)
                .unwrap();
            assert_eq!(res.trials(), trials);
        }

        let res = equity("AS AH", "2C 7D 9H TS JC")
            .estimate_with(&config, &mut rng)
            .unwrap();
        assert_eq!(res.trials(), 20);
        assert!(res.equity() >= 0.0 && res.equity() <= 1.0);
    }

    #[test]
    fn config_from_json() {
        let config = serde_json::from_str::<EquityConfig>(r#"{"turn": 10}"#).unwrap();
        assert_eq!(config.turn, 10);
        assert_eq!(config.river, EquityConfig::default().river);
        assert!(config.validate().is_ok());

        let mut rng = SmallRng::seed_from_u64(0);
        let res = equity("AS AH", "2C 7D 9H TS")
            .estimate_with(&config, &mut rng)
            .unwrap();
        assert_eq!(res.trials(), 10);
    }

    #[test]
    fn invalid_config() {
        let mut rng = SmallRng::seed_from_u64(0);
        let river = equity("AS AH", "2C 7D 9H TS JC");

        for json in [
            r#"{"opponents": 0}"#,
            r#"{"opponents": 12}"#,
            r#"{"preflop": 0}"#,
            r#"{"flop": 0}"#,
            r#"{"turn": 0}"#,
            r#"{"river": 0}"#,
        ] {
            let config = serde_json::from_str::<EquityConfig>(json).unwrap();
            assert!(
                matches!(config.validate(), Err(Error::InvalidConfig(_))),
                "{json}"
            );
            assert!(
                matches!(
                    river.estimate_with(&config, &mut rng),
                    Err(Error::InvalidConfig(_))
                ),
                "{json}"
            );
        }
    }

    #[test]
    fn merge_results() {
        let mut r1 = EquityResult::default();
        r1.record(Outcome::Win);
        r1.record(Outcome::Loss);

        let mut r2 = EquityResult::default();
        r2.record(Outcome::Tie(1));
        r2.record(Outcome::Win);

        r1.merge(&r2);
        assert_eq!((r1.wins(), r1.ties(), r1.losses()), (2, 1, 1));
        assert_eq!(r1.trials(), 4);
        assert!((r1.equity() - 2.5 / 4.0).abs() < 1e-9);
        assert_eq!(EquityResult::default().equity(), 0.0);
    }

    #[test]
    fn input_errors() {
        let cards = parse_cards("AS AH KD QD JD TD 9D").unwrap();

        assert!(matches!(
            Equity::new(&cards[..1], &[]),
            Err(Error::InsufficientCards { found: 1, .. })
        ));
        assert!(matches!(
            Equity::new(&cards[..2], &cards[2..4]),
            Err(Error::InsufficientCards { found: 2, .. })
        ));
        assert!(matches!(
            Equity::new(&cards[..2], &cards[1..4]),
            Err(Error::DuplicateCard(_))
        ));
    }

    #[test]
    #[should_panic]
    fn zero_trials() {
        let _ = equity("AS AH", "").estimate(0, &mut SmallRng::seed_from_u64(0));
    }
}
