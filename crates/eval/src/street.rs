// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Betting streets.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// A betting street, named after the number of board cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// No board cards.
    Preflop,
    /// Three board cards.
    Flop,
    /// Four board cards.
    Turn,
    /// Five board cards.
    River,
}

impl Street {
    /// The street for a number of board cards.
    pub fn from_board_len(len: usize) -> Result<Street> {
        match len {
            0 => Ok(Street::Preflop),
            3 => Ok(Street::Flop),
            4 => Ok(Street::Turn),
            5 => Ok(Street::River),
            found => Err(Error::InsufficientCards {
                expected: "0, 3, 4 or 5",
                found,
            }),
        }
    }

    /// The number of board cards on this street.
    pub fn board_len(&self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// Checks a board has the size for this street.
    pub(crate) fn check_board(&self, len: usize) -> Result<()> {
        if len == self.board_len() {
            return Ok(());
        }

        let expected = match self {
            Street::Preflop => "0",
            Street::Flop => "3",
            Street::Turn => "4",
            Street::River => "5",
        };

        Err(Error::InsufficientCards {
            expected,
            found: len,
        })
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };

        write!(f, "{s}")
    }
}

impl FromStr for Street {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "preflop" => Ok(Street::Preflop),
            "flop" => Ok(Street::Flop),
            "turn" => Ok(Street::Turn),
            "river" => Ok(Street::River),
            _ => Err(Error::InvalidStreet(s.to_string())),
        }
    }
}
