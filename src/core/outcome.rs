//! Hand-state and outcome codes.
//!
//! Both enums travel to clients as plain integers, so each variant has a
//! fixed code and serializes as that code.
//!
//! | `HandState` | code |   | `Outcome`           | code |
//! |-------------|------|---|---------------------|------|
//! | `None`      | 0    |   | `None`              | 0    |
//! | `TwentyOne` | 8    |   | `BlackjackPlayerWon`| 1    |
//! | `Bust`      | 9    |   | `BlackjackPush`     | 2    |
//! | `Under21`   | 10   |   | `BlackjackDealerWon`| 3    |
//! | `Blackjack` | 11   |   | `Push`              | 4    |
//! |             |      |   | `PlayerLost`        | 5    |
//! |             |      |   | `PlayerWon`         | 6    |
//! |             |      |   | `DealerWon`         | 7    |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An integer that does not name a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown {kind} code: {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: u8,
}

/// Classification of a hand's sum and size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum HandState {
    /// Not dealt yet.
    #[default]
    None,
    /// Below 21.
    Under21,
    /// Two-card 21 from the opening deal.
    Blackjack,
    /// 21 after a split or with more than two cards.
    TwentyOne,
    /// Over 21.
    Bust,
}

impl HandState {
    /// Wire code of this state.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            HandState::None => 0,
            HandState::TwentyOne => 8,
            HandState::Bust => 9,
            HandState::Under21 => 10,
            HandState::Blackjack => 11,
        }
    }
}

impl From<HandState> for u8 {
    fn from(state: HandState) -> Self {
        state.code()
    }
}

impl TryFrom<u8> for HandState {
    type Error = UnknownCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(HandState::None),
            8 => Ok(HandState::TwentyOne),
            9 => Ok(HandState::Bust),
            10 => Ok(HandState::Under21),
            11 => Ok(HandState::Blackjack),
            _ => Err(UnknownCode { kind: "hand state", code }),
        }
    }
}

/// Result of comparing the player against the dealer.
///
/// The first three non-`None` variants come from the opening deal
/// (natural 21s); the rest from the showdown after the player stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Outcome {
    /// No outcome yet, or a hand is missing.
    #[default]
    None,
    BlackjackPlayerWon,
    BlackjackPush,
    BlackjackDealerWon,
    Push,
    PlayerLost,
    PlayerWon,
    DealerWon,
}

impl Outcome {
    /// Wire code of this outcome.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Outcome::None => 0,
            Outcome::BlackjackPlayerWon => 1,
            Outcome::BlackjackPush => 2,
            Outcome::BlackjackDealerWon => 3,
            Outcome::Push => 4,
            Outcome::PlayerLost => 5,
            Outcome::PlayerWon => 6,
            Outcome::DealerWon => 7,
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.code()
    }
}

impl TryFrom<u8> for Outcome {
    type Error = UnknownCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Outcome::None),
            1 => Ok(Outcome::BlackjackPlayerWon),
            2 => Ok(Outcome::BlackjackPush),
            3 => Ok(Outcome::BlackjackDealerWon),
            4 => Ok(Outcome::Push),
            5 => Ok(Outcome::PlayerLost),
            6 => Ok(Outcome::PlayerWon),
            7 => Ok(Outcome::DealerWon),
            _ => Err(UnknownCode { kind: "outcome", code }),
        }
    }
}
