//! Player hand identifiers.
//!
//! Every player hand dealt in a round gets a `HandId` minted from the
//! state's hand counter. The first hand of a round is `P-001`; each split
//! mints the next one.
//!
//! ## Ordering
//!
//! Ids are ordered by counter value, which is creation order. The wire
//! form is zero-padded to three digits, so for the first 999 hands of a
//! round lexicographic order on the strings agrees as well.
//!
//! ```
//! use blackjack_engine::core::HandId;
//!
//! let first = HandId::from_counter(1);
//! assert_eq!(first.to_string(), "P-001");
//! assert_eq!("P-012".parse::<HandId>().unwrap(), HandId::from_counter(12));
//! assert!(first < HandId::from_counter(2));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier of a player hand within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HandId(u32);

impl HandId {
    /// Create the id for the given hand-counter value.
    #[must_use]
    pub const fn from_counter(counter: u32) -> Self {
        Self(counter)
    }

    /// Get the counter value this id was minted from.
    #[must_use]
    pub const fn counter(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for HandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P-{:03}", self.0)
    }
}

/// A string that is not a `P-NNN` hand id.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid hand id: {0:?}")]
pub struct HandIdParseError(pub String);

impl std::str::FromStr for HandId {
    type Err = HandIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("P-")
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u32>().ok())
            .map(HandId)
            .ok_or_else(|| HandIdParseError(s.to_string()))
    }
}

impl From<HandId> for String {
    fn from(id: HandId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for HandId {
    type Error = HandIdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
