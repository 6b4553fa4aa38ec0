//! Engine error types.
//!
//! - `DeckError`: dealing from an exhausted deck. Recovered inside the
//!   state manager by reshuffling; never seen by `GameService` callers.
//! - `RuleError`: the requested action breaks a table rule. The state is
//!   fine and the caller may try something else.
//! - `EngineError`: what transitions return. `MissingHand` means a
//!   transition was handed a state that cannot exist at that point of a
//!   round; treat it as fatal.

use thiserror::Error;

/// Failure to deal from a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("cannot deal from an empty deck")]
    Empty,
}

/// A table rule refused the requested action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("no round is active")]
    RoundNotActive,

    #[error("bets cannot change while a round is active")]
    RoundInProgress,

    #[error("bet of {amount} is below the table minimum of {minimum}")]
    BetTooLow { amount: u32, minimum: u32 },

    #[error("bet total would exceed the largest allowed stake")]
    BetOverflow,

    #[error("there is no bet to retake")]
    NoBetToRetake,

    #[error("double is only allowed on a two-card hand, hand has {cards}")]
    DoubleNotAllowed { cards: usize },

    #[error("insurance is only offered against a dealer ace")]
    InsuranceNotOffered,
}

/// Error returned by round transitions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error("invariant violated: game state has no {0}")]
    MissingHand(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = RuleError::BetTooLow { amount: 0, minimum: 1 };
        assert_eq!(err.to_string(), "bet of 0 is below the table minimum of 1");

        let err = EngineError::MissingHand("player hand");
        assert_eq!(err.to_string(), "invariant violated: game state has no player hand");
    }

    #[test]
    fn test_rule_error_is_transparent() {
        let err: EngineError = RuleError::NoBetToRetake.into();
        assert_eq!(err.to_string(), "there is no bet to retake");
        assert_eq!(err, EngineError::Rule(RuleError::NoBetToRetake));
    }
}
