//! Core engine types: configuration, RNG, ids, outcome codes, errors, state.
//!
//! Everything here is independent of how a round is played. The round
//! layer threads a `TableConfig` into its transitions instead of reading
//! global constants.

pub mod config;
pub mod error;
pub mod hand_id;
pub mod outcome;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use config::TableConfig;
pub use error::{DeckError, EngineError, RuleError};
pub use hand_id::{HandId, HandIdParseError};
pub use outcome::{HandState, Outcome, UnknownCode};
pub use rng::{GameRng, GameRngState};
pub use snapshot::SnapshotError;
pub use state::GameState;
