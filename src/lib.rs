//! # blackjack-engine
//!
//! A single-player-versus-dealer blackjack engine built from pure state
//! transitions.
//!
//! ## Design Principles
//!
//! 1. **Immutable State**: Every transition takes a `GameState` and returns
//!    a new one. Nothing is mutated in place, so any intermediate state can
//!    be kept, compared, or persisted.
//!
//! 2. **Deterministic Shoes**: The RNG position lives in the state. The same
//!    state always reshuffles into the same shoe.
//!
//! 3. **Configuration Over Constants**: Deck count, minimum bet, the hand
//!    ceiling and the dealer threshold come from a `TableConfig` threaded
//!    into the service.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs` for the shoe,
//!   hands and split maps.
//!
//! - **Single Source of Truth**: The dealer hand is stored fully visible;
//!   the player's masked view is projected from it on demand.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, hand ids, outcome codes, errors, state
//! - `cards`: Cards and the shoe
//! - `hands`: Player and dealer hands
//! - `rules`: Hand value, classification, naturals, winner, split checks
//! - `round`: Betting, the state manager, and the round service
//!
//! ## Example
//!
//! ```
//! use blackjack_engine::{place_bet, GameService, GameState, TableConfig};
//!
//! let config = TableConfig::default();
//! let service = GameService::new(config.clone());
//!
//! let state = place_bet(&GameState::new(42), 10, &config).unwrap();
//! let state = service.initialize_round(&state).unwrap();
//! assert!(state.round_active);
//!
//! let settled = service.stand_and_settle(&state).unwrap();
//! assert_eq!(settled.state.bet, 0);
//! ```

pub mod cards;
pub mod core;
pub mod hands;
pub mod round;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DeckError, EngineError, GameRng, GameRngState, GameState, HandId, HandState, Outcome,
    RuleError, TableConfig,
};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::hands::{DealerHand, MaskedDealerHand, PlayerHand};

pub use crate::round::{place_bet, retake_bet, GameService, GameStateManager, SplitHalf, Transaction};
