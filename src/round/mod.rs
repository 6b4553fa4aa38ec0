//! Round flow: betting, the state manager, and the round service.

pub mod betting;
pub mod manager;
pub mod service;

pub use betting::{place_bet, retake_bet};
pub use manager::{GameStateManager, SplitHalf};
pub use service::{GameService, Transaction};
