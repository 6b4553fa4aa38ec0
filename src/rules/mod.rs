//! Blackjack rules as pure functions.
//!
//! - `hand_value`: soft-ace hand sum
//! - `classify`: hand state from sum and card count
//! - `natural_outcome`, `winner`: round results
//! - `can_split`: split eligibility

pub mod classify;
pub mod engine;
pub mod value;

pub use classify::classify;
pub use engine::{can_split, natural_outcome, winner};
pub use value::hand_value;
