//! Cards and the shoe.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: card faces, including the masked placeholder
//! - `Card`: immutable card with a textual wire form (`"♥A"`)
//! - `Deck`: immutable ordered shoe; dealing yields a new deck

pub mod card;
pub mod deck;

pub use card::{Card, CardParseError, Rank, Suit};
pub use deck::Deck;
