//! Player and dealer hands.

pub mod dealer;
pub mod player;

pub use dealer::{DealerHand, MaskedDealerHand};
pub use player::PlayerHand;
