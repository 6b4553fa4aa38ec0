//! Hand-state classification.

use crate::core::outcome::HandState;

/// Classify a hand from its sum and card count.
///
/// A two-card 21 is a natural blackjack only if no split happened this
/// round; after a split, or with more cards, 21 is plain `TwentyOne`.
#[must_use]
pub fn classify(sum: u32, card_count: usize, split_this_round: bool) -> HandState {
    match sum {
        s if s > 21 => HandState::Bust,
        21 if card_count == 2 && !split_this_round => HandState::Blackjack,
        21 => HandState::TwentyOne,
        _ => HandState::Under21,
    }
}
