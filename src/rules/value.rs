//! Hand valuation with soft aces.

use crate::cards::{Card, Rank};

/// Blackjack sum of a hand.
///
/// Every ace counts 11 at first. While the total is over 21 and an ace is
/// still counted high, one ace drops to 1. The result depends only on the
/// multiset of cards, never their order. An empty hand is worth 0.
///
/// ```
/// use blackjack_engine::cards::{Card, Rank, Suit};
/// use blackjack_engine::rules::hand_value;
///
/// let hand = [Card::new(Suit::Hearts, Rank::Ace), Card::new(Suit::Spades, Rank::King)];
/// assert_eq!(hand_value(&hand), 21);
/// ```
#[must_use]
pub fn hand_value<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u32 {
    let mut total = 0;
    let mut soft_aces = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            soft_aces += 1;
        }
        total += card.base_value();
    }

    while total > 21 && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    total
}
