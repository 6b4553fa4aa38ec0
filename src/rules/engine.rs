//! Round-result rules.
//!
//! Pure functions over hands. The round service calls into these but
//! never re-derives naturals, winners, or split eligibility itself.
//!
//! ## Naturals
//!
//! A natural is a two-card 21 from the opening deal. `natural_outcome`
//! compares the player's and the dealer's opening hands.
//!
//! ## Winner
//!
//! `winner` compares finished hands. A player bust loses even when the
//! dealer also busts.

use crate::cards::Card;
use crate::core::outcome::Outcome;
use crate::hands::{DealerHand, PlayerHand};

fn is_natural(card_count: usize, sum: u32) -> bool {
    card_count == 2 && sum == 21
}

/// Outcome of the opening deal.
#[must_use]
pub fn natural_outcome(player: &PlayerHand, dealer: &DealerHand) -> Outcome {
    let player_natural = is_natural(player.len(), player.sum());
    let dealer_natural = is_natural(dealer.len(), dealer.sum());

    match (player_natural, dealer_natural) {
        (true, true) => Outcome::BlackjackPush,
        (true, false) => Outcome::BlackjackPlayerWon,
        (false, true) => Outcome::BlackjackDealerWon,
        (false, false) => Outcome::None,
    }
}

/// Compare finished hands.
///
/// Returns `Outcome::None` when either hand is missing.
#[must_use]
pub fn winner(player: Option<&PlayerHand>, dealer: Option<&DealerHand>) -> Outcome {
    let (Some(player), Some(dealer)) = (player, dealer) else {
        return Outcome::None;
    };

    let (p, d) = (player.sum(), dealer.sum());
    if p > 21 {
        Outcome::PlayerLost
    } else if d > 21 {
        Outcome::PlayerWon
    } else if p == d {
        Outcome::Push
    } else if p > d {
        Outcome::PlayerWon
    } else {
        Outcome::DealerWon
    }
}

/// Whether two cards may be split: same rank, or both worth ten.
#[must_use]
pub fn can_split(cards: &[Card]) -> bool {
    match cards {
        [a, b] => a.rank == b.rank || (a.base_value() == 10 && b.base_value() == 10),
        _ => false,
    }
}
