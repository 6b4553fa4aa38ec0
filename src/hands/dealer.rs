//! The dealer's hand and the player's view of it.
//!
//! The engine keeps one source of truth, `DealerHand`, holding every card
//! face up. What the player is shown during their turn is derived from it
//! on demand by `DealerHand::masked`: the hole card (the dealer's first
//! card) becomes the masked placeholder, and a dealer natural is hidden
//! until it is revealed by a stand or an insurance decision.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::core::outcome::{HandState, Outcome};
use crate::rules::{classify, hand_value};

/// Fully visible dealer hand, used for settlement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DealerHand {
    cards: Vector<Card>,
    sum: u32,
    state: HandState,
    natural: Outcome,
}

impl DealerHand {
    /// Create a dealer hand holding `cards`.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        let cards: Vector<Card> = cards.into_iter().collect();
        let sum = hand_value(&cards);
        Self {
            state: classify(sum, cards.len(), false),
            cards,
            sum,
            natural: Outcome::None,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn sum(&self) -> u32 {
        self.sum
    }

    #[must_use]
    pub fn state(&self) -> HandState {
        self.state
    }

    /// Natural-21 outcome of the opening deal, unmasked.
    #[must_use]
    pub fn natural(&self) -> Outcome {
        self.natural
    }

    /// The face-up card from the opening deal.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.get(1).copied()
    }

    /// Add a card, recomputing sum and state.
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push_back(card);
        self.sum = hand_value(&self.cards);
        self.state = classify(self.sum, self.cards.len(), false);
        self
    }

    #[must_use]
    pub fn with_natural(mut self, natural: Outcome) -> Self {
        self.natural = natural;
        self
    }

    /// Project the view shown to the player before the reveal.
    #[must_use]
    pub fn masked(&self) -> MaskedDealerHand {
        let mut cards = self.cards.clone();
        if let Some(hole) = cards.front_mut() {
            *hole = Card::masked();
        }

        let natural = match self.natural {
            Outcome::BlackjackDealerWon => Outcome::None,
            other => other,
        };

        MaskedDealerHand {
            cards,
            can_insure: self.up_card().is_some_and(|card| card.rank == Rank::Ace),
            natural,
        }
    }
}

/// Dealer hand as the player sees it during their turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaskedDealerHand {
    /// Cards with the hole card masked.
    pub cards: Vector<Card>,
    /// Insurance is offered when the visible card is an ace.
    pub can_insure: bool,
    /// Opening natural outcome, with a dealer natural hidden.
    pub natural: Outcome,
}
