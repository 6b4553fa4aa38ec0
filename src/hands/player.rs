//! Player hands.
//!
//! A `PlayerHand` owns its cards and keeps its `sum` and `state` in step
//! with them: every method that changes the cards recomputes both, so a
//! hand is never observed with a stale total.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::hand_id::HandId;
use crate::core::outcome::HandState;
use crate::rules::{classify, hand_value};

/// One of the player's hands in a round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerHand {
    id: HandId,
    cards: Vector<Card>,
    can_split: bool,
    stood: bool,
    bet: u32,
    sum: u32,
    state: HandState,
}

impl PlayerHand {
    /// Create a hand holding `cards`, with sum and state computed.
    ///
    /// `split_this_round` decides whether a two-card 21 counts as a natural.
    #[must_use]
    pub fn new(
        id: HandId,
        cards: impl IntoIterator<Item = Card>,
        bet: u32,
        split_this_round: bool,
    ) -> Self {
        let cards: Vector<Card> = cards.into_iter().collect();
        let sum = hand_value(&cards);
        let state = classify(sum, cards.len(), split_this_round);
        Self {
            id,
            cards,
            can_split: false,
            stood: false,
            bet,
            sum,
            state,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> HandId {
        self.id
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn can_split(&self) -> bool {
        self.can_split
    }

    /// Whether the player has finished acting on this hand.
    #[must_use]
    pub fn stood(&self) -> bool {
        self.stood
    }

    /// Stake attributed to this hand.
    #[must_use]
    pub fn bet(&self) -> u32 {
        self.bet
    }

    #[must_use]
    pub fn sum(&self) -> u32 {
        self.sum
    }

    #[must_use]
    pub fn state(&self) -> HandState {
        self.state
    }

    // === Derived hands ===

    /// Add a card, recomputing sum and state.
    #[must_use]
    pub fn with_card(mut self, card: Card, split_this_round: bool) -> Self {
        self.cards.push_back(card);
        self.recompute(split_this_round)
    }

    /// Keep only the first `len` cards, recomputing sum and state.
    #[must_use]
    pub fn truncated(mut self, len: usize, split_this_round: bool) -> Self {
        self.cards.truncate(len);
        self.recompute(split_this_round)
    }

    /// Mark the hand as stood and reclassify it.
    #[must_use]
    pub fn stand(mut self, split_this_round: bool) -> Self {
        self.stood = true;
        self.recompute(split_this_round)
    }

    #[must_use]
    pub fn with_stood(mut self, stood: bool) -> Self {
        self.stood = stood;
        self
    }

    #[must_use]
    pub fn with_bet(mut self, bet: u32) -> Self {
        self.bet = bet;
        self
    }

    #[must_use]
    pub fn with_can_split(mut self, can_split: bool) -> Self {
        self.can_split = can_split;
        self
    }

    fn recompute(mut self, split_this_round: bool) -> Self {
        self.sum = hand_value(&self.cards);
        self.state = classify(self.sum, self.cards.len(), split_this_round);
        self
    }
}
