//! The shoe: an immutable, ordered sequence of cards.
//!
//! A deck is only ever shuffled when it is created. After that, dealing
//! takes the front card and yields a new deck holding the rest; the deck
//! dealt from is left untouched. Backed by `im::Vector`, so each deal
//! shares structure with its predecessor instead of copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::config::TableConfig;
use crate::core::error::DeckError;
use crate::core::rng::GameRng;

/// Ordered cards remaining in the shoe. The front card is dealt next.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Build `config.deck_count` physical decks, concatenate them, and
    /// permute the result.
    #[must_use]
    pub fn create(config: &TableConfig, rng: &mut GameRng) -> Self {
        let mut cards = Vec::with_capacity(config.initial_deck_length());
        for _ in 0..config.deck_count {
            for suit in Suit::STANDARD {
                for rank in Rank::STANDARD {
                    cards.push(Card::new(suit, rank));
                }
            }
        }
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Build a deck that deals the given cards in order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Deal the front card.
    ///
    /// Returns the card and the remaining deck, order preserved.
    pub fn deal(&self) -> Result<(Card, Deck), DeckError> {
        let mut rest = self.cards.clone();
        let card = rest.pop_front().ok_or(DeckError::Empty)?;
        Ok((card, Deck { cards: rest }))
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the remaining cards in deal order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
