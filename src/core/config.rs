//! Table configuration.
//!
//! Every table constant the engine needs (shoe size, minimum bet, split
//! ceiling, dealer threshold) lives in `TableConfig` and is passed in
//! explicitly. Nothing reads ambient globals.
//!
//! ```
//! use blackjack_engine::core::TableConfig;
//!
//! let config = TableConfig::new().with_deck_count(6).with_minimum_bet(5);
//! assert_eq!(config.initial_deck_length(), 312);
//! ```

use serde::{Deserialize, Serialize};

/// Cards in one physical deck.
pub const CARDS_IN_DECK: usize = 52;

/// Physical decks shuffled into a shoe by default.
pub const DEFAULT_DECK_COUNT: usize = 2;

/// Smallest bet placement accepted by default.
pub const DEFAULT_MINIMUM_BET: u32 = 1;

/// Hands a player may hold in one round through splitting.
pub const MAX_HANDS_PER_ROUND: u32 = 4;

/// The dealer draws while its sum is below this value.
pub const DEALER_STANDS_ON: u32 = 17;

/// Configuration for a blackjack table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Physical 52-card decks in the shoe (at least 1).
    pub deck_count: usize,

    /// Smallest single bet placement.
    pub minimum_bet: u32,

    /// Hand-count ceiling for splits within a round.
    pub max_hands: u32,

    /// Dealer hits while its sum is strictly below this.
    pub dealer_stands_on: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            deck_count: DEFAULT_DECK_COUNT,
            minimum_bet: DEFAULT_MINIMUM_BET,
            max_hands: MAX_HANDS_PER_ROUND,
            dealer_stands_on: DEALER_STANDS_ON,
        }
    }
}

impl TableConfig {
    /// Create a configuration with the standard table defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of physical decks in the shoe.
    #[must_use]
    pub fn with_deck_count(mut self, deck_count: usize) -> Self {
        assert!(deck_count > 0, "Shoe must hold at least 1 deck");
        self.deck_count = deck_count;
        self
    }

    /// Set the minimum bet placement.
    #[must_use]
    pub fn with_minimum_bet(mut self, minimum_bet: u32) -> Self {
        self.minimum_bet = minimum_bet;
        self
    }

    /// Set the hand-count ceiling for splits.
    #[must_use]
    pub fn with_max_hands(mut self, max_hands: u32) -> Self {
        assert!(max_hands > 0, "Must allow at least 1 hand");
        self.max_hands = max_hands;
        self
    }

    /// Set the sum the dealer stands on.
    #[must_use]
    pub fn with_dealer_stands_on(mut self, sum: u32) -> Self {
        self.dealer_stands_on = sum;
        self
    }

    /// Length of a freshly shuffled shoe.
    #[must_use]
    pub fn initial_deck_length(&self) -> usize {
        self.deck_count * CARDS_IN_DECK
    }
}
