//! Game state: the aggregate every transition consumes and returns.
//!
//! ## GameState
//!
//! One value per table session, holding:
//! - The shoe and the RNG position used for its next reshuffle
//! - The total bet and the history of individual placements
//! - The active player hand, the dealer hand, and the incoming split slot
//! - Split bookkeeping: pending hands and their readiness flags
//! - Round counters and outcome codes
//!
//! Transitions never mutate a state in place. They build a new value with
//! struct update syntax, and `im` collections make that clone cheap.
//!
//! ## Split bookkeeping
//!
//! `pending` and `readiness` are keyed by `HandId`. Ids are minted from
//! `hand_counter` and `HandId` orders numerically, so iterating either map
//! visits hands in creation order.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::hand_id::HandId;
use super::outcome::Outcome;
use super::rng::{GameRng, GameRngState};
use crate::cards::Deck;
use crate::hands::{DealerHand, MaskedDealerHand, PlayerHand};

/// Complete state of one player's table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Session ===
    /// Owning client session, carried across rounds.
    pub client_id: Option<Uuid>,

    // === Shoe ===
    /// Remaining shoe. `None` until the first deal creates one.
    pub deck: Option<Deck>,

    /// Position of the shuffle stream used for the next new shoe.
    pub rng: GameRngState,

    // === Betting ===
    /// Total bet for the round.
    pub bet: u32,

    /// Individual placements, oldest first.
    pub bet_list: Vector<u32>,

    /// Whether a round is in progress.
    pub round_active: bool,

    // === Hands ===
    /// The hand currently being played.
    pub player: Option<PlayerHand>,

    /// Dealer hand, fully visible. See `dealer_masked` for the player's view.
    pub dealer: Option<DealerHand>,

    /// Incoming split hand being promoted during sequencing.
    pub split_player: Option<PlayerHand>,

    // === Split bookkeeping ===
    /// Split hands awaiting their turn.
    pub pending: OrdMap<HandId, PlayerHand>,

    /// Whether each split hand has acted.
    pub readiness: OrdMap<HandId, bool>,

    /// Source of new hand ids. Reset with the round.
    pub hand_counter: u32,

    /// Number of split hands still pending.
    pub split_requests: u32,

    /// Whether any split occurred this round.
    pub split_in_round: bool,

    // === Outcomes ===
    /// Round opened with a pair of aces.
    pub aces: bool,

    /// Natural-21 outcome of the opening deal.
    pub natural: Outcome,

    /// Result of the last stand.
    pub winner: Outcome,
}

impl GameState {
    /// Create an empty table whose shoes are shuffled from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            client_id: None,
            deck: None,
            rng: GameRngState::seeded(seed),
            bet: 0,
            bet_list: Vector::new(),
            round_active: false,
            player: None,
            dealer: None,
            split_player: None,
            pending: OrdMap::new(),
            readiness: OrdMap::new(),
            hand_counter: 0,
            split_requests: 0,
            split_in_round: false,
            aces: false,
            natural: Outcome::None,
            winner: Outcome::None,
        }
    }

    /// Create an empty table seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy().state(),
            ..Self::new(0)
        }
    }

    /// Attach the owning client session.
    #[must_use]
    pub fn with_client_id(mut self, client_id: Uuid) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Cards left in the shoe, 0 when there is none.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.as_ref().map_or(0, Deck::len)
    }

    /// Counter value the next minted hand id will use.
    #[must_use]
    pub fn next_hand_counter(&self) -> u32 {
        self.hand_counter + 1
    }

    /// Dealer hand as shown to the player.
    #[must_use]
    pub fn dealer_masked(&self) -> Option<MaskedDealerHand> {
        self.dealer.as_ref().map(DealerHand::masked)
    }
}
