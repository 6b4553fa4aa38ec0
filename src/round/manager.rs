//! Low-level state transitions shared by the round service.
//!
//! ## Responsibilities
//!
//! - Reset per-round fields between rounds
//! - Deal from the shoe, reshuffling a new shoe when it runs dry
//! - Play out the dealer hand
//! - Redeal and spawn hands during a split
//! - Pick the next split hand to play
//!
//! An exhausted shoe is handled here and nowhere else: `safe_deal` swaps in
//! a freshly shuffled shoe before dealing, so `DeckError::Empty` never
//! reaches a caller of `GameService`.

use im::{OrdMap, Vector};
use tracing::{debug, info, warn};

use crate::cards::{Card, Deck, Rank};
use crate::core::config::TableConfig;
use crate::core::error::EngineError;
use crate::core::hand_id::HandId;
use crate::core::outcome::Outcome;
use crate::core::rng::{GameRng, GameRngState};
use crate::core::state::GameState;
use crate::hands::PlayerHand;
use crate::rules::can_split;

/// Which half of a split `deal_split_card` handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitHalf {
    /// Redeal a second card to the hand that was split.
    Original,
    /// Mint a new hand holding the card set aside by the split.
    Spawn(Card),
}

/// Deck, dealer and split-sequencing transitions.
#[derive(Clone, Debug, Default)]
pub struct GameStateManager {
    config: TableConfig,
}

impl GameStateManager {
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Clear every per-round field.
    ///
    /// Keeps the shoe, RNG position, client id and total bet. Applying it
    /// twice gives the same state as applying it once.
    #[must_use]
    pub fn reset_round_state(&self, state: &GameState) -> GameState {
        GameState {
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
            ..state.clone()
        }
    }

    /// Install a freshly shuffled shoe.
    #[must_use]
    pub fn create_new_deck(&self, state: &GameState) -> GameState {
        let (deck, rng) = self.shuffle_shoe(&state.rng);
        GameState {
            deck: Some(deck),
            rng,
            ..state.clone()
        }
    }

    fn shuffle_shoe(&self, rng: &GameRngState) -> (Deck, GameRngState) {
        let mut rng = GameRng::from_state(rng);
        let deck = Deck::create(&self.config, &mut rng);
        info!(cards = deck.len(), decks = self.config.deck_count, "shuffled new shoe");
        (deck, rng.state())
    }

    /// Deal one card, reshuffling first if the shoe is absent or empty.
    pub fn safe_deal(&self, state: &GameState) -> Result<(Card, GameState), EngineError> {
        let (deck, rng) = match &state.deck {
            Some(deck) if !deck.is_empty() => (deck.clone(), state.rng),
            Some(_) => {
                warn!("shoe exhausted, reshuffling");
                self.shuffle_shoe(&state.rng)
            }
            None => self.shuffle_shoe(&state.rng),
        };

        let (card, rest) = deck.deal()?;
        Ok((
            card,
            GameState {
                deck: Some(rest),
                rng,
                ..state.clone()
            },
        ))
    }

    /// Draw dealer cards until the hand reaches the stand threshold or busts.
    pub fn process_dealer_drawing(&self, state: &GameState) -> Result<GameState, EngineError> {
        let mut current = state.clone();
        loop {
            let dealer = current
                .dealer
                .as_ref()
                .ok_or(EngineError::MissingHand("dealer hand"))?;
            if dealer.sum() >= self.config.dealer_stands_on || dealer.sum() > 21 {
                return Ok(current);
            }

            let (card, next) = self.safe_deal(&current)?;
            let dealer = dealer.clone().with_card(card);
            debug!(%card, sum = dealer.sum(), "dealer draws");
            current = GameState {
                dealer: Some(dealer),
                ..next
            };
        }
    }

    /// Deal one half of a split.
    ///
    /// `Original` deals the active hand its second card. An ace-headed hand
    /// is never splittable again. `Spawn` creates the next hand id, seeded
    /// with the set-aside card and the active hand's bet, and queues it in
    /// `pending`. Either way the hand is marked as not yet acted.
    pub fn deal_split_card(&self, state: &GameState, half: SplitHalf) -> Result<GameState, EngineError> {
        let hand = state
            .player
            .as_ref()
            .ok_or(EngineError::MissingHand("player hand"))?;

        match half {
            SplitHalf::Original => {
                let (card, next) = self.safe_deal(state)?;
                let hand = hand.clone().with_card(card, true);
                let pair: Vec<Card> = hand.cards().iter().copied().collect();
                let ace_headed = pair.first().is_some_and(|c| c.rank == Rank::Ace);
                let hand = hand
                    .with_can_split(can_split(&pair) && !ace_headed)
                    .with_stood(false);
                let id = hand.id();

                Ok(GameState {
                    player: Some(hand),
                    readiness: next.readiness.update(id, false),
                    ..next
                })
            }
            SplitHalf::Spawn(card) => {
                let counter = state.next_hand_counter();
                let id = HandId::from_counter(counter);
                let spawned = PlayerHand::new(id, [card], hand.bet(), true);
                debug!(hand = %id, %card, "spawned split hand");

                Ok(GameState {
                    hand_counter: counter,
                    pending: state.pending.update(id, spawned),
                    readiness: state.readiness.update(id, false),
                    ..state.clone()
                })
            }
        }
    }

    /// Lowest hand id that has not acted yet.
    #[must_use]
    pub fn find_next_active_player_id(&self, readiness: &OrdMap<HandId, bool>) -> Option<HandId> {
        readiness
            .iter()
            .find(|(_, acted)| !**acted)
            .map(|(id, _)| *id)
    }

    /// Whether any pending hand has not stood.
    #[must_use]
    pub fn any_unacted_hands(&self, pending: &OrdMap<HandId, PlayerHand>) -> bool {
        pending.values().any(|hand| !hand.stood())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::hands::DealerHand;

    fn card(rank: Rank) -> Card {
        Card::new(Suit::Spades, rank)
    }

    fn manager() -> GameStateManager {
        GameStateManager::new(TableConfig::default())
    }

    // =========================================================================
    // Reset
    // =========================================================================

    #[test]
    fn test_reset_clears_round_fields() {
        let state = GameState {
            bet: 40,
            bet_list: Vector::from(vec![40]),
            round_active: true,
            player: Some(PlayerHand::new(HandId::from_counter(1), [card(Rank::Two)], 40, false)),
            dealer: Some(DealerHand::new([card(Rank::Three)])),
            hand_counter: 3,
            split_in_round: true,
            natural: Outcome::BlackjackPush,
            deck: Some(Deck::from_cards([card(Rank::Four)])),
            ..GameState::new(5)
        };

        let reset = manager().reset_round_state(&state);

        assert!(!reset.round_active);
        assert!(reset.bet_list.is_empty());
        assert!(reset.player.is_none());
        assert!(reset.dealer.is_none());
        assert_eq!(reset.hand_counter, 0);
        assert!(!reset.split_in_round);
        assert_eq!(reset.natural, Outcome::None);
        // Preserved across rounds
        assert_eq!(reset.bet, 40);
        assert_eq!(reset.deck_len(), 1);
        assert_eq!(reset.rng, state.rng);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let m = manager();
        let state = GameState {
            round_active: true,
            hand_counter: 2,
            ..GameState::new(1)
        };
        let once = m.reset_round_state(&state);
        assert_eq!(m.reset_round_state(&once), once);
    }

    // =========================================================================
    // Dealing
    // =========================================================================

    #[test]
    fn test_safe_deal_takes_front_card() {
        let state = GameState {
            deck: Some(Deck::from_cards([card(Rank::King), card(Rank::Five)])),
            ..GameState::new(1)
        };

        let (dealt, next) = manager().safe_deal(&state).unwrap();

        assert_eq!(dealt, card(Rank::King));
        assert_eq!(next.deck_len(), 1);
        assert_eq!(state.deck_len(), 2);
    }

    #[test]
    fn test_safe_deal_reshuffles_empty_shoe() {
        let m = manager();
        let state = GameState {
            deck: Some(Deck::default()),
            ..GameState::new(1)
        };

        let (_, next) = m.safe_deal(&state).unwrap();

        assert_eq!(next.deck_len(), m.config().initial_deck_length() - 1);
        assert_ne!(next.rng, state.rng);
    }

    #[test]
    fn test_safe_deal_creates_missing_shoe() {
        let m = manager();
        let (_, next) = m.safe_deal(&GameState::new(1)).unwrap();
        assert_eq!(next.deck_len(), 103);
    }

    #[test]
    fn test_reshuffle_is_deterministic() {
        let m = manager();
        let a = m.create_new_deck(&GameState::new(77));
        let b = m.create_new_deck(&GameState::new(77));
        assert_eq!(a.deck, b.deck);

        // The stored RNG moved on, so the next shoe differs.
        let c = m.create_new_deck(&a);
        assert_ne!(a.deck, c.deck);
    }

    // =========================================================================
    // Dealer
    // =========================================================================

    #[test]
    fn test_dealer_draws_to_seventeen() {
        let state = GameState {
            dealer: Some(DealerHand::new([card(Rank::Ten), card(Rank::Four)])),
            deck: Some(Deck::from_cards([card(Rank::Two), card(Rank::Three), card(Rank::King)])),
            ..GameState::new(1)
        };

        let next = manager().process_dealer_drawing(&state).unwrap();
        let dealer = next.dealer.as_ref().unwrap();

        assert_eq!(dealer.len(), 4);
        assert_eq!(dealer.sum(), 19);
        assert_eq!(next.deck_len(), 1);
    }

    #[test]
    fn test_dealer_stands_on_seventeen() {
        let state = GameState {
            dealer: Some(DealerHand::new([card(Rank::Ten), card(Rank::Seven)])),
            deck: Some(Deck::from_cards([card(Rank::Two)])),
            ..GameState::new(1)
        };

        let next = manager().process_dealer_drawing(&state).unwrap();
        assert_eq!(next.dealer.as_ref().unwrap().len(), 2);
        assert_eq!(next.deck_len(), 1);
    }

    #[test]
    fn test_dealer_stops_on_bust() {
        let state = GameState {
            dealer: Some(DealerHand::new([card(Rank::Ten), card(Rank::Six)])),
            deck: Some(Deck::from_cards([card(Rank::Queen), card(Rank::Two)])),
            ..GameState::new(1)
        };

        let dealer = manager().process_dealer_drawing(&state).unwrap().dealer.unwrap();
        assert_eq!(dealer.sum(), 26);
        assert_eq!(dealer.len(), 3);
    }

    #[test]
    fn test_dealer_bust_stops_above_threshold() {
        let manager = GameStateManager::new(TableConfig::default().with_dealer_stands_on(30));
        let state = GameState {
            dealer: Some(DealerHand::new([card(Rank::King), card(Rank::Six)])),
            deck: Some(Deck::from_cards([card(Rank::Queen), card(Rank::Five), card(Rank::Four)])),
            ..GameState::new(1)
        };

        let drawn = manager.process_dealer_drawing(&state).unwrap();
        let dealer = drawn.dealer.as_ref().unwrap();
        assert_eq!(dealer.len(), 3);
        assert_eq!(dealer.sum(), 26);
        assert_eq!(drawn.deck_len(), 2);
    }

    #[test]
    fn test_dealer_drawing_without_dealer() {
        let err = manager().process_dealer_drawing(&GameState::new(1)).unwrap_err();
        assert_eq!(err, EngineError::MissingHand("dealer hand"));
    }

    // =========================================================================
    // Split dealing
    // =========================================================================

    fn split_ready(first: Rank) -> GameState {
        GameState {
            player: Some(PlayerHand::new(HandId::from_counter(1), [card(first)], 25, true)),
            hand_counter: 1,
            split_in_round: true,
            ..GameState::new(1)
        }
    }

    #[test]
    fn test_deal_split_original() {
        let state = GameState {
            deck: Some(Deck::from_cards([card(Rank::Eight)])),
            ..split_ready(Rank::Eight)
        };

        let next = manager().deal_split_card(&state, SplitHalf::Original).unwrap();
        let hand = next.player.unwrap();

        assert_eq!(hand.len(), 2);
        assert!(hand.can_split());
        assert!(!hand.stood());
        assert_eq!(next.readiness.get(&HandId::from_counter(1)), Some(&false));
    }

    #[test]
    fn test_split_aces_cannot_resplit() {
        let state = GameState {
            deck: Some(Deck::from_cards([card(Rank::Ace)])),
            ..split_ready(Rank::Ace)
        };

        let hand = manager()
            .deal_split_card(&state, SplitHalf::Original)
            .unwrap()
            .player
            .unwrap();
        assert!(!hand.can_split());
    }

    #[test]
    fn test_deal_split_spawn() {
        let next = manager()
            .deal_split_card(&split_ready(Rank::Eight), SplitHalf::Spawn(card(Rank::Eight)))
            .unwrap();
        let id = HandId::from_counter(2);
        let spawned = next.pending.get(&id).unwrap();

        assert_eq!(next.hand_counter, 2);
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned.bet(), 25);
        assert_eq!(next.readiness.get(&id), Some(&false));
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    #[test]
    fn test_find_next_active_player_id() {
        let m = manager();
        let readiness: OrdMap<HandId, bool> = [
            (HandId::from_counter(3), false),
            (HandId::from_counter(1), true),
            (HandId::from_counter(2), false),
        ]
        .into_iter()
        .collect();

        assert_eq!(m.find_next_active_player_id(&readiness), Some(HandId::from_counter(2)));
        assert_eq!(m.find_next_active_player_id(&OrdMap::new()), None);

        let all_acted = readiness.update(HandId::from_counter(2), true).update(HandId::from_counter(3), true);
        assert_eq!(m.find_next_active_player_id(&all_acted), None);
    }

    #[test]
    fn test_any_unacted_hands() {
        let m = manager();
        let hand = PlayerHand::new(HandId::from_counter(2), [card(Rank::Nine)], 10, true);
        let pending = OrdMap::unit(hand.id(), hand.clone());

        assert!(m.any_unacted_hands(&pending));
        assert!(!m.any_unacted_hands(&OrdMap::unit(hand.id(), hand.with_stood(true))));
        assert!(!m.any_unacted_hands(&OrdMap::new()));
    }
}
