//! Round lifecycle.
//!
//! ## Phases
//!
//! A round moves through:
//! 1. Betting: round inactive, see `round::betting`
//! 2. Dealing: `initialize_round`
//! 3. Player turn: hit, stand, double, split, insurance on the active hand
//! 4. Hand sequencing: only after a split, cycling through pending hands
//! 5. Settlement: `calculate_rewards`, then back to betting
//!
//! Every transition takes the previous `GameState` by reference and
//! returns a new one. Actions that the table refuses without a dedicated
//! error (hitting outside a round, splitting an ineligible hand) return
//! the state unchanged.

use im::Vector;
use tracing::{debug, info};

use super::manager::{GameStateManager, SplitHalf};
use crate::cards::{Card, Rank};
use crate::core::config::TableConfig;
use crate::core::error::{EngineError, RuleError};
use crate::core::hand_id::HandId;
use crate::core::outcome::Outcome;
use crate::core::state::GameState;
use crate::hands::{DealerHand, PlayerHand};
use crate::rules::{self, can_split, natural_outcome};

/// A new state plus the token movement it causes.
///
/// Positive amounts are paid to the player, negative amounts are charged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub state: GameState,
    pub amount: i64,
}

fn active_hand(state: &GameState) -> Result<&PlayerHand, EngineError> {
    state.player.as_ref().ok_or(EngineError::MissingHand("player hand"))
}

fn dealer_hand(state: &GameState) -> Result<&DealerHand, EngineError> {
    state.dealer.as_ref().ok_or(EngineError::MissingHand("dealer hand"))
}

fn splittable(hand: &PlayerHand) -> bool {
    let cards: Vec<Card> = hand.cards().iter().copied().collect();
    can_split(&cards)
}

/// Blackjack round transitions for one table configuration.
#[derive(Clone, Debug, Default)]
pub struct GameService {
    manager: GameStateManager,
}

impl GameService {
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        Self {
            manager: GameStateManager::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        self.manager.config()
    }

    #[must_use]
    pub fn manager(&self) -> &GameStateManager {
        &self.manager
    }

    // =========================================================================
    // Dealing
    // =========================================================================

    /// Reset the round and deal the opening four cards.
    ///
    /// Cards go player, dealer, player, dealer. The dealer's first card is
    /// the hole card. The player's hand carries the whole round bet.
    pub fn initialize_round(&self, state: &GameState) -> Result<GameState, EngineError> {
        let mut current = GameState {
            round_active: true,
            ..self.manager.reset_round_state(state)
        };

        let mut dealt = [Card::masked(); 4];
        for slot in &mut dealt {
            let (card, next) = self.manager.safe_deal(&current)?;
            *slot = card;
            current = next;
        }
        let [p1, d1, p2, d2] = dealt;

        let counter = current.next_hand_counter();
        let player = PlayerHand::new(
            HandId::from_counter(counter),
            [p1, p2],
            current.bet,
            current.split_in_round,
        );
        let player = player.with_can_split(can_split(&[p1, p2]));
        let dealer = DealerHand::new([d1, d2]);
        let natural = natural_outcome(&player, &dealer);

        info!(
            hand = %player.id(),
            bet = current.bet,
            player_sum = player.sum(),
            ?natural,
            "round started"
        );

        Ok(GameState {
            player: Some(player),
            dealer: Some(dealer.with_natural(natural)),
            hand_counter: counter,
            natural,
            aces: p1.rank == Rank::Ace && p2.rank == Rank::Ace,
            ..current
        })
    }

    // =========================================================================
    // Player actions
    // =========================================================================

    /// Deal one card to the active hand. No-op outside a round.
    pub fn player_hit(&self, state: &GameState) -> Result<GameState, EngineError> {
        if !state.round_active {
            return Ok(state.clone());
        }

        let hand = active_hand(state)?;
        let (card, next) = self.manager.safe_deal(state)?;
        let hand = hand.clone().with_card(card, next.split_in_round);
        debug!(hand = %hand.id(), %card, sum = hand.sum(), "player hits");

        Ok(GameState {
            player: Some(hand),
            ..next
        })
    }

    /// Stand on the active hand, play out the dealer, and record the winner.
    ///
    /// The dealer does not draw against a busted hand. No-op outside a round.
    pub fn player_stand(&self, state: &GameState) -> Result<GameState, EngineError> {
        if !state.round_active {
            return Ok(state.clone());
        }

        let hand = active_hand(state)?.clone().stand(state.split_in_round);
        let stood = GameState {
            player: Some(hand.clone()),
            ..state.clone()
        };

        let finished = if hand.sum() <= 21 {
            self.manager.process_dealer_drawing(&stood)?
        } else {
            debug!(sum = hand.sum(), "player bust, dealer stays");
            stood
        };

        let winner = rules::winner(Some(&hand), finished.dealer.as_ref());
        info!(
            hand = %hand.id(),
            player_sum = hand.sum(),
            dealer_sum = finished.dealer.as_ref().map_or(0, DealerHand::sum),
            ?winner,
            "hand stood"
        );

        Ok(GameState { winner, ..finished })
    }

    /// Add `original_bet` to the round bet and the active hand's bet.
    ///
    /// Fails with `BetOverflow` if either total would overflow.
    pub fn apply_double_bet(&self, state: &GameState, original_bet: u32) -> Result<GameState, EngineError> {
        let hand = active_hand(state)?;
        let hand_bet = hand.bet().checked_add(original_bet).ok_or(RuleError::BetOverflow)?;
        let bet = state.bet.checked_add(original_bet).ok_or(RuleError::BetOverflow)?;
        let hand = hand.clone().with_bet(hand_bet);

        Ok(GameState {
            bet,
            player: Some(hand),
            ..state.clone()
        })
    }

    /// Double the active hand: one hit, then the hand's stake again.
    ///
    /// Only allowed on a two-card hand during a round. The transaction
    /// charges the added stake.
    pub fn double_down(&self, state: &GameState) -> Result<Transaction, EngineError> {
        if !state.round_active {
            return Err(RuleError::RoundNotActive.into());
        }
        let hand = active_hand(state)?;
        if hand.len() != 2 {
            return Err(RuleError::DoubleNotAllowed { cards: hand.len() }.into());
        }

        let stake = hand.bet();
        let hit = self.player_hit(state)?;
        let doubled = self.apply_double_bet(&hit, stake)?;
        debug!(stake, "player doubles");

        Ok(Transaction {
            state: doubled,
            amount: -i64::from(stake),
        })
    }

    /// Buy insurance against a dealer ace.
    ///
    /// Costs half the round bet, rounded up. If the dealer holds a natural
    /// the round ends, the dealer wins, and insurance returns the original
    /// bet. Otherwise the round continues and the cost is charged.
    pub fn insurance_request(&self, state: &GameState) -> Result<Transaction, EngineError> {
        if !state.round_active {
            return Err(RuleError::RoundNotActive.into());
        }
        let dealer = dealer_hand(state)?;
        if !dealer.masked().can_insure {
            return Err(RuleError::InsuranceNotOffered.into());
        }
        let hand = active_hand(state)?;

        let bet = state.bet;
        if dealer.natural() == Outcome::BlackjackDealerWon {
            info!(bet, "dealer blackjack, insurance pays");
            return Ok(Transaction {
                state: GameState {
                    bet: 0,
                    round_active: false,
                    winner: Outcome::DealerWon,
                    player: Some(hand.clone().with_bet(0)),
                    ..state.clone()
                },
                amount: i64::from(bet),
            });
        }

        let cost = bet.div_ceil(2);
        debug!(cost, "insurance lost");
        Ok(Transaction {
            state: state.clone(),
            amount: -i64::from(cost),
        })
    }

    /// Split the active hand into two.
    ///
    /// Returns the state unchanged when the hand cannot split or the round
    /// already holds the maximum number of hands. Otherwise the second card
    /// is set aside, the original hand is redealt to two cards, and a new
    /// hand is spawned from the set-aside card.
    pub fn split_hand(&self, state: &GameState) -> Result<GameState, EngineError> {
        let Some(hand) = state.player.as_ref() else {
            return Ok(state.clone());
        };
        if !hand.can_split() || state.hand_counter >= self.config().max_hands {
            debug!(hands = state.hand_counter, "split refused");
            return Ok(state.clone());
        }
        let Some(&set_aside) = hand.cards().get(1) else {
            return Ok(state.clone());
        };

        let prepared = GameState {
            player: Some(hand.clone().truncated(1, true)),
            split_requests: state.split_requests + 1,
            split_in_round: true,
            ..state.clone()
        };
        let redealt = self.manager.deal_split_card(&prepared, SplitHalf::Original)?;
        let split = self.manager.deal_split_card(&redealt, SplitHalf::Spawn(set_aside))?;

        debug!(
            hand = %hand.id(),
            spawned = %HandId::from_counter(split.hand_counter),
            "hand split"
        );
        Ok(split)
    }

    // =========================================================================
    // Hand sequencing
    // =========================================================================

    /// Record the active hand as stood in the split maps.
    ///
    /// No-op unless some pending hand has yet to act.
    pub fn add_to_players_list_by_stand(&self, state: &GameState) -> Result<GameState, EngineError> {
        if !self.manager.any_unacted_hands(&state.pending) {
            return Ok(state.clone());
        }
        let Some(hand) = state.player.as_ref() else {
            return Ok(state.clone());
        };

        let hand = hand.clone().with_stood(true);
        let id = hand.id();
        Ok(GameState {
            pending: state.pending.update(id, hand.clone()),
            readiness: state.readiness.update(id, true),
            player: Some(hand),
            ..state.clone()
        })
    }

    /// Promote the next unacted hand to active.
    ///
    /// The hand may come from the split slot, be the active hand already,
    /// or be pulled out of `pending`, in which case it also occupies the
    /// split slot. A one-card hand is dealt its second card, and the split
    /// slot is kept in step so a repeated call deals nothing.
    pub fn add_split_player_to_game(&self, state: &GameState) -> Result<GameState, EngineError> {
        let Some(next_id) = self.manager.find_next_active_player_id(&state.readiness) else {
            return Ok(state.clone());
        };

        let mut current = state.clone();
        let promoted = if current.split_player.as_ref().is_some_and(|h| h.id() == next_id) {
            current.split_player.clone()
        } else if current.player.as_ref().is_some_and(|h| h.id() == next_id) {
            current.player.clone()
        } else if let Some(pulled) = current.pending.get(&next_id).cloned() {
            current = GameState {
                pending: current.pending.without(&next_id),
                split_player: Some(pulled.clone()),
                split_requests: current.split_requests.saturating_sub(1),
                ..current
            };
            Some(pulled)
        } else {
            None
        };
        if promoted.is_some() {
            current.player = promoted;
        }

        let hand = active_hand(&current)?;
        if hand.len() < 2 {
            let (card, next) = self.manager.safe_deal(&current)?;
            let hand = hand.clone().with_card(card, next.split_in_round);
            let hand = hand.clone().with_can_split(splittable(&hand));
            debug!(hand = %hand.id(), sum = hand.sum(), "split hand completed");
            let split_player = if next.split_player.as_ref().is_some_and(|h| h.id() == hand.id()) {
                Some(hand.clone())
            } else {
                next.split_player.clone()
            };
            current = GameState {
                player: Some(hand),
                split_player,
                ..next
            };
        }

        Ok(current)
    }

    /// Make the first pending hand active, removing it from `pending`.
    #[must_use]
    pub fn add_player_from_players(&self, state: &GameState) -> GameState {
        let Some((id, hand)) = state.pending.get_min().map(|(id, hand)| (*id, hand.clone())) else {
            return state.clone();
        };

        GameState {
            player: Some(hand),
            pending: state.pending.without(&id),
            ..state.clone()
        }
    }

    // =========================================================================
    // Settlement
    // =========================================================================

    /// Pay out the active hand.
    ///
    /// A player natural pays 2.5x, a win 2x, a push 1x, rounded down. A
    /// dealer natural voids the win and push payouts. Clears the bets; the
    /// round stays active while split hands are pending.
    pub fn calculate_rewards(&self, state: &GameState) -> Result<Transaction, EngineError> {
        let hand = active_hand(state)?;
        let dealer_natural = dealer_hand(state)?.natural();
        let bet = i64::from(hand.bet());

        let payout = if state.natural == Outcome::BlackjackPlayerWon {
            bet * 5 / 2
        } else if state.winner == Outcome::PlayerWon && dealer_natural != Outcome::BlackjackDealerWon {
            bet * 2
        } else if (state.winner == Outcome::Push && dealer_natural != Outcome::BlackjackDealerWon)
            || dealer_natural == Outcome::BlackjackPush
        {
            bet
        } else {
            0
        };

        info!(hand = %hand.id(), bet, payout, "hand settled");

        Ok(Transaction {
            state: GameState {
                bet: 0,
                bet_list: Vector::new(),
                round_active: !state.pending.is_empty(),
                player: Some(hand.clone().with_bet(0)),
                ..state.clone()
            },
            amount: payout,
        })
    }

    /// Stand on the active hand and settle it.
    pub fn stand_and_settle(&self, state: &GameState) -> Result<Transaction, EngineError> {
        if !state.round_active {
            return Err(RuleError::RoundNotActive.into());
        }
        let stood = self.player_stand(state)?;
        self.calculate_rewards(&stood)
    }

    /// Reset the round, install a fresh shoe, and clear the bet.
    #[must_use]
    pub fn restart_game(&self, state: &GameState) -> GameState {
        let reset = self.manager.reset_round_state(state);
        let fresh = self.manager.create_new_deck(&reset);
        info!("game restarted");
        GameState { bet: 0, ..fresh }
    }
}
