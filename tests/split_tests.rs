//! Split and hand-sequencing tests.
//!
//! These tests verify the split flow:
//! - A pair of eights becomes two hands with the same bet
//! - The new hand gets the next `P-NNN` id
//! - Pending hands are promoted one at a time and dealt their second card
//! - Promoting the same hand twice deals nothing new
//! - Splits stop at the table's hand ceiling

use blackjack_engine::{
    place_bet, Card, Deck, GameService, GameState, HandId, HandState, Rank, Suit, TableConfig,
};

fn c(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn deal(service: &GameService, cards: impl IntoIterator<Item = Card>) -> GameState {
    let state = GameState {
        deck: Some(Deck::from_cards(cards)),
        ..GameState::new(3)
    };
    let state = place_bet(&state, 100, service.config()).expect("betting phase");
    service.initialize_round(&state).expect("opening deal")
}

fn eights_shoe() -> Vec<Card> {
    vec![
        c(Suit::Spades, Rank::Eight),
        c(Suit::Hearts, Rank::Five),
        c(Suit::Hearts, Rank::Eight),
        c(Suit::Clubs, Rank::Nine),
        // redealt to the original hand
        c(Suit::Diamonds, Rank::Three),
        // second card of the spawned hand
        c(Suit::Clubs, Rank::Ten),
    ]
}

/// Test splitting a pair of eights.
#[test]
fn test_split_eights() {
    let service = GameService::default();
    let state = deal(&service, eights_shoe());
    assert!(state.player.as_ref().unwrap().can_split());
    assert_eq!(state.hand_counter, 1);

    let split = service.split_hand(&state).unwrap();

    let original = split.player.as_ref().expect("active hand");
    assert_eq!(original.id().to_string(), "P-001");
    assert_eq!(
        original.cards().iter().copied().collect::<Vec<_>>(),
        vec![c(Suit::Spades, Rank::Eight), c(Suit::Diamonds, Rank::Three)]
    );
    assert_eq!(original.sum(), 11);
    assert_eq!(original.bet(), 100);

    let new_id = HandId::from_counter(2);
    assert_eq!(new_id.to_string(), "P-002");
    assert_eq!(split.hand_counter, 2);
    assert_eq!(split.split_requests, 1);
    assert!(split.split_in_round);

    let spawned = split.pending.get(&new_id).expect("spawned hand queued");
    assert_eq!(spawned.cards().iter().copied().collect::<Vec<_>>(), vec![c(Suit::Hearts, Rank::Eight)]);
    assert_eq!(spawned.bet(), 100);

    assert_eq!(split.readiness.get(&HandId::from_counter(1)), Some(&false));
    assert_eq!(split.readiness.get(&new_id), Some(&false));
}

/// Test playing both halves of a split in order.
#[test]
fn test_sequence_split_hands() {
    let service = GameService::default();
    let split = service.split_hand(&deal(&service, eights_shoe())).unwrap();

    // Finish the first hand.
    let recorded = service.add_to_players_list_by_stand(&split).unwrap();
    assert_eq!(recorded.readiness.get(&HandId::from_counter(1)), Some(&true));
    assert!(recorded.pending.get(&HandId::from_counter(1)).unwrap().stood());

    // Move on to the spawned hand; it receives exactly one more card.
    let next = service.add_split_player_to_game(&recorded).unwrap();
    let active = next.player.as_ref().unwrap();

    assert_eq!(active.id(), HandId::from_counter(2));
    assert_eq!(active.len(), 2);
    assert_eq!(active.sum(), 18);
    assert_eq!(active.bet(), 100);
    assert_eq!(next.split_player.as_ref().map(|h| h.id()), Some(HandId::from_counter(2)));
    assert!(next.pending.get(&HandId::from_counter(2)).is_none());
    assert_eq!(next.split_requests, 0);
}

/// Test that an unacted active hand stays active and is not redealt.
#[test]
fn test_sequencing_keeps_active_hand() {
    let service = GameService::default();
    let split = service.split_hand(&deal(&service, eights_shoe())).unwrap();
    assert_eq!(split.player.as_ref().unwrap().id(), HandId::from_counter(1));

    let next = service.add_split_player_to_game(&split).unwrap();

    assert_eq!(next, split);
    assert_eq!(next.deck_len(), 1);
}

/// Test promoting a one-card hand held in the split slot.
#[test]
fn test_sequencing_from_split_slot() {
    let service = GameService::default();
    let split = service.split_hand(&deal(&service, eights_shoe())).unwrap();
    let recorded = service.add_to_players_list_by_stand(&split).unwrap();

    let spawned = HandId::from_counter(2);
    let slotted = GameState {
        player: split.player.clone(),
        split_player: recorded.pending.get(&spawned).cloned(),
        pending: recorded.pending.without(&spawned),
        ..recorded.clone()
    };

    let next = service.add_split_player_to_game(&slotted).unwrap();
    let active = next.player.as_ref().unwrap();

    assert_eq!(active.id(), spawned);
    assert_eq!(
        active.cards().iter().copied().collect::<Vec<_>>(),
        vec![c(Suit::Hearts, Rank::Eight), c(Suit::Clubs, Rank::Ten)]
    );
    assert_eq!(next.split_player, next.player);
    assert_eq!(next.split_requests, slotted.split_requests);
    assert_eq!(next.deck_len(), 0);
}

/// Test that promoting the same hand again keeps its second card.
#[test]
fn test_sequencing_twice_deals_once() {
    let service = GameService::default();
    let mut shoe = eights_shoe();
    shoe.push(c(Suit::Clubs, Rank::Two));
    let split = service.split_hand(&deal(&service, shoe)).unwrap();
    let recorded = service.add_to_players_list_by_stand(&split).unwrap();

    let first = service.add_split_player_to_game(&recorded).unwrap();
    let second = service.add_split_player_to_game(&first).unwrap();

    assert_eq!(
        first.player.as_ref().unwrap().cards().iter().copied().collect::<Vec<_>>(),
        vec![c(Suit::Hearts, Rank::Eight), c(Suit::Clubs, Rank::Ten)]
    );
    assert_eq!(first.split_player, first.player);
    assert_eq!(second.player, first.player);
    assert_eq!(second.deck_len(), 1);
    assert_eq!(second, first);
}

/// Test that sequencing is a no-op once every hand has acted.
#[test]
fn test_sequencing_noop_without_pending() {
    let service = GameService::default();
    let state = deal(&service, eights_shoe());

    assert_eq!(service.add_to_players_list_by_stand(&state).unwrap(), state);
    assert_eq!(service.add_split_player_to_game(&state).unwrap(), state);
    assert_eq!(service.add_player_from_players(&state), state);
}

/// Test pulling the first pending hand.
#[test]
fn test_add_player_from_players() {
    let service = GameService::default();
    let split = service.split_hand(&deal(&service, eights_shoe())).unwrap();

    let pulled = service.add_player_from_players(&split);

    assert_eq!(pulled.player.as_ref().unwrap().id(), HandId::from_counter(2));
    assert!(pulled.pending.is_empty());
}

/// Test that a split 21 is not a natural.
#[test]
fn test_split_twenty_one_is_not_blackjack() {
    let service = GameService::default();
    let state = deal(
        &service,
        [
            c(Suit::Spades, Rank::King),
            c(Suit::Hearts, Rank::Five),
            c(Suit::Hearts, Rank::Jack),
            c(Suit::Clubs, Rank::Nine),
            c(Suit::Diamonds, Rank::Ace),
        ],
    );

    let hand = service.split_hand(&state).unwrap().player.unwrap();
    assert_eq!(hand.sum(), 21);
    assert_eq!(hand.state(), HandState::TwentyOne);
}

/// Test that split aces are never split again.
#[test]
fn test_split_aces_do_not_resplit() {
    let service = GameService::default();
    let state = deal(
        &service,
        [
            c(Suit::Spades, Rank::Ace),
            c(Suit::Hearts, Rank::Five),
            c(Suit::Hearts, Rank::Ace),
            c(Suit::Clubs, Rank::Nine),
            c(Suit::Diamonds, Rank::Ace),
        ],
    );
    assert!(state.aces);

    let split = service.split_hand(&state).unwrap();
    let hand = split.player.as_ref().unwrap();
    assert_eq!(hand.len(), 2);
    assert!(!hand.can_split());

    // Refused: the state comes back unchanged.
    assert_eq!(service.split_hand(&split).unwrap(), split);
}

/// Test the hand ceiling.
#[test]
fn test_split_ceiling() {
    let shoe = || {
        [
            c(Suit::Spades, Rank::Eight),
            c(Suit::Hearts, Rank::Five),
            c(Suit::Hearts, Rank::Eight),
            c(Suit::Clubs, Rank::Nine),
            c(Suit::Diamonds, Rank::Eight),
            c(Suit::Clubs, Rank::Eight),
        ]
    };

    let capped = GameService::new(TableConfig::default().with_max_hands(2));
    let once = capped.split_hand(&deal(&capped, shoe())).unwrap();
    assert!(once.player.as_ref().unwrap().can_split());
    assert_eq!(capped.split_hand(&once).unwrap(), once);

    let standard = GameService::default();
    let once = standard.split_hand(&deal(&standard, shoe())).unwrap();
    let twice = standard.split_hand(&once).unwrap();
    assert_eq!(twice.hand_counter, 3);
    assert_eq!(twice.pending.len(), 2);
    assert_eq!(twice.split_requests, 2);
}

/// Test that splitting needs a splittable pair.
#[test]
fn test_split_refused_for_unmatched_pair() {
    let service = GameService::default();
    let state = deal(
        &service,
        [
            c(Suit::Spades, Rank::Nine),
            c(Suit::Hearts, Rank::Five),
            c(Suit::Hearts, Rank::Ten),
            c(Suit::Clubs, Rank::Nine),
        ],
    );

    assert_eq!(service.split_hand(&state).unwrap(), state);
}
