//! Rules integration tests: strength, tricks, hands, wagers and the engine.

mod common;

use common::{arranged, card, stacked_deck};
use truco_engine::cards::{Deck, Rank, Suit};
use truco_engine::core::{
    Action, GameEvent, HandEndReason, HandState, IllegalAction, Scores, Seat, Team, TrucoConfig,
};
use truco_engine::rules::{
    aggregate, best_card_owner, resolve_trick, strength, PlayedCard, RulesEngine, TrickResult,
    TrucoRules, WagerState,
};

fn played(seat: u8, rank: Rank, suit: Suit) -> PlayedCard {
    PlayedCard::new(Seat::new(seat), card(rank, suit))
}

fn apply(rules: &TrucoRules, state: &HandState, seat: u8, action: Action) -> HandState {
    rules
        .apply_action(state, Seat::new(seat), action)
        .unwrap_or_else(|err| panic!("seat {seat} {action}: {err}"))
        .state
}

// =============================================================================
// Strength
// =============================================================================

#[test]
fn test_manilha_follows_the_vira() {
    let cases = [
        (Rank::Four, Rank::Five),
        (Rank::Seven, Rank::Queen),
        (Rank::Queen, Rank::Jack),
        (Rank::King, Rank::Ace),
        (Rank::Two, Rank::Three),
        (Rank::Three, Rank::Four),
    ];
    for (vira, manilha) in cases {
        assert_eq!(vira.next(), manilha, "vira {vira}");
    }
}

#[test]
fn test_zap_is_the_strongest_card() {
    let manilha = Rank::Jack;
    let zap = strength(card(Rank::Jack, Suit::Clubs), manilha);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            let other = card(rank, suit);
            if other != card(Rank::Jack, Suit::Clubs) {
                assert!(zap > strength(other, manilha), "{other}");
            }
        }
    }
}

#[test]
fn test_manilhas_ordered_by_suit() {
    let manilha = Rank::Four;
    let order: Vec<u8> = [Suit::Diamonds, Suit::Spades, Suit::Hearts, Suit::Clubs]
        .into_iter()
        .map(|suit| strength(card(Rank::Four, suit), manilha))
        .collect();
    assert_eq!(order, vec![101, 102, 103, 104]);
}

// =============================================================================
// Tricks
// =============================================================================

#[test]
fn test_single_maximum_never_ties() {
    let cards = [
        played(0, Rank::Three, Suit::Clubs),
        played(1, Rank::Four, Suit::Hearts),
        played(2, Rank::Two, Suit::Hearts),
        played(3, Rank::Seven, Suit::Spades),
    ];
    assert_eq!(resolve_trick(&cards, Rank::King), TrickResult::Won(Team::Zero));
}

#[test]
fn test_equal_maxima_tie_regardless_of_team() {
    // opponents
    let cards = [
        played(0, Rank::Ace, Suit::Hearts),
        played(1, Rank::Ace, Suit::Spades),
        played(2, Rank::Five, Suit::Hearts),
        played(3, Rank::Six, Suit::Spades),
    ];
    assert_eq!(resolve_trick(&cards, Rank::Queen), TrickResult::Tied);

    // partners
    let cards = [
        played(0, Rank::Ace, Suit::Hearts),
        played(1, Rank::Five, Suit::Spades),
        played(2, Rank::Ace, Suit::Clubs),
        played(3, Rank::Six, Suit::Spades),
    ];
    assert_eq!(resolve_trick(&cards, Rank::Queen), TrickResult::Tied);
    assert_eq!(best_card_owner(&cards, Rank::Queen), Seat::new(0));
}

// =============================================================================
// Hand aggregation
// =============================================================================

#[test]
fn test_aggregation_examples() {
    let t0 = TrickResult::Won(Team::Zero);
    let t1 = TrickResult::Won(Team::One);
    let tie = TrickResult::Tied;

    assert_eq!(aggregate(&[t0, t0]), Some(Team::Zero));
    assert_eq!(aggregate(&[t0, t1, t1]), Some(Team::One));
    assert_eq!(aggregate(&[tie, t0, t1]), Some(Team::Zero));
    assert_eq!(aggregate(&[tie, tie, tie]), Some(Team::Zero));
}

#[test]
fn test_two_straight_tricks_skip_the_third() {
    let rules = TrucoRules::default();
    // vira 4 -> manilha 5; seat 0 holds two manilhas
    let state = arranged(
        Scores::default(),
        card(Rank::Four, Suit::Hearts),
        [
            vec![card(Rank::Five, Suit::Clubs), card(Rank::Five, Suit::Hearts), card(Rank::Six, Suit::Hearts)],
            vec![card(Rank::Seven, Suit::Spades), card(Rank::Queen, Suit::Spades), card(Rank::Jack, Suit::Spades)],
            vec![card(Rank::Seven, Suit::Hearts), card(Rank::Queen, Suit::Hearts), card(Rank::Jack, Suit::Hearts)],
            vec![card(Rank::Seven, Suit::Clubs), card(Rank::Queen, Suit::Clubs), card(Rank::Jack, Suit::Clubs)],
        ],
    );

    let mut state = state;
    for seat in 0..4 {
        state = apply(&rules, &state, seat, Action::Play(0));
    }
    assert_eq!(state.turn(), Seat::new(0));
    for seat in 0..4 {
        state = apply(&rules, &state, seat, Action::Play(0));
    }

    assert!(state.is_hand_over());
    assert_eq!(state.tricks().len(), 2);
    assert_eq!(state.scores(), Scores::new(1, 0));
    assert_eq!(state.hand(Seat::new(0)).len(), 1);
}

// =============================================================================
// Wager
// =============================================================================

#[test]
fn test_stake_ladder_and_ceiling() {
    let rules = TrucoRules::default();
    let ladder = &rules.config().stakes;
    let mut wager = WagerState::default();
    assert_eq!(wager.stake(), 1);

    for expected in [3, 6, 9, 12] {
        let (called, proposed) = wager.call(Seat::new(2), Seat::new(2), ladder).unwrap();
        assert_eq!(proposed, expected);
        wager = called.accept(Seat::new(3), ladder).unwrap();
        assert_eq!(wager.stake(), expected);
    }
    assert_eq!(
        wager.call(Seat::new(2), Seat::new(2), ladder),
        Err(IllegalAction::MaxStake(12))
    );
}

#[test]
fn test_refusal_pays_pre_raise_value_to_challenger() {
    let rules = TrucoRules::default();
    let state = HandState::deal(Scores::default(), Seat::new(0), Deck::standard()).unwrap();
    // seat 1 leads; seat 2 answers
    let state = apply(&rules, &state, 1, Action::CallTruco);
    let state = apply(&rules, &state, 2, Action::Accept);
    assert_eq!(state.stake(), 3);
    let state = apply(&rules, &state, 1, Action::CallTruco);

    let t = rules.apply_action(&state, Seat::new(2), Action::Refuse).unwrap();
    assert_eq!(t.state.scores(), Scores::new(0, 3));
    assert!(t.events.contains(&GameEvent::HandWon {
        team: Team::One,
        points: 3,
        reason: HandEndReason::Refusal,
    }));
}

#[test]
fn test_only_the_responder_answers() {
    let rules = TrucoRules::default();
    let state = HandState::deal(Scores::default(), Seat::new(0), Deck::standard()).unwrap();
    let state = apply(&rules, &state, 1, Action::CallTruco);

    for seat in [0, 1, 3] {
        assert_eq!(
            rules.apply_action(&state, Seat::new(seat), Action::Accept),
            Err(IllegalAction::NotResponder { expected: Seat::new(2) })
        );
    }
    assert!(rules.is_legal(&state, Seat::new(2), Action::Refuse));
}

// =============================================================================
// Match threshold
// =============================================================================

#[test]
fn test_exactly_twelve_ends_the_match_eleven_does_not() {
    let rules = TrucoRules::default();
    let deal = |scores| HandState::deal(scores, Seat::new(3), Deck::standard()).unwrap();

    // refusal at stake 1 from 10 -> 11
    let state = apply(&rules, &deal(Scores::new(10, 0)), 0, Action::CallTruco);
    let state = apply(&rules, &state, 1, Action::Refuse);
    assert_eq!(state.scores(), Scores::new(11, 0));
    assert!(!state.is_game_over());
    assert_eq!(rules.is_terminal(&state), None);

    let state = apply(&rules, &deal(Scores::new(11, 0)), 0, Action::CallTruco);
    let state = apply(&rules, &state, 1, Action::Refuse);
    assert_eq!(state.scores(), Scores::new(12, 0));
    assert!(state.is_game_over());
    assert_eq!(rules.is_terminal(&state).map(|r| r.winner), Some(Team::Zero));
}

#[test]
fn test_custom_winning_score() {
    let rules = TrucoRules::new(TrucoConfig::new().with_winning_score(3)).unwrap();
    let state = HandState::deal(Scores::new(0, 0), Seat::new(3), Deck::standard()).unwrap();
    let state = apply(&rules, &state, 0, Action::CallTruco);
    let state = apply(&rules, &state, 1, Action::Accept);
    let state = apply(&rules, &state, 0, Action::CallTruco);
    let state = apply(&rules, &state, 1, Action::Refuse);
    assert_eq!(state.scores(), Scores::new(3, 0));
    assert!(state.is_game_over());
}

// =============================================================================
// Turn order
// =============================================================================

#[test]
fn test_trick_winner_leads_not_next_seat() {
    let rules = TrucoRules::default();
    // vira Q -> manilha J; seat 2 takes the first trick with a three
    let state = arranged(
        Scores::default(),
        card(Rank::Queen, Suit::Diamonds),
        [
            vec![card(Rank::Four, Suit::Hearts), card(Rank::Five, Suit::Hearts), card(Rank::Six, Suit::Hearts)],
            vec![card(Rank::King, Suit::Spades), card(Rank::Five, Suit::Spades), card(Rank::Six, Suit::Spades)],
            vec![card(Rank::Three, Suit::Hearts), card(Rank::Five, Suit::Clubs), card(Rank::Six, Suit::Clubs)],
            vec![card(Rank::Ace, Suit::Spades), card(Rank::Five, Suit::Diamonds), card(Rank::Six, Suit::Diamonds)],
        ],
    );

    let mut state = state;
    for seat in 0..4 {
        state = apply(&rules, &state, seat, Action::Play(0));
    }
    assert_eq!(state.tricks()[0], TrickResult::Won(Team::Zero));
    assert_eq!(state.turn(), Seat::new(2));
    assert_ne!(state.turn(), Seat::new(0));
}

#[test]
fn test_tied_trick_led_by_first_top_card() {
    let rules = TrucoRules::default();
    // vira 7 -> manilha Q; seats 1 and 3 both play a three
    let state = arranged(
        Scores::default(),
        card(Rank::Seven, Suit::Clubs),
        [
            vec![card(Rank::Four, Suit::Hearts), card(Rank::Five, Suit::Hearts), card(Rank::Six, Suit::Hearts)],
            vec![card(Rank::Three, Suit::Spades), card(Rank::Five, Suit::Spades), card(Rank::Six, Suit::Spades)],
            vec![card(Rank::King, Suit::Hearts), card(Rank::Five, Suit::Clubs), card(Rank::Six, Suit::Clubs)],
            vec![card(Rank::Three, Suit::Diamonds), card(Rank::Five, Suit::Diamonds), card(Rank::Six, Suit::Diamonds)],
        ],
    );

    let mut state = state;
    for seat in 0..4 {
        state = apply(&rules, &state, seat, Action::Play(0));
    }
    assert_eq!(state.tricks()[0], TrickResult::Tied);
    assert_eq!(state.turn(), Seat::new(1));
    assert!(!state.is_hand_over());
}

#[test]
fn test_zap_on_lead_wins_and_leads_again() {
    let rules = TrucoRules::default();
    // dealer 3, vira 2 -> manilha 3; seat 0 holds the three of clubs
    let deck = stacked_deck(
        [
            [card(Rank::Three, Suit::Clubs), card(Rank::Four, Suit::Hearts), card(Rank::Five, Suit::Hearts)],
            [card(Rank::Ace, Suit::Spades), card(Rank::Four, Suit::Spades), card(Rank::Five, Suit::Spades)],
            [card(Rank::King, Suit::Hearts), card(Rank::Four, Suit::Clubs), card(Rank::Five, Suit::Clubs)],
            [card(Rank::Two, Suit::Spades), card(Rank::Four, Suit::Diamonds), card(Rank::Five, Suit::Diamonds)],
        ],
        card(Rank::Two, Suit::Hearts),
    );
    let state = HandState::deal(Scores::default(), Seat::new(3), deck).unwrap();
    assert_eq!(state.manilha(), Rank::Three);
    assert_eq!(state.hand(Seat::new(0))[0], card(Rank::Three, Suit::Clubs));

    let mut state = state;
    let mut last = None;
    for seat in 0..4 {
        let t = rules.apply_action(&state, Seat::new(seat), Action::Play(0)).unwrap();
        state = t.state.clone();
        last = Some(t);
    }

    let events = last.map(|t| t.events).unwrap_or_default();
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::TrickResolved {
            result: TrickResult::Won(Team::Zero),
            next_lead: Some(lead),
            ..
        } if *lead == Seat::new(0)
    )));
    assert_eq!(state.turn(), Seat::new(0));
}
