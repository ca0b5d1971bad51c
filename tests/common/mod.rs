//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use truco_engine::cards::{Card, Deck, Rank, Suit};
use truco_engine::core::{HandState, Scores, Seat};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// A hand arranged card by card, dealer 3 so that seat 0 leads.
pub fn arranged(scores: Scores, vira: Card, hands: [Vec<Card>; 4]) -> HandState {
    HandState::with_hands(scores, Seat::new(3), vira, hands)
}

/// A deck that deals exactly `hands` and `vira`.
///
/// Dealing pops from the end: three passes over seats 0..3, then the vira.
pub fn stacked_deck(hands: [[Card; 3]; 4], vira: Card) -> Deck {
    let mut dealt = Vec::with_capacity(13);
    for pass in 0..3 {
        for hand in &hands {
            dealt.push(hand[pass]);
        }
    }
    dealt.push(vira);
    dealt.reverse();
    Deck::from_cards(dealt)
}
