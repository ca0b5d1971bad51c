//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`, `Card`: the 40-card deck (8s, 9s and 10s removed)
//! - `CardId`: stable identity of a card within the deck
//! - `Deck`: ordered deck, dealt from the top (end)
//! - `Deal`: four hands plus the vira

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::{Deal, Deck, Hand, CARDS_PER_DEAL, CARDS_PER_HAND};
