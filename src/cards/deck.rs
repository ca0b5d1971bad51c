//! The 40-card deck and the deal.
//!
//! Dealing pops from the end of the deck: three passes over the seats in
//! table order, one card each, then the vira. Whatever is left stays in the
//! deck for the rest of the hand.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Rank, Suit};
use crate::core::error::DealError;
use crate::core::player::{Seat, SeatMap};
use crate::core::rng::GameRng;

/// Cards dealt to each seat.
pub const CARDS_PER_HAND: usize = 3;

/// Cards a deck must hold for one deal (four hands plus the vira).
pub const CARDS_PER_DEAL: usize = CARDS_PER_HAND * 4 + 1;

/// A seat's hand. Never more than three cards.
pub type Hand = SmallVec<[Card; CARDS_PER_HAND]>;

/// Ordered deck. The top is the end of the vec.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 40 cards in rank-major order, unshuffled.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Rank::ALL
            .iter()
            .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// A standard deck shuffled with the given RNG.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// A deck in exactly the given order (last card is dealt first).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Take the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Check the deck can be dealt from: enough cards, no duplicates.
    pub fn validate(&self) -> Result<(), DealError> {
        if self.cards.len() < CARDS_PER_DEAL {
            return Err(DealError::NotEnoughCards {
                needed: CARDS_PER_DEAL,
                found: self.cards.len(),
            });
        }
        let mut seen = [false; 40];
        for card in &self.cards {
            let id = card.id().0 as usize;
            if seen[id] {
                return Err(DealError::DuplicateCard(*card));
            }
            seen[id] = true;
        }
        Ok(())
    }

    /// Deal three cards to every seat and flip the vira.
    pub fn deal(mut self) -> Result<Deal, DealError> {
        self.validate()?;

        let mut hands: SeatMap<Hand> = SeatMap::with_default();
        for _ in 0..CARDS_PER_HAND {
            for seat in Seat::all() {
                // validate() guarantees enough cards
                if let Some(card) = self.pop() {
                    hands[seat].push(card);
                }
            }
        }
        let vira = self.pop().ok_or(DealError::NotEnoughCards {
            needed: CARDS_PER_DEAL,
            found: CARDS_PER_DEAL - 1,
        })?;

        Ok(Deal {
            hands,
            vira,
            remaining: self,
        })
    }
}

/// Result of dealing one hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    pub hands: SeatMap<Hand>,
    pub vira: Card,
    pub remaining: Deck,
}

impl Deal {
    /// The rank promoted to manilha: the one after the vira's.
    #[must_use]
    pub fn manilha(&self) -> Rank {
        self.vira.rank.next()
    }
}
