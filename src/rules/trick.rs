//! Trick resolution.
//!
//! Two different questions are asked of a finished trick:
//!
//! - `resolve_trick`: which team took it? Two or more cards sharing the top
//!   strength make the trick a tie, whoever played them.
//! - `best_card_owner`: who leads next? The first seat (in table order) to
//!   put down a top-strength card, which is defined even for a tied trick.

use serde::{Deserialize, Serialize};

use super::strength::strength;
use crate::cards::{Card, Rank};
use crate::core::player::{Seat, Team};

/// Cards in a complete trick.
pub const TRICK_SIZE: usize = 4;

/// A card on the table and the seat that played it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedCard {
    pub seat: Seat,
    pub card: Card,
}

impl PlayedCard {
    #[must_use]
    pub const fn new(seat: Seat, card: Card) -> Self {
        Self { seat, card }
    }
}

/// Outcome of one trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrickResult {
    Won(Team),
    /// Top strength shared by two or more cards ("cangou").
    Tied,
}

impl TrickResult {
    /// The winning team, `None` for a tie.
    #[must_use]
    pub const fn winner(self) -> Option<Team> {
        match self {
            TrickResult::Won(team) => Some(team),
            TrickResult::Tied => None,
        }
    }
}

impl std::fmt::Display for TrickResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrickResult::Won(team) => write!(f, "{}", team),
            TrickResult::Tied => f.write_str("tie"),
        }
    }
}

/// Decide which team took the trick.
#[must_use]
pub fn resolve_trick(cards: &[PlayedCard; TRICK_SIZE], manilha: Rank) -> TrickResult {
    let mut best = cards[0];
    let mut best_strength = strength(best.card, manilha);
    let mut tied = false;

    for played in &cards[1..] {
        let value = strength(played.card, manilha);
        if value > best_strength {
            best = *played;
            best_strength = value;
            tied = false;
        } else if value == best_strength {
            tied = true;
        }
    }

    if tied {
        TrickResult::Tied
    } else {
        TrickResult::Won(best.seat.team())
    }
}

/// Seat of the first card with the highest strength, in table order.
#[must_use]
pub fn best_card_owner(cards: &[PlayedCard; TRICK_SIZE], manilha: Rank) -> Seat {
    let mut best = cards[0];
    for played in &cards[1..] {
        if strength(played.card, manilha) > strength(best.card, manilha) {
            best = *played;
        }
    }
    best.seat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn trick(cards: [(u8, Rank, Suit); 4]) -> [PlayedCard; 4] {
        cards.map(|(seat, rank, suit)| PlayedCard::new(Seat::new(seat), Card::new(rank, suit)))
    }

    #[test]
    fn single_maximum_wins_for_its_team() {
        let cards = trick([
            (1, Rank::King, Suit::Hearts),
            (2, Rank::Three, Suit::Spades),
            (3, Rank::Ace, Suit::Clubs),
            (0, Rank::Four, Suit::Hearts),
        ]);
        assert_eq!(resolve_trick(&cards, Rank::Five), TrickResult::Won(Team::Zero));
        assert_eq!(best_card_owner(&cards, Rank::Five), Seat::new(2));
    }

    #[test]
    fn manilha_beats_a_three() {
        let cards = trick([
            (0, Rank::Three, Suit::Clubs),
            (1, Rank::Four, Suit::Diamonds),
            (2, Rank::Two, Suit::Hearts),
            (3, Rank::Ace, Suit::Spades),
        ]);
        // vira 3 -> manilha 4
        assert_eq!(resolve_trick(&cards, Rank::Four), TrickResult::Won(Team::One));
        assert_eq!(best_card_owner(&cards, Rank::Four), Seat::new(1));
    }

    #[test]
    fn shared_maximum_across_teams_ties() {
        let cards = trick([
            (0, Rank::Three, Suit::Hearts),
            (1, Rank::Three, Suit::Clubs),
            (2, Rank::Four, Suit::Hearts),
            (3, Rank::Five, Suit::Clubs),
        ]);
        assert_eq!(resolve_trick(&cards, Rank::Jack), TrickResult::Tied);
        // first to play the top card leads next
        assert_eq!(best_card_owner(&cards, Rank::Jack), Seat::new(0));
    }

    #[test]
    fn shared_maximum_between_partners_still_ties() {
        let cards = trick([
            (3, Rank::Six, Suit::Hearts),
            (0, Rank::Two, Suit::Clubs),
            (1, Rank::Four, Suit::Hearts),
            (2, Rank::Two, Suit::Diamonds),
        ]);
        assert_eq!(resolve_trick(&cards, Rank::Queen), TrickResult::Tied);
        assert_eq!(best_card_owner(&cards, Rank::Queen), Seat::new(0));
    }

    #[test]
    fn lower_tie_does_not_spoil_a_clear_winner() {
        let cards = trick([
            (0, Rank::Five, Suit::Hearts),
            (1, Rank::Five, Suit::Clubs),
            (2, Rank::King, Suit::Hearts),
            (3, Rank::Four, Suit::Clubs),
        ]);
        assert_eq!(resolve_trick(&cards, Rank::Two), TrickResult::Won(Team::Zero));
    }

    #[test]
    fn trick_result_winner() {
        assert_eq!(TrickResult::Won(Team::One).winner(), Some(Team::One));
        assert_eq!(TrickResult::Tied.winner(), None);
        assert_eq!(TrickResult::Tied.to_string(), "tie");
    }
}
