//! Game events.
//!
//! Every successful transition reports what happened as a short list of
//! events. The table turns them into status messages and log lines; a
//! renderer can use them to animate the table.

use serde::{Deserialize, Serialize};

use super::player::{Scores, Seat, Team};
use crate::cards::Card;
use crate::rules::trick::{PlayedCard, TrickResult};

/// Why a hand ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandEndReason {
    /// Decided by the tricks played.
    Tricks,
    /// A truco call was refused.
    Refusal,
}

/// Something that happened during a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CardPlayed {
        seat: Seat,
        card: Card,
    },
    TrickResolved {
        cards: [PlayedCard; 4],
        result: TrickResult,
        /// Seat leading the next trick; `None` when the trick ended the hand.
        next_lead: Option<Seat>,
    },
    TrucoCalled {
        seat: Seat,
        /// Value the hand would be worth if accepted.
        proposed: u8,
    },
    TrucoAccepted {
        seat: Seat,
        stake: u8,
    },
    TrucoRefused {
        seat: Seat,
    },
    HandWon {
        team: Team,
        points: u8,
        reason: HandEndReason,
    },
    MatchWon {
        team: Team,
        scores: Scores,
    },
}

impl GameEvent {
    /// Does this event end the current hand?
    #[must_use]
    pub fn ends_hand(&self) -> bool {
        matches!(self, GameEvent::HandWon { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hand_won_ends_the_hand() {
        let won = GameEvent::HandWon {
            team: Team::One,
            points: 3,
            reason: HandEndReason::Refusal,
        };
        assert!(won.ends_hand());
        assert!(!GameEvent::TrucoRefused { seat: Seat::new(1) }.ends_hand());
    }
}
