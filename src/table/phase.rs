//! Table phase and hand summaries.

use serde::{Deserialize, Serialize};

use crate::core::{HandEndReason, Scores, Seat, Team};
use crate::providers::DecisionTicket;
use crate::rules::TrickResult;

/// What the table is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting commands, or a decision may be requested.
    Ready,
    /// An automated seat has been asked to decide; only an answer carrying
    /// `ticket` moves the table on.
    AwaitingDecision { seat: Seat, ticket: DecisionTicket },
    /// A team reached the winning score.
    GameOver,
}

impl Phase {
    #[must_use]
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Phase::AwaitingDecision { .. })
    }
}

/// How the last finished hand went.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSummary {
    pub winner: Team,
    pub points: u8,
    pub reason: HandEndReason,
    /// Trick results, empty or partial when the hand ended on a refusal.
    pub tricks: Vec<TrickResult>,
    /// Scores after the points were added.
    pub scores: Scores,
}

impl std::fmt::Display for HandSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            HandEndReason::Tricks => write!(f, "{} won the hand (+{})", self.winner, self.points),
            HandEndReason::Refusal => {
                write!(f, "{} won the hand on a refusal (+{})", self.winner, self.points)
            }
        }
    }
}
