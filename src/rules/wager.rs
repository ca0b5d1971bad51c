//! The truco wager state machine.
//!
//! ```text
//!             call (turn seat, stake < max)
//!   Normal ─────────────────────────────────▶ Challenged
//!     ▲                                          │
//!     │   accept (responder): stake one rung up  │
//!     ├──────────────────────────────────────────┤
//!     │   refuse (responder): challenger's team  │
//!     └──── scores the pre-raise stake; hand ends┘
//! ```
//!
//! The responder is always the seat after the challenger. A call does not
//! use up the caller's turn: once answered, play resumes where it stopped.

use serde::{Deserialize, Serialize};

use crate::core::config::StakeLadder;
use crate::core::error::IllegalAction;
use crate::core::player::{Seat, Team};

/// Stake of the current hand and any outstanding challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WagerState {
    stake: u8,
    challenger: Option<Seat>,
}

impl Default for WagerState {
    fn default() -> Self {
        Self {
            stake: 1,
            challenger: None,
        }
    }
}

/// What a refusal settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Refusal {
    /// Team of the seat that called.
    pub team: Team,
    /// The stake before the refused raise.
    pub points: u8,
}

impl WagerState {
    /// Current value of the hand.
    #[must_use]
    pub const fn stake(&self) -> u8 {
        self.stake
    }

    /// Seat with an unanswered call.
    #[must_use]
    pub const fn challenger(&self) -> Option<Seat> {
        self.challenger
    }

    /// Is play frozen waiting for an answer?
    #[must_use]
    pub const fn awaiting_response(&self) -> bool {
        self.challenger.is_some()
    }

    /// Seat that must answer the outstanding call.
    #[must_use]
    pub fn responder(&self) -> Option<Seat> {
        self.challenger.map(Seat::next)
    }

    /// `seat` calls truco on its turn.
    ///
    /// Returns the new state and the value proposed.
    pub fn call(&self, seat: Seat, turn: Seat, ladder: &StakeLadder) -> Result<(Self, u8), IllegalAction> {
        if self.awaiting_response() {
            return Err(IllegalAction::AwaitingResponse);
        }
        if seat != turn {
            return Err(IllegalAction::NotYourTurn(seat));
        }
        let proposed = ladder
            .raise(self.stake)
            .ok_or(IllegalAction::MaxStake(self.stake))?;
        Ok((
            Self {
                stake: self.stake,
                challenger: Some(seat),
            },
            proposed,
        ))
    }

    /// The responder accepts: the stake moves one rung up.
    pub fn accept(&self, seat: Seat, ladder: &StakeLadder) -> Result<Self, IllegalAction> {
        self.check_responder(seat)?;
        let stake = ladder
            .raise(self.stake)
            .ok_or(IllegalAction::MaxStake(self.stake))?;
        Ok(Self {
            stake,
            challenger: None,
        })
    }

    /// The responder refuses: the challenger's team takes the current stake.
    pub fn refuse(&self, seat: Seat) -> Result<(Self, Refusal), IllegalAction> {
        let challenger = self.check_responder(seat)?;
        Ok((
            Self {
                stake: self.stake,
                challenger: None,
            },
            Refusal {
                team: challenger.team(),
                points: self.stake,
            },
        ))
    }

    fn check_responder(&self, seat: Seat) -> Result<Seat, IllegalAction> {
        let challenger = self.challenger.ok_or(IllegalAction::NoChallenge)?;
        let expected = challenger.next();
        if seat != expected {
            return Err(IllegalAction::NotResponder { expected });
        }
        Ok(challenger)
    }
}

/// The word shouted when proposing `proposed`.
#[must_use]
pub fn shout(proposed: u8) -> &'static str {
    match proposed {
        6 => "Seis!",
        9 => "Nove!",
        12 => "Doze!",
        _ => "Truco!",
    }
}
