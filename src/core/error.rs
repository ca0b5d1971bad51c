//! Error types.
//!
//! `IllegalAction` is the only error a rules transition can produce. It is
//! never fatal: the table reports it through its status message and leaves
//! the state untouched.

use thiserror::Error;

use super::player::Seat;
use crate::cards::Card;

/// An operation attempted outside its legal state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalAction {
    #[error("the match is over")]
    GameOver,
    #[error("the hand is over")]
    HandOver,
    #[error("it is not {0}'s turn")]
    NotYourTurn(Seat),
    #[error("a truco call is waiting for an answer")]
    AwaitingResponse,
    #[error("no truco call is waiting for an answer")]
    NoChallenge,
    #[error("only {expected} may answer the truco call")]
    NotResponder { expected: Seat },
    #[error("the stake is already at its maximum of {0}")]
    MaxStake(u8),
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    #[error("card index {index} is out of range for a hand of {len}")]
    CardIndexOutOfRange { index: usize, len: usize },
    #[error("waiting for {0} to decide")]
    AwaitingDecision(Seat),
}

/// A deck that cannot be dealt from.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("deck holds {found} cards, at least {needed} are needed")]
    NotEnoughCards { needed: usize, found: usize },
    #[error("deck holds {0} more than once")]
    DuplicateCard(Card),
}

/// Invalid engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("winning score must be positive")]
    ZeroWinningScore,
    #[error("stake ladder must start at 1 and have at least one raise")]
    ShortLadder,
    #[error("stake ladder must be strictly increasing, found {prev} then {next}")]
    UnorderedLadder { prev: u8, next: u8 },
}
