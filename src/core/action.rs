//! Actions a seat can take, and the record kept of them.
//!
//! There are only four verbs in Truco: play a card (by its index in the
//! seat's hand), call truco, and accept or refuse a pending call. Actions
//! are plain values; whether one is legal depends on the `HandState` it is
//! applied to.

use serde::{Deserialize, Serialize};

use super::player::Seat;

/// A complete game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at this index of the seat's hand.
    Play(usize),
    /// Challenge the other team to raise the stake.
    CallTruco,
    /// Accept a pending challenge; the stake goes up.
    Accept,
    /// Refuse a pending challenge; the challenger's team scores.
    Refuse,
}

impl Action {
    /// Is this an answer to a truco call?
    #[must_use]
    pub const fn is_response(self) -> bool {
        matches!(self, Action::Accept | Action::Refuse)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(index) => write!(f, "play #{}", index),
            Action::CallTruco => f.write_str("truco"),
            Action::Accept => f.write_str("accept"),
            Action::Refuse => f.write_str("refuse"),
        }
    }
}

/// A recorded action with its position in the hand.
///
/// Used for replay and debugging; the history of the current hand lives
/// in `HandState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub seat: Seat,

    /// The action taken.
    pub action: Action,

    /// Trick number (0-based) the action happened in.
    pub trick: u8,

    /// Sequence number within the hand (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(seat: Seat, action: Action, trick: u8, sequence: u32) -> Self {
        Self {
            seat,
            action,
            trick,
            sequence,
        }
    }
}
