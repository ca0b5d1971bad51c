//! Action providers: who decides for the automated seats.
//!
//! The table never trusts a provider. It hands out a `DecisionRequest`,
//! takes back whatever the provider answered (an action or a fault) and
//! runs it through `sanitize` before the rules ever see it.
//!
//! ## Key Types
//!
//! - `ActionProvider`: the decision seam
//! - `DecisionRequest`: snapshot of the hand, the seat to act and its legal actions
//! - `ProviderError`: timeouts, internal failures, unreadable answers
//!
//! Bundled providers live in `bots`; the JSON wire format of remote
//! providers lives in `wire`.

pub mod bots;
pub mod sanitize;
pub mod wire;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Action, HandState, Seat};

pub use bots::{FirstCardProvider, HeuristicProvider, RandomProvider, ScriptedProvider};
pub use sanitize::{safe_default, sanitize};
pub use wire::{ProviderReply, ProviderView, RemoteProvider, ReplyVerb, Transport};

/// Identifies one outstanding decision.
///
/// Tickets are issued in increasing order by the table; an answer carrying
/// any ticket other than the outstanding one is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DecisionTicket(pub u64);

impl std::fmt::Display for DecisionTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything a provider gets to see when asked for a decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecisionRequest {
    pub ticket: DecisionTicket,
    /// Seat that must act.
    pub seat: Seat,
    /// The hand as it stood when the decision was requested.
    pub state: HandState,
    /// Actions the rules would accept from `seat`, never empty.
    pub legal: Vec<Action>,
}

impl DecisionRequest {
    /// Is `seat` answering a truco call rather than taking its turn?
    #[must_use]
    pub fn is_response(&self) -> bool {
        self.state.wager().responder() == Some(self.seat)
    }

    /// Would the rules accept `action`?
    #[must_use]
    pub fn allows(&self, action: Action) -> bool {
        self.legal.contains(&action)
    }
}

/// Errors a provider may report instead of an action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// No answer in time.
    #[error("provider timed out")]
    Timeout,
    /// The provider failed on its side.
    #[error("provider internal error: {0}")]
    Internal(String),
    /// The answer could not be read.
    #[error("malformed provider answer: {0}")]
    Malformed(String),
}

/// Decision policy for an automated seat.
///
/// Implementations may return any action at all; illegal answers and
/// errors are replaced by the safe default (see `sanitize`).
pub trait ActionProvider {
    /// Short name used in logs.
    fn name(&self) -> &str {
        "provider"
    }

    /// Choose an action for `request.seat`.
    fn decide(&mut self, request: &DecisionRequest) -> Result<Action, ProviderError>;
}

impl<P: ActionProvider + ?Sized> ActionProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decide(&mut self, request: &DecisionRequest) -> Result<Action, ProviderError> {
        (**self).decide(request)
    }
}
