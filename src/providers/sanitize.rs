//! Turning any provider answer into a legal action.
//!
//! - A legal answer is kept.
//! - `Play(i)` with `i` past the end of the hand becomes `Play(0)`.
//! - Everything else, faults included, becomes the safe default: `Refuse`
//!   when the seat owes an answer to a truco call, `Play(0)` otherwise.

use crate::core::Action;

use super::{DecisionRequest, ProviderError};

/// The action taken when a provider's answer cannot be used.
#[must_use]
pub fn safe_default(request: &DecisionRequest) -> Action {
    if request.is_response() {
        Action::Refuse
    } else {
        Action::Play(0)
    }
}

/// Map a provider's answer to an action the rules will accept.
#[must_use]
pub fn sanitize(request: &DecisionRequest, answer: Result<Action, ProviderError>) -> Action {
    let seat = request.seat;
    let proposed = match answer {
        Ok(action) => action,
        Err(err) => {
            tracing::warn!(seat = %seat, ticket = %request.ticket, error = %err, "provider fault, using safe default");
            return safe_default(request);
        }
    };

    if request.allows(proposed) {
        return proposed;
    }

    let replacement = match proposed {
        Action::Play(index) if index >= request.state.hand(seat).len() && request.allows(Action::Play(0)) => {
            Action::Play(0)
        }
        _ => safe_default(request),
    };
    tracing::debug!(seat = %seat, %proposed, %replacement, "replaced illegal provider answer");
    replacement
}
