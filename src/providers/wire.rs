//! JSON wire format for remote providers.
//!
//! A remote provider gets a `ProviderView` (what the deciding seat may
//! see) and answers with:
//!
//! ```json
//! {"action": "play", "cardIndex": 1, "message": "optional table talk"}
//! ```
//!
//! `action` is one of `play`, `truco`, `accept`, `refuse`. A missing,
//! negative or fractional `cardIndex` is read as card 0.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::core::{Action, Scores, Seat, Team};
use crate::rules::{PlayedCard, TrickResult};

use super::{ActionProvider, DecisionRequest, ProviderError};

/// The verb of a provider reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyVerb {
    Play,
    Truco,
    Accept,
    Refuse,
}

/// A provider's answer as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderReply {
    pub action: ReplyVerb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProviderReply {
    /// Read a reply from JSON text.
    pub fn parse(text: &str) -> Result<Self, ProviderError> {
        serde_json::from_str(text).map_err(|err| ProviderError::Malformed(err.to_string()))
    }

    /// The action this reply asks for.
    #[must_use]
    pub fn action(&self) -> Action {
        match self.action {
            ReplyVerb::Play => Action::Play(self.card_index()),
            ReplyVerb::Truco => Action::CallTruco,
            ReplyVerb::Accept => Action::Accept,
            ReplyVerb::Refuse => Action::Refuse,
        }
    }

    fn card_index(&self) -> usize {
        match self.card_index {
            Some(index) if index.is_finite() && index >= 0.0 && index.fract() == 0.0 => index as usize,
            _ => 0,
        }
    }
}

impl Action {
    /// Read an action from a provider's JSON reply.
    ///
    /// ```
    /// use truco_engine::core::Action;
    ///
    /// assert_eq!(Action::parse(r#"{"action":"play","cardIndex":2}"#), Ok(Action::Play(2)));
    /// assert_eq!(Action::parse(r#"{"action":"truco"}"#), Ok(Action::CallTruco));
    /// assert!(Action::parse("not json").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Action, ProviderError> {
        ProviderReply::parse(text).map(|reply| reply.action())
    }
}

/// What the deciding seat is shown.
///
/// Other seats' hands and the undealt deck stay hidden.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderView {
    pub seat: Seat,
    pub team: Team,
    pub scores: Scores,
    pub vira: Card,
    pub manilha: Rank,
    pub hand: Vec<Card>,
    pub table: Vec<PlayedCard>,
    pub tricks: Vec<TrickResult>,
    pub stake: u8,
    pub awaiting_response: bool,
    pub legal: Vec<Action>,
}

impl ProviderView {
    #[must_use]
    pub fn new(request: &DecisionRequest) -> Self {
        let state = &request.state;
        Self {
            seat: request.seat,
            team: request.seat.team(),
            scores: state.scores(),
            vira: state.vira(),
            manilha: state.manilha(),
            hand: state.hand(request.seat).to_vec(),
            table: state.table().iter().copied().collect(),
            tricks: state.tricks().iter().copied().collect(),
            stake: state.stake(),
            awaiting_response: request.is_response(),
            legal: request.legal.clone(),
        }
    }

    /// Encode for the wire.
    pub fn to_json(&self) -> Result<String, ProviderError> {
        serde_json::to_string(self).map_err(|err| ProviderError::Internal(err.to_string()))
    }
}

/// Carries one request payload to a remote decision maker and back.
pub trait Transport {
    fn exchange(&mut self, payload: &str) -> Result<String, ProviderError>;
}

impl<F> Transport for F
where
    F: FnMut(&str) -> Result<String, ProviderError>,
{
    fn exchange(&mut self, payload: &str) -> Result<String, ProviderError> {
        self(payload)
    }
}

/// Provider that asks a remote decision maker over a `Transport`.
#[derive(Debug)]
pub struct RemoteProvider<T> {
    transport: T,
    last_message: Option<String>,
}

impl<T: Transport> RemoteProvider<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            last_message: None,
        }
    }

    /// Table talk attached to the most recent reply.
    #[must_use]
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }
}

impl<T: Transport> ActionProvider for RemoteProvider<T> {
    fn name(&self) -> &str {
        "remote"
    }

    fn decide(&mut self, request: &DecisionRequest) -> Result<Action, ProviderError> {
        let payload = ProviderView::new(request).to_json()?;
        let text = self.transport.exchange(&payload)?;
        let reply = ProviderReply::parse(&text)?;
        self.last_message = reply.message.clone();
        Ok(reply.action())
    }
}
