//! Bundled action providers.
//!
//! - `FirstCardProvider`: always the first legal action
//! - `RandomProvider`: uniform over the legal actions
//! - `HeuristicProvider`: plays to win the trick cheaply, calls truco on strong hands
//! - `ScriptedProvider`: replays a fixed list of answers

use std::collections::VecDeque;

use crate::core::{Action, GameRng};
use crate::rules::strength;

use super::{ActionProvider, DecisionRequest, ProviderError};

// =============================================================================
// First card
// =============================================================================

/// Takes the first legal action: the first card in hand on a normal turn,
/// accepting when answering a call.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstCardProvider;

impl ActionProvider for FirstCardProvider {
    fn name(&self) -> &str {
        "first-card"
    }

    fn decide(&mut self, request: &DecisionRequest) -> Result<Action, ProviderError> {
        request
            .legal
            .first()
            .copied()
            .ok_or_else(|| ProviderError::Internal("no legal actions".into()))
    }
}

// =============================================================================
// Random
// =============================================================================

/// Picks uniformly among the legal actions.
#[derive(Clone, Debug)]
pub struct RandomProvider {
    rng: GameRng,
}

impl RandomProvider {
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl ActionProvider for RandomProvider {
    fn name(&self) -> &str {
        "random"
    }

    fn decide(&mut self, request: &DecisionRequest) -> Result<Action, ProviderError> {
        self.rng
            .choose(&request.legal)
            .copied()
            .ok_or_else(|| ProviderError::Internal("no legal actions".into()))
    }
}

// =============================================================================
// Heuristic
// =============================================================================

/// Strength of a hand worth raising: a manilha plus a two or better.
const STRONG_SECOND_CARD: u8 = 9;

/// Simple rule-of-thumb player.
///
/// - Answering a call: accepts holding a manilha or a three, else refuses
/// - Leading: plays its strongest card
/// - Following: lets a partner's winning card stand by discarding its
///   weakest, otherwise takes the trick as cheaply as it can
/// - Calls truco with a strong hand while the stake is low, and bluffs
///   now and then on a normal hand
#[derive(Clone, Debug)]
pub struct HeuristicProvider {
    rng: GameRng,
    bluff_rate: f64,
}

impl HeuristicProvider {
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            bluff_rate: 0.1,
        }
    }

    /// Chance of calling truco on a normal hand without the cards for it.
    #[must_use]
    pub fn with_bluff_rate(mut self, rate: f64) -> Self {
        self.bluff_rate = rate.clamp(0.0, 1.0);
        self
    }

    fn strengths(request: &DecisionRequest) -> Vec<u8> {
        let manilha = request.state.manilha();
        request
            .state
            .hand(request.seat)
            .iter()
            .map(|&card| strength(card, manilha))
            .collect()
    }

    fn is_strong(strengths: &[u8]) -> bool {
        let mut sorted = strengths.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        match sorted.as_slice() {
            [best, second, ..] => *best > 100 && *second >= STRONG_SECOND_CARD,
            _ => false,
        }
    }

    fn answer(strengths: &[u8], request: &DecisionRequest) -> Action {
        let worth_it = strengths.iter().any(|&s| s >= 10);
        if worth_it && request.allows(Action::Accept) {
            Action::Accept
        } else {
            Action::Refuse
        }
    }

    fn choose_card(strengths: &[u8], request: &DecisionRequest) -> usize {
        let state = &request.state;
        let manilha = state.manilha();
        let weakest = index_of(strengths, |a, b| a < b);

        // top strength on the table and whether a partner played it
        let mut best: Option<(u8, bool)> = None;
        for played in state.table() {
            let value = strength(played.card, manilha);
            if best.map_or(true, |(top, _)| value > top) {
                best = Some((value, played.seat.team() == request.seat.team()));
            }
        }

        match best {
            None => index_of(strengths, |a, b| a > b),
            Some((_, true)) => weakest,
            Some((top, false)) => strengths
                .iter()
                .enumerate()
                .filter(|&(_, &s)| s > top)
                .min_by_key(|&(_, &s)| s)
                .map(|(i, _)| i)
                .unwrap_or(weakest),
        }
    }
}

/// Index of the first element that no other element beats under `better`.
fn index_of(values: &[u8], better: impl Fn(u8, u8) -> bool) -> usize {
    let mut pick = 0;
    for (i, &value) in values.iter().enumerate().skip(1) {
        if better(value, values[pick]) {
            pick = i;
        }
    }
    pick
}

impl ActionProvider for HeuristicProvider {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn decide(&mut self, request: &DecisionRequest) -> Result<Action, ProviderError> {
        let strengths = Self::strengths(request);

        if request.is_response() {
            return Ok(Self::answer(&strengths, request));
        }
        if strengths.is_empty() {
            return Err(ProviderError::Internal("empty hand on its turn".into()));
        }

        if request.allows(Action::CallTruco) {
            let stake = request.state.stake();
            let strong = Self::is_strong(&strengths) && stake < 6;
            let bluff = stake == 1 && self.rng.gen_bool(self.bluff_rate);
            if strong || bluff {
                return Ok(Action::CallTruco);
            }
        }

        Ok(Action::Play(Self::choose_card(&strengths, request)))
    }
}

// =============================================================================
// Scripted
// =============================================================================

/// Replays a queue of answers, then reports an internal error.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    script: VecDeque<Result<Action, ProviderError>>,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: actions.into_iter().map(Ok).collect(),
        }
    }

    /// Queue another answer, fault or action.
    pub fn push(&mut self, answer: Result<Action, ProviderError>) {
        self.script.push_back(answer);
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ActionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn decide(&mut self, _request: &DecisionRequest) -> Result<Action, ProviderError> {
        self.script
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::Internal("script exhausted".into())))
    }
}
