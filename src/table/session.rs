//! A match in progress.
//!
//! `Table` owns the current `HandState` and everything around it that the
//! rules do not care about: seat names and controllers, the status line,
//! the outstanding provider decision, dealer rotation and the deal RNG.
//!
//! Commands and decisions go through one path:
//!
//! ```text
//! command / resolve_decision
//!   -> RulesEngine::apply_action
//!      -> Err: no-op, status explains why
//!      -> Ok:  adopt new state, describe events
//!              hand over? -> summarise, deal next hand (unless match over)
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{Card, Deck};
use crate::core::{
    Action, ConfigError, DealError, GameEvent, GameRng, GameRngState, HandState, IllegalAction,
    Scores, Seat, Team, TrucoConfig,
};
use crate::providers::{sanitize, ActionProvider, DecisionRequest, DecisionTicket, ProviderError};
use crate::rules::{shout, RulesEngine, TrickResult, TrucoRules};

use super::phase::{HandSummary, Phase};
use super::roster::Roster;

/// Failure to set up a table or a hand.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot deal: {0}")]
    Deal(#[from] DealError),
    #[error("the match is over")]
    GameOver,
}

/// Saved position of a match.
///
/// Carries the deal stream's position, so a resumed table deals the same
/// hands the original would have. Outstanding decisions are not saved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub state: HandState,
    pub seed: u64,
    pub deal_rng: GameRngState,
    pub next_ticket: u64,
}

/// One match at a four-seat table.
#[derive(Clone, Debug)]
pub struct Table {
    rules: TrucoRules,
    roster: Roster,
    state: HandState,
    status: String,
    events: Vec<GameEvent>,
    last_hand: Option<HandSummary>,
    pending: Option<DecisionRequest>,
    next_ticket: u64,
    seed: u64,
    deal_rng: GameRng,
}

impl Table {
    /// Start a match at 0-0 with `dealer` dealing the first hand.
    pub fn new(config: TrucoConfig, roster: Roster, dealer: Seat, seed: u64) -> Result<Self, TableError> {
        let mut deal_rng = GameRng::new(seed).for_context("deal");
        let deck = Deck::shuffled(&mut deal_rng);
        let state = HandState::deal(Scores::default(), dealer, deck)?;
        let table = Self::assemble(config, roster, state, seed, deal_rng)?;
        tracing::info!(dealer = %dealer, seed, "match started");
        Ok(table)
    }

    /// Resume a match from any hand state.
    ///
    /// A finished hand is followed by a fresh deal, as after any hand.
    pub fn from_state(config: TrucoConfig, roster: Roster, state: HandState, seed: u64) -> Result<Self, TableError> {
        let deal_rng = GameRng::new(seed).for_context("deal");
        Self::assemble(config, roster, state, seed, deal_rng)
    }

    /// Resume a match saved with [`Table::checkpoint`].
    pub fn resume(config: TrucoConfig, roster: Roster, checkpoint: Checkpoint) -> Result<Self, TableError> {
        let deal_rng = GameRng::from_state(&checkpoint.deal_rng);
        let mut table = Self::assemble(config, roster, checkpoint.state, checkpoint.seed, deal_rng)?;
        table.next_ticket = checkpoint.next_ticket;
        Ok(table)
    }

    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            state: self.state.clone(),
            seed: self.seed,
            deal_rng: self.deal_rng.state(),
            next_ticket: self.next_ticket,
        }
    }

    fn assemble(
        config: TrucoConfig,
        roster: Roster,
        state: HandState,
        seed: u64,
        deal_rng: GameRng,
    ) -> Result<Self, TableError> {
        let rules = TrucoRules::new(config)?;
        let mut table = Self {
            rules,
            roster,
            state,
            status: String::new(),
            events: Vec::new(),
            last_hand: None,
            pending: None,
            next_ticket: 0,
            seed,
            deal_rng,
        };
        // scores already past the threshold: nothing more to play
        if !table.state.is_game_over() && table.rules.is_terminal(&table.state).is_some() {
            table.state.game_over = true;
        }
        if table.state.is_hand_over() && !table.state.is_game_over() {
            let dealer = table.state.dealer().next();
            let deck = Deck::shuffled(&mut table.deal_rng);
            table.start_hand(dealer, deck)?;
        }
        table.status = table.whose_move();
        Ok(table)
    }

    /// Replace the hand in progress with one dealt from `deck`.
    ///
    /// Scores carry over; any outstanding decision is dropped.
    pub fn start_hand_with_deck(&mut self, dealer: Seat, deck: Deck) -> Result<(), TableError> {
        if self.state.is_game_over() {
            return Err(TableError::GameOver);
        }
        self.start_hand(dealer, deck)?;
        self.status = self.whose_move();
        Ok(())
    }

    fn start_hand(&mut self, dealer: Seat, deck: Deck) -> Result<(), DealError> {
        self.state = HandState::deal(self.state.scores(), dealer, deck)?;
        self.pending = None;
        tracing::debug!(
            dealer = %dealer,
            vira = %self.state.vira(),
            manilha = %self.state.manilha(),
            scores = %self.state.scores(),
            "hand dealt"
        );
        Ok(())
    }

    // === Presentation ===

    #[must_use]
    pub fn state(&self) -> &HandState {
        &self.state
    }

    /// Human-readable description of the last thing that happened.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn rules(&self) -> &TrucoRules {
        &self.rules
    }

    /// Events of the last successful transition.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn last_hand(&self) -> Option<&HandSummary> {
        self.last_hand.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.state.is_game_over() {
            Phase::GameOver
        } else if let Some(request) = &self.pending {
            Phase::AwaitingDecision {
                seat: request.seat,
                ticket: request.ticket,
            }
        } else {
            Phase::Ready
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        self.rules.is_terminal(&self.state).map(|result| result.winner)
    }

    #[must_use]
    pub fn legal_actions(&self, seat: Seat) -> Vec<Action> {
        self.rules.legal_actions(&self.state, seat)
    }

    /// RNG for a provider, derived from the table seed.
    #[must_use]
    pub fn provider_rng(&self) -> GameRng {
        GameRng::new(self.seed).for_context("provider")
    }

    // === Human commands ===

    /// Play `card` from `seat`'s hand. Returns whether it was applied.
    pub fn play(&mut self, seat: Seat, card: Card) -> bool {
        match self.state.hand(seat).iter().position(|&held| held == card) {
            Some(index) => self.command(seat, Action::Play(index)),
            None => {
                let err = self
                    .blocked()
                    .unwrap_or(IllegalAction::CardNotInHand(card));
                self.reject(seat, &err);
                false
            }
        }
    }

    pub fn call_truco(&mut self, seat: Seat) -> bool {
        self.command(seat, Action::CallTruco)
    }

    pub fn accept(&mut self, seat: Seat) -> bool {
        self.command(seat, Action::Accept)
    }

    pub fn refuse(&mut self, seat: Seat) -> bool {
        self.command(seat, Action::Refuse)
    }

    /// Apply any action for `seat`. Returns whether it was applied.
    pub fn command(&mut self, seat: Seat, action: Action) -> bool {
        if let Some(err) = self.blocked() {
            self.reject(seat, &err);
            return false;
        }
        match self.commit(seat, action) {
            Ok(()) => true,
            Err(err) => {
                self.reject(seat, &err);
                false
            }
        }
    }

    fn blocked(&self) -> Option<IllegalAction> {
        if self.state.is_game_over() {
            return Some(IllegalAction::GameOver);
        }
        self.pending
            .as_ref()
            .map(|request| IllegalAction::AwaitingDecision(request.seat))
    }

    fn reject(&mut self, seat: Seat, err: &IllegalAction) {
        tracing::debug!(seat = %seat, error = %err, "action rejected");
        self.status = format!("{} can't do that: {}.", self.roster.name(seat), self.explain(err));
    }

    /// `err` with seats rendered by name.
    fn explain(&self, err: &IllegalAction) -> String {
        let name = |seat: Seat| self.roster.name(seat);
        match *err {
            IllegalAction::NotYourTurn(seat) => format!("it is not {}'s turn", name(seat)),
            IllegalAction::NotResponder { expected } => {
                format!("only {} may answer the truco call", name(expected))
            }
            IllegalAction::AwaitingDecision(seat) => format!("waiting for {} to decide", name(seat)),
            _ => err.to_string(),
        }
    }

    // === Automated decisions ===

    /// Ask for a decision if the seat that must act next is automated.
    ///
    /// Returns `None` when a human must act, a decision is already
    /// outstanding or the match is over.
    pub fn begin_decision(&mut self) -> Option<DecisionRequest> {
        if self.pending.is_some() || self.state.is_game_over() {
            return None;
        }
        let seat = self.state.actor();
        if self.roster.is_human(seat) {
            return None;
        }
        let legal = self.rules.legal_actions(&self.state, seat);
        if legal.is_empty() {
            return None;
        }

        let ticket = DecisionTicket(self.next_ticket);
        self.next_ticket += 1;
        let request = DecisionRequest {
            ticket,
            seat,
            state: self.state.clone(),
            legal,
        };
        self.pending = Some(request.clone());
        tracing::debug!(seat = %seat, ticket = %ticket, "awaiting decision");
        Some(request)
    }

    /// Deliver the answer to an outstanding decision.
    ///
    /// Answers for any ticket but the outstanding one are ignored. Faults
    /// and illegal answers are replaced by the safe default. Returns
    /// whether an action was applied.
    pub fn resolve_decision(&mut self, ticket: DecisionTicket, answer: Result<Action, ProviderError>) -> bool {
        let request = match self.pending.take() {
            Some(request) if request.ticket == ticket => request,
            other => {
                self.pending = other;
                tracing::debug!(ticket = %ticket, "ignoring stale decision");
                return false;
            }
        };

        let action = sanitize(&request, answer);
        match self.commit(request.seat, action) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(seat = %request.seat, %action, error = %err, "sanitized action rejected");
                self.reject(request.seat, &err);
                false
            }
        }
    }

    /// Drop the outstanding decision, if any.
    pub fn cancel_decision(&mut self) -> bool {
        let cancelled = self.pending.take();
        if let Some(request) = &cancelled {
            tracing::debug!(seat = %request.seat, ticket = %request.ticket, "decision cancelled");
        }
        cancelled.is_some()
    }

    /// Request, decide and resolve one automated decision.
    pub fn step(&mut self, provider: &mut dyn ActionProvider) -> bool {
        let Some(request) = self.begin_decision() else {
            return false;
        };
        let answer = provider.decide(&request);
        tracing::debug!(provider = provider.name(), seat = %request.seat, ?answer, "provider answered");
        self.resolve_decision(request.ticket, answer)
    }

    /// Step until a human must act or the match is over. Returns the
    /// number of actions applied.
    pub fn run_automated(&mut self, provider: &mut dyn ActionProvider) -> usize {
        let mut steps = 0;
        while self.step(provider) {
            steps += 1;
        }
        steps
    }

    // === Transitions ===

    fn commit(&mut self, seat: Seat, action: Action) -> Result<(), IllegalAction> {
        let transition = self.rules.apply_action(&self.state, seat, action)?;
        tracing::debug!(seat = %seat, %action, events = transition.events.len(), "action applied");

        let hand_ended = transition.hand_ended();
        self.state = transition.state;
        self.events = transition.events;

        let mut lines: Vec<String> = self
            .events
            .iter()
            .filter_map(|event| self.describe(event))
            .collect();

        if hand_ended {
            self.last_hand = self.summarise();
            if !self.state.is_game_over() {
                let dealer = self.state.dealer().next();
                let deck = Deck::shuffled(&mut self.deal_rng);
                match self.start_hand(dealer, deck) {
                    Ok(()) => {
                        lines.push(format!("{} deals.", self.roster.name(dealer)));
                        lines.push(self.whose_move());
                    }
                    Err(err) => tracing::error!(error = %err, "could not deal the next hand"),
                }
            }
        } else {
            lines.push(self.whose_move());
        }

        self.status = lines.join(" ");
        Ok(())
    }

    fn summarise(&self) -> Option<HandSummary> {
        self.events.iter().find_map(|event| match *event {
            GameEvent::HandWon { team, points, reason } => Some(HandSummary {
                winner: team,
                points,
                reason,
                tricks: self.state.tricks().iter().copied().collect(),
                scores: self.state.scores(),
            }),
            _ => None,
        })
    }

    fn describe(&self, event: &GameEvent) -> Option<String> {
        let name = |seat: Seat| self.roster.name(seat);
        match *event {
            GameEvent::CardPlayed { .. } => None,
            GameEvent::TrickResolved { next_lead: None, .. } => None,
            GameEvent::TrickResolved {
                result,
                next_lead: Some(_),
                ..
            } => Some(match result {
                TrickResult::Won(team) => format!("Trick to {}.", team),
                TrickResult::Tied => "Trick tied.".to_string(),
            }),
            GameEvent::TrucoCalled { seat, proposed } => {
                Some(format!("{} called {}", name(seat), shout(proposed)))
            }
            GameEvent::TrucoAccepted { seat, stake } => {
                Some(format!("{} accepted, the hand is worth {}.", name(seat), stake))
            }
            GameEvent::TrucoRefused { seat } => Some(format!("{} refused.", name(seat))),
            GameEvent::HandWon { team, points, .. } => {
                tracing::info!(team = %team, points, scores = %self.state.scores(), "hand won");
                Some(format!("{} won the hand (+{}).", team, points))
            }
            GameEvent::MatchWon { team, scores } => {
                tracing::info!(team = %team, scores = %scores, "match won");
                Some(format!("{} won the match {}!", team, scores))
            }
        }
    }

    fn whose_move(&self) -> String {
        if self.state.is_game_over() {
            return String::new();
        }
        match self.state.wager().responder() {
            Some(responder) => format!("{} to answer.", self.roster.name(responder)),
            None => format!("{} to play.", self.roster.name(self.state.turn())),
        }
    }
}
