//! Rules engine: pure transitions over `HandState`.
//!
//! `RulesEngine` is the seam the table and the bots talk to:
//! - What actions are legal for a seat
//! - How an action turns one state into the next
//! - Whether the match is over
//!
//! `TrucoRules` is the Truco Paulista implementation. Transitions never
//! mutate their input; a rejected action leaves the caller holding the
//! exact state it had.

use crate::core::action::Action;
use crate::core::config::TrucoConfig;
use crate::core::error::{ConfigError, IllegalAction};
use crate::core::event::{GameEvent, HandEndReason};
use crate::core::player::{Scores, Seat, Team};
use crate::core::state::HandState;

use super::hand::aggregate;
use super::trick::{best_card_owner, resolve_trick, PlayedCard, TrickResult, TRICK_SIZE};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Team,
    pub scores: Scores,
}

/// A successful transition: the new state and what happened on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: HandState,
    pub events: Vec<GameEvent>,
}

impl Transition {
    /// The hand ended in this transition.
    #[must_use]
    pub fn hand_ended(&self) -> bool {
        self.events.iter().any(GameEvent::ends_hand)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: must be pure and deterministic; errors are the only
///   way to reject an action
/// - `is_terminal`: return `None` while the match continues
pub trait RulesEngine {
    /// Get the engine configuration.
    fn config(&self) -> &TrucoConfig;

    /// Apply an action for `seat`, producing the next state.
    fn apply_action(
        &self,
        state: &HandState,
        seat: Seat,
        action: Action,
    ) -> Result<Transition, IllegalAction>;

    /// Check if the match is over.
    fn is_terminal(&self, state: &HandState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Would `action` be accepted for `seat`?
    fn is_legal(&self, state: &HandState, seat: Seat, action: Action) -> bool {
        self.apply_action(state, seat, action).is_ok()
    }

    /// Enumerate all legal actions for a seat.
    ///
    /// Default implementation tries every card in the seat's hand and every
    /// wager verb.
    fn legal_actions(&self, state: &HandState, seat: Seat) -> Vec<Action> {
        (0..state.hand(seat).len())
            .map(Action::Play)
            .chain([Action::CallTruco, Action::Accept, Action::Refuse])
            .filter(|&action| self.is_legal(state, seat, action))
            .collect()
    }
}

/// Truco Paulista rules.
#[derive(Clone, Debug, Default)]
pub struct TrucoRules {
    config: TrucoConfig,
}

impl TrucoRules {
    /// Create rules from a validated configuration.
    pub fn new(config: TrucoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    fn play(
        &self,
        state: &HandState,
        seat: Seat,
        index: usize,
        events: &mut Vec<GameEvent>,
    ) -> Result<HandState, IllegalAction> {
        if state.wager.awaiting_response() {
            return Err(IllegalAction::AwaitingResponse);
        }
        if seat != state.turn {
            return Err(IllegalAction::NotYourTurn(seat));
        }
        let len = state.hand(seat).len();
        if index >= len {
            return Err(IllegalAction::CardIndexOutOfRange { index, len });
        }

        let mut next = state.clone();
        let card = next.hands[seat].remove(index);
        next.record(seat, Action::Play(index));
        next.table.push_back(PlayedCard::new(seat, card));
        events.push(GameEvent::CardPlayed { seat, card });

        if next.table.len() < TRICK_SIZE {
            next.turn = seat.next();
        } else {
            self.finish_trick(&mut next, events);
        }
        Ok(next)
    }

    fn finish_trick(&self, state: &mut HandState, events: &mut Vec<GameEvent>) {
        debug_assert_eq!(state.table.len(), TRICK_SIZE, "trick resolved with a short table");
        let cards: [PlayedCard; TRICK_SIZE] = std::array::from_fn(|i| state.table[i]);
        let result = resolve_trick(&cards, state.manilha);
        let leader = best_card_owner(&cards, state.manilha);

        state.tricks.push_back(result);
        state.table.clear();

        let results: Vec<TrickResult> = state.tricks.iter().copied().collect();
        match aggregate(&results) {
            Some(team) => {
                events.push(GameEvent::TrickResolved {
                    cards,
                    result,
                    next_lead: None,
                });
                let points = state.wager.stake();
                self.end_hand(state, team, points, HandEndReason::Tricks, events);
            }
            None => {
                state.turn = leader;
                events.push(GameEvent::TrickResolved {
                    cards,
                    result,
                    next_lead: Some(leader),
                });
            }
        }
    }

    fn end_hand(
        &self,
        state: &mut HandState,
        team: Team,
        points: u8,
        reason: HandEndReason,
        events: &mut Vec<GameEvent>,
    ) {
        state.scores.award(team, u32::from(points));
        state.hand_over = true;
        events.push(GameEvent::HandWon { team, points, reason });

        if state.scores[team] >= self.config.winning_score {
            state.game_over = true;
            events.push(GameEvent::MatchWon {
                team,
                scores: state.scores,
            });
        }
    }
}

impl RulesEngine for TrucoRules {
    fn config(&self) -> &TrucoConfig {
        &self.config
    }

    fn apply_action(
        &self,
        state: &HandState,
        seat: Seat,
        action: Action,
    ) -> Result<Transition, IllegalAction> {
        if state.game_over {
            return Err(IllegalAction::GameOver);
        }
        if state.hand_over {
            return Err(IllegalAction::HandOver);
        }

        let ladder = &self.config.stakes;
        let mut events = Vec::new();
        let next = match action {
            Action::Play(index) => self.play(state, seat, index, &mut events)?,
            Action::CallTruco => {
                let (wager, proposed) = state.wager.call(seat, state.turn, ladder)?;
                let mut next = state.clone();
                next.wager = wager;
                next.record(seat, action);
                events.push(GameEvent::TrucoCalled { seat, proposed });
                next
            }
            Action::Accept => {
                let wager = state.wager.accept(seat, ladder)?;
                let mut next = state.clone();
                next.wager = wager;
                next.record(seat, action);
                events.push(GameEvent::TrucoAccepted {
                    seat,
                    stake: wager.stake(),
                });
                next
            }
            Action::Refuse => {
                let (wager, refusal) = state.wager.refuse(seat)?;
                let mut next = state.clone();
                next.wager = wager;
                next.record(seat, action);
                events.push(GameEvent::TrucoRefused { seat });
                self.end_hand(
                    &mut next,
                    refusal.team,
                    refusal.points,
                    HandEndReason::Refusal,
                    &mut events,
                );
                next
            }
        };

        Ok(Transition { state: next, events })
    }

    fn is_terminal(&self, state: &HandState) -> Option<GameResult> {
        state
            .scores
            .leader_at(self.config.winning_score)
            .map(|winner| GameResult {
                winner,
                scores: state.scores,
            })
    }
}
