//! # truco-engine
//!
//! Rules engine for four-player, two-team Truco Paulista.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Every transition takes a `&HandState` and returns a new
//!    one or an `IllegalAction`. Nothing is mutated on rejection.
//!
//! 2. **Untrusted Providers**: Automated seats answer through the
//!    `ActionProvider` seam; every answer is sanitized into a legal action.
//!
//! 3. **Deterministic**: Deals and bots draw from seeded ChaCha8 streams, so a
//!    seed replays a match exactly.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`, so
//!   transitions can hand back fresh states cheaply.
//!
//! - **Explicit Decision Phase**: The table issues a ticket when it asks a
//!   provider to decide and accepts exactly one answer for it.
//!
//! ## Modules
//!
//! - `core`: seats, teams, state, actions, events, RNG, configuration, errors
//! - `cards`: ranks, suits, the 40-card deck and the deal
//! - `rules`: card strength, tricks, hand aggregation, wagers, `RulesEngine`
//! - `providers`: the action-provider seam, sanitizer, wire format, bots
//! - `table`: a match in progress

pub mod core;
pub mod cards;
pub mod rules;
pub mod providers;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, DealError, GameEvent, GameRng, GameRngState,
    HandEndReason, HandState, IllegalAction, Scores, Seat, SeatMap, StakeLadder, Team,
    TrucoConfig,
};

pub use crate::cards::{Card, CardId, Deck, Rank, Suit};

pub use crate::rules::{
    aggregate, best_card_owner, resolve_trick, strength, GameResult, PlayedCard, RulesEngine,
    TrickResult, TrucoRules, WagerState,
};

pub use crate::providers::{
    sanitize, ActionProvider, DecisionRequest, DecisionTicket, FirstCardProvider,
    HeuristicProvider, ProviderError, RandomProvider, ScriptedProvider,
};

pub use crate::table::{
    Checkpoint, Controller, HandSummary, Phase, Roster, SeatInfo, Table, TableError,
};
