//! Truco Paulista rules.
//!
//! Leaf-first:
//! - `strength`: card strength given the manilha
//! - `trick`: who took a trick, who leads next
//! - `hand`: best-of-three aggregation of trick results
//! - `wager`: the truco call / accept / refuse state machine
//! - `engine`: `RulesEngine`, tying the above into pure state transitions

pub mod strength;
pub mod trick;
pub mod hand;
pub mod wager;
pub mod engine;

pub use strength::strength;
pub use trick::{best_card_owner, resolve_trick, PlayedCard, TrickResult};
pub use hand::aggregate;
pub use wager::{shout, Refusal, WagerState};
pub use engine::{GameResult, RulesEngine, Transition, TrucoRules};
