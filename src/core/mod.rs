//! Core engine types: seats, state, actions, events, RNG, configuration, errors.
//!
//! Everything here is plain data. The rules that move a `HandState` from
//! one value to the next live in `rules`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod event;
pub mod error;
pub mod state;

pub use player::{Scores, Seat, SeatMap, Team, SEAT_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::{StakeLadder, TrucoConfig};
pub use action::{Action, ActionRecord};
pub use event::{GameEvent, HandEndReason};
pub use error::{ConfigError, DealError, IllegalAction};
pub use state::HandState;
