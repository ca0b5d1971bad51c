//! The table: a match from the first deal to the winning score.
//!
//! ## Key Types
//!
//! - `Table`: owns the hand in progress, applies commands and decisions
//! - `Roster`: seat names and who controls each seat
//! - `Phase`: ready, awaiting a provider decision, or game over
//! - `HandSummary`: how the last finished hand went
//! - `Checkpoint`: a saved match that `Table::resume` picks up again

pub mod phase;
pub mod roster;
pub mod session;

pub use phase::{HandSummary, Phase};
pub use roster::{Controller, Roster, SeatInfo};
pub use session::{Checkpoint, Table, TableError};
