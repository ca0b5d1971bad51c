//! Engine configuration.
//!
//! The defaults are Truco Paulista's: a match is played to 12 points and a
//! hand's stake climbs 1 -> 3 -> 6 -> 9 -> 12. Both can be overridden for
//! house rules through the builder methods; `validate()` rejects settings
//! the rules cannot work with.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Points a team needs to win the match.
pub const DEFAULT_WINNING_SCORE: u32 = 12;

/// Escalating values of a hand: normal, truco, seis, nove, doze.
pub const DEFAULT_STAKES: [u8; 5] = [1, 3, 6, 9, 12];

/// The sequence of values a hand can be worth.
///
/// The first rung is the value of an unraised hand; each accepted truco
/// call moves one rung up. The last rung is the maximum stake.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeLadder(Vec<u8>);

impl StakeLadder {
    /// Create a ladder from explicit rungs. Checked by `TrucoConfig::validate`.
    #[must_use]
    pub fn new(rungs: Vec<u8>) -> Self {
        Self(rungs)
    }

    /// Value of a hand nobody raised.
    #[must_use]
    pub fn base(&self) -> u8 {
        self.0.first().copied().unwrap_or(1)
    }

    /// Highest possible stake.
    #[must_use]
    pub fn max(&self) -> u8 {
        self.0.last().copied().unwrap_or(1)
    }

    /// The value an accepted call raises `stake` to, or `None` at the top.
    ///
    /// ```
    /// use truco_engine::core::StakeLadder;
    ///
    /// let ladder = StakeLadder::default();
    /// assert_eq!(ladder.raise(1), Some(3));
    /// assert_eq!(ladder.raise(9), Some(12));
    /// assert_eq!(ladder.raise(12), None);
    /// ```
    #[must_use]
    pub fn raise(&self, stake: u8) -> Option<u8> {
        self.0.iter().copied().find(|&rung| rung > stake)
    }

    /// Rungs, lowest first.
    #[must_use]
    pub fn rungs(&self) -> &[u8] {
        &self.0
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.0.len() < 2 || self.0[0] != 1 {
            return Err(ConfigError::ShortLadder);
        }
        for pair in self.0.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ConfigError::UnorderedLadder {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(())
    }
}

impl Default for StakeLadder {
    fn default() -> Self {
        Self(DEFAULT_STAKES.to_vec())
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrucoConfig {
    /// A match ends as soon as a team's score reaches this.
    pub winning_score: u32,

    /// Values a hand can be worth.
    pub stakes: StakeLadder,
}

impl Default for TrucoConfig {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            stakes: StakeLadder::default(),
        }
    }
}

impl TrucoConfig {
    /// Create the standard Truco Paulista configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    /// Set the stake ladder.
    #[must_use]
    pub fn with_stakes(mut self, rungs: Vec<u8>) -> Self {
        self.stakes = StakeLadder::new(rungs);
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.winning_score == 0 {
            return Err(ConfigError::ZeroWinningScore);
        }
        self.stakes.validate()
    }
}
