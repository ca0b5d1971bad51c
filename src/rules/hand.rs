//! Hand aggregation: best of three tricks.
//!
//! Precedence, checked after every trick:
//!
//! 1. A team with two tricks takes the hand, even after only two tricks.
//! 2. After three tricks, the team with strictly more tricks takes it.
//! 3. Otherwise the winner of the first trick that was not tied takes it.
//! 4. Three tied tricks go to team 0.
//!
//! Rule 4 is the house convention of this engine; regional rules differ
//! (some void the hand instead).

use super::trick::TrickResult;
use crate::core::player::Team;

/// Tricks in a full hand.
pub const TRICKS_PER_HAND: usize = 3;

/// Tricks a team needs to take the hand outright.
pub const TRICKS_TO_WIN: usize = 2;

/// Decide the hand from the trick results so far, or `None` to keep playing.
///
/// ```
/// use truco_engine::core::Team;
/// use truco_engine::rules::{aggregate, TrickResult};
///
/// let won = TrickResult::Won(Team::Zero);
/// assert_eq!(aggregate(&[won]), None);
/// assert_eq!(aggregate(&[won, won]), Some(Team::Zero));
/// assert_eq!(aggregate(&[TrickResult::Tied; 3]), Some(Team::Zero));
/// ```
#[must_use]
pub fn aggregate(results: &[TrickResult]) -> Option<Team> {
    debug_assert!(results.len() <= TRICKS_PER_HAND, "more than three tricks in a hand");

    let wins = |team: Team| {
        results
            .iter()
            .filter(|r| r.winner() == Some(team))
            .count()
    };
    let (zero, one) = (wins(Team::Zero), wins(Team::One));

    if zero >= TRICKS_TO_WIN {
        return Some(Team::Zero);
    }
    if one >= TRICKS_TO_WIN {
        return Some(Team::One);
    }
    if results.len() < TRICKS_PER_HAND {
        return None;
    }

    if zero > one {
        return Some(Team::Zero);
    }
    if one > zero {
        return Some(Team::One);
    }
    Some(
        results
            .iter()
            .find_map(|r| r.winner())
            .unwrap_or(Team::Zero),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: TrickResult = TrickResult::Won(Team::Zero);
    const T1: TrickResult = TrickResult::Won(Team::One);
    const TIE: TrickResult = TrickResult::Tied;

    #[test]
    fn undecided_before_two_wins() {
        assert_eq!(aggregate(&[]), None);
        assert_eq!(aggregate(&[T0]), None);
        assert_eq!(aggregate(&[T0, T1]), None);
        assert_eq!(aggregate(&[TIE, T1]), None);
        assert_eq!(aggregate(&[TIE, TIE]), None);
    }

    #[test]
    fn two_wins_short_circuit() {
        assert_eq!(aggregate(&[T0, T0]), Some(Team::Zero));
        assert_eq!(aggregate(&[T1, T1]), Some(Team::One));
        assert_eq!(aggregate(&[T0, T1, T1]), Some(Team::One));
        assert_eq!(aggregate(&[T1, T0, T0]), Some(Team::Zero));
    }

    #[test]
    fn majority_after_three_tricks() {
        assert_eq!(aggregate(&[TIE, TIE, T1]), Some(Team::One));
        assert_eq!(aggregate(&[T1, TIE, TIE]), Some(Team::One));
    }

    #[test]
    fn first_untied_trick_breaks_level_counts() {
        assert_eq!(aggregate(&[TIE, T0, T1]), Some(Team::Zero));
        assert_eq!(aggregate(&[TIE, T1, T0]), Some(Team::One));
        assert_eq!(aggregate(&[T1, T0, TIE]), Some(Team::One));
        assert_eq!(aggregate(&[T0, T1, TIE]), Some(Team::Zero));
    }

    #[test]
    fn three_ties_default_to_team_zero() {
        assert_eq!(aggregate(&[TIE, TIE, TIE]), Some(Team::Zero));
    }
}
