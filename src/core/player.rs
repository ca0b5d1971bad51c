//! Seats, teams, and per-seat data storage.
//!
//! ## Seat
//!
//! Type-safe seat identifier for the fixed four-seat table. Seats are
//! numbered 0-3 clockwise; partners sit opposite each other.
//!
//! ## Team
//!
//! Seat parity decides the team: even seats are `Team::Zero`, odd seats
//! are `Team::One`.
//!
//! ## SeatMap
//!
//! Per-seat data storage backed by a `[T; 4]` for O(1) access.
//! Supports iteration and indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at a Truco table.
pub const SEAT_COUNT: usize = 4;

/// Seat identifier, 0-3 around the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    /// Create a seat, wrapping out-of-range indices around the table.
    ///
    /// ```
    /// use truco_engine::core::Seat;
    ///
    /// assert_eq!(Seat::new(5), Seat::new(1));
    /// ```
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index % SEAT_COUNT as u8)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat to the left, `(seat + 1) mod 4`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::new(self.0 + 1)
    }

    /// The partner sitting opposite.
    #[must_use]
    pub const fn partner(self) -> Self {
        Self::new(self.0 + 2)
    }

    /// The team this seat plays for.
    #[must_use]
    pub const fn team(self) -> Team {
        if self.0 % 2 == 0 {
            Team::Zero
        } else {
            Team::One
        }
    }

    /// Iterate over all four seats in table order.
    ///
    /// ```
    /// use truco_engine::core::Seat;
    ///
    /// let seats: Vec<_> = Seat::all().collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], Seat::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = Seat> {
        (0..SEAT_COUNT as u8).map(Seat)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// One of the two partnerships.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Seats 0 and 2.
    Zero,
    /// Seats 1 and 3.
    One,
}

impl Team {
    /// Get the raw team index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Team::Zero => 0,
            Team::One => 1,
        }
    }

    /// The other partnership.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Team::Zero => Team::One,
            Team::One => Team::Zero,
        }
    }

    /// Both teams, `Team::Zero` first.
    pub fn both() -> [Team; 2] {
        [Team::Zero, Team::One]
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.index() + 1)
    }
}

/// Running match score, one entry per team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores([u32; 2]);

impl Scores {
    /// Create scores from raw `[team 0, team 1]` values.
    #[must_use]
    pub const fn new(team_zero: u32, team_one: u32) -> Self {
        Self([team_zero, team_one])
    }

    /// Add points to one team.
    pub fn award(&mut self, team: Team, points: u32) {
        self.0[team.index()] += points;
    }

    /// The team that reached `threshold`, if any.
    #[must_use]
    pub fn leader_at(&self, threshold: u32) -> Option<Team> {
        Team::both().into_iter().find(|&t| self[t] >= threshold)
    }

    /// Raw values as `[team 0, team 1]`.
    #[must_use]
    pub const fn as_array(&self) -> [u32; 2] {
        self.0
    }
}

impl Index<Team> for Scores {
    type Output = u32;

    fn index(&self, team: Team) -> &Self::Output {
        &self.0[team.index()]
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.0[0], self.0[1])
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use truco_engine::core::{Seat, SeatMap};
///
/// let mut tricks: SeatMap<u8> = SeatMap::with_value(0);
/// tricks[Seat::new(1)] += 1;
/// assert_eq!(tricks[Seat::new(1)], 1);
/// assert_eq!(tricks[Seat::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(Seat(i as u8))),
        }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new SeatMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
