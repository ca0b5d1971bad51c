//! Who sits where, and who decides for each seat.

use serde::{Deserialize, Serialize};

use crate::core::{Seat, SeatMap};

/// Who makes the decisions for a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// Commands arrive through the table's human command methods.
    Human,
    /// Decisions are requested from an action provider.
    Automated,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatInfo {
    pub name: String,
    pub controller: Controller,
}

impl SeatInfo {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Human,
        }
    }

    pub fn automated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Automated,
        }
    }
}

/// The four seats of a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    seats: SeatMap<SeatInfo>,
}

impl Roster {
    pub fn new(seats: [SeatInfo; 4]) -> Self {
        Self {
            seats: SeatMap::new(|seat| seats[seat.index()].clone()),
        }
    }

    /// Every seat automated.
    #[must_use]
    pub fn automated() -> Self {
        Self {
            seats: SeatMap::new(|seat| SeatInfo::automated(format!("Bot {}", seat.index()))),
        }
    }

    /// The given names in seat order; seats without a name are filled
    /// with automated players.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = (S, Controller)>,
        S: Into<String>,
    {
        let mut roster = Self::automated();
        for (seat, (name, controller)) in Seat::all().zip(names) {
            roster.seats[seat] = SeatInfo {
                name: name.into(),
                controller,
            };
        }
        roster
    }

    #[must_use]
    pub fn seat(&self, seat: Seat) -> &SeatInfo {
        &self.seats[seat]
    }

    #[must_use]
    pub fn name(&self, seat: Seat) -> &str {
        &self.seats[seat].name
    }

    #[must_use]
    pub fn controller(&self, seat: Seat) -> Controller {
        self.seats[seat].controller
    }

    #[must_use]
    pub fn is_human(&self, seat: Seat) -> bool {
        self.controller(seat) == Controller::Human
    }

    pub fn iter(&self) -> impl Iterator<Item = (Seat, &SeatInfo)> {
        self.seats.iter()
    }
}

impl Default for Roster {
    /// Seat 0 is the human player; the rest are automated.
    fn default() -> Self {
        Self::new([
            SeatInfo::human("You"),
            SeatInfo::automated("Bot 1"),
            SeatInfo::automated("Partner"),
            SeatInfo::automated("Bot 3"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let roster = Roster::default();
        assert!(roster.is_human(Seat::new(0)));
        assert_eq!(roster.name(Seat::new(0)), "You");
        for seat in Seat::all().skip(1) {
            assert_eq!(roster.controller(seat), Controller::Automated);
        }
        assert_eq!(roster.name(Seat::new(2)), "Partner");
    }

    #[test]
    fn test_from_names_fills_empty_seats() {
        let roster = Roster::from_names([("Ana", Controller::Human), ("Rui", Controller::Human)]);
        assert_eq!(roster.name(Seat::new(1)), "Rui");
        assert!(roster.is_human(Seat::new(1)));
        assert_eq!(roster.name(Seat::new(3)), "Bot 3");
        assert!(!roster.is_human(Seat::new(3)));
        assert_eq!(roster.iter().count(), 4);
    }
}
