//! Card strength.

use crate::cards::{Card, Rank};

/// Offset lifting every manilha above every ordinary card.
pub const MANILHA_BASE: u8 = 100;

/// Total-ordered strength of `card` in a hand whose trump rank is `manilha`.
///
/// Ordinary cards score their base rank power (1-10). Manilhas score
/// `100 + suit power`, so they beat every ordinary card and never tie
/// with each other.
///
/// ```
/// use truco_engine::cards::{Card, Rank, Suit};
/// use truco_engine::rules::strength;
///
/// let zap = Card::new(Rank::Four, Suit::Clubs);
/// let three = Card::new(Rank::Three, Suit::Clubs);
/// assert!(strength(zap, Rank::Four) > strength(three, Rank::Four));
/// ```
#[must_use]
pub fn strength(card: Card, manilha: Rank) -> u8 {
    if card.rank == manilha {
        MANILHA_BASE + card.suit.manilha_power()
    } else {
        card.rank.power()
    }
}
