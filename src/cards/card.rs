//! Ranks, suits and cards of the 40-card Truco deck.
//!
//! Ranks are declared weakest to strongest (`4 5 6 7 Q J K A 2 3`), so
//! the derived `Ord` matches the base rank order. Suits carry no order of
//! their own except when breaking ties between manilhas.

use serde::{Deserialize, Serialize};

/// Card rank, weakest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Four,
    Five,
    Six,
    Seven,
    Queen,
    Jack,
    King,
    Ace,
    Two,
    Three,
}

impl Rank {
    /// All ranks, weakest to strongest.
    pub const ALL: [Rank; 10] = [
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Queen,
        Rank::Jack,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
    ];

    /// Position in the base order, 1 (Four) to 10 (Three).
    #[must_use]
    pub const fn power(self) -> u8 {
        self as u8 + 1
    }

    /// The following rank in the cyclic order; Three wraps to Four.
    ///
    /// ```
    /// use truco_engine::cards::Rank;
    ///
    /// assert_eq!(Rank::Seven.next(), Rank::Queen);
    /// assert_eq!(Rank::Three.next(), Rank::Four);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    /// Short symbol used on the card face.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
        }
    }

    /// Parse a face symbol such as `"Q"` or `"7"`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.symbol() == symbol)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit.
///
/// Declared in manilha order: Diamonds (pica-fumo) is the weakest manilha,
/// Clubs (zap) the strongest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Diamonds,
    Spades,
    Hearts,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Spades, Suit::Hearts, Suit::Clubs];

    /// Tie-break power when this suit's card is a manilha, 1 to 4.
    #[must_use]
    pub const fn manilha_power(self) -> u8 {
        self as u8 + 1
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
        };
        f.write_str(s)
    }
}

/// Identity of a card within the 40-card deck.
///
/// Stable across deals: `rank * 4 + suit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

/// A playing card. Immutable once dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// This card's identity in the deck.
    #[must_use]
    pub const fn id(self) -> CardId {
        CardId(self.rank as u8 * 4 + self.suit as u8)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
