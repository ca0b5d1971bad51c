//! Hand state: the single source of truth for one hand of a match.
//!
//! ## HandState
//!
//! Everything the rules need to know:
//! - Hands, remaining deck, vira and manilha rank
//! - Whose turn it is and who dealt
//! - Cards on the table and trick results so far
//! - Team scores carried over from earlier hands
//! - Wager state, hand-over and game-over flags
//! - Action history of the hand
//!
//! Uses `im` persistent vectors so that cloning is O(1): every rules
//! transition takes a `&HandState` and returns a fresh one, leaving the
//! input untouched.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::error::DealError;
use super::player::{Scores, Seat, SeatMap};
use crate::cards::{Card, Deck, Hand, Rank};
use crate::rules::trick::{PlayedCard, TrickResult};
use crate::rules::wager::WagerState;

/// Complete state of the hand in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandState {
    pub(crate) hands: SeatMap<Hand>,
    pub(crate) deck: Deck,
    pub(crate) vira: Card,
    pub(crate) manilha: Rank,
    pub(crate) turn: Seat,
    pub(crate) dealer: Seat,
    pub(crate) table: Vector<PlayedCard>,
    pub(crate) tricks: Vector<TrickResult>,
    pub(crate) scores: Scores,
    pub(crate) wager: WagerState,
    pub(crate) hand_over: bool,
    pub(crate) game_over: bool,
    pub(crate) history: Vector<ActionRecord>,
}

impl HandState {
    /// Start a hand: deal from `deck`, carry `scores` over, first turn to
    /// the seat after `dealer`.
    pub fn deal(scores: Scores, dealer: Seat, deck: Deck) -> Result<Self, DealError> {
        let deal = deck.deal()?;
        let manilha = deal.manilha();
        Ok(Self {
            hands: deal.hands,
            deck: deal.remaining,
            vira: deal.vira,
            manilha,
            turn: dealer.next(),
            dealer,
            table: Vector::new(),
            tricks: Vector::new(),
            scores,
            wager: WagerState::default(),
            hand_over: false,
            game_over: false,
            history: Vector::new(),
        })
    }

    /// Start a hand from hands arranged by the caller.
    ///
    /// Used to set up specific situations (puzzles, tests, replays). The
    /// remaining deck is empty; hands longer than three cards are cut.
    #[must_use]
    pub fn with_hands(scores: Scores, dealer: Seat, vira: Card, hands: [Vec<Card>; 4]) -> Self {
        let hands = SeatMap::new(|seat| {
            hands[seat.index()]
                .iter()
                .copied()
                .take(crate::cards::CARDS_PER_HAND)
                .collect()
        });
        Self {
            hands,
            deck: Deck::default(),
            vira,
            manilha: vira.rank.next(),
            turn: dealer.next(),
            dealer,
            table: Vector::new(),
            tricks: Vector::new(),
            scores,
            wager: WagerState::default(),
            hand_over: false,
            game_over: false,
            history: Vector::new(),
        }
    }

    // === Cards ===

    /// A seat's remaining cards.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat]
    }

    /// Cards not dealt this hand.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The face-up card that fixed the manilha.
    #[must_use]
    pub fn vira(&self) -> Card {
        self.vira
    }

    /// This hand's trump rank.
    #[must_use]
    pub fn manilha(&self) -> Rank {
        self.manilha
    }

    /// Cards played into the current trick, in table order.
    #[must_use]
    pub fn table(&self) -> &Vector<PlayedCard> {
        &self.table
    }

    /// Results of the tricks completed this hand.
    #[must_use]
    pub fn tricks(&self) -> &Vector<TrickResult> {
        &self.tricks
    }

    /// 0-based number of the trick in progress.
    #[must_use]
    pub fn trick_number(&self) -> u8 {
        self.tricks.len() as u8
    }

    // === Turn order ===

    /// Seat whose turn it is to play.
    #[must_use]
    pub fn turn(&self) -> Seat {
        self.turn
    }

    /// Seat that dealt this hand.
    #[must_use]
    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    /// Seat that must act next: the responder while a truco call is
    /// pending, otherwise the seat whose turn it is.
    #[must_use]
    pub fn actor(&self) -> Seat {
        self.wager.responder().unwrap_or(self.turn)
    }

    // === Score and stake ===

    #[must_use]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    #[must_use]
    pub fn wager(&self) -> &WagerState {
        &self.wager
    }

    /// Current value of the hand.
    #[must_use]
    pub fn stake(&self) -> u8 {
        self.wager.stake()
    }

    #[must_use]
    pub fn is_hand_over(&self) -> bool {
        self.hand_over
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    // === History ===

    /// Actions taken this hand, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    pub(crate) fn record(&mut self, seat: Seat, action: super::action::Action) {
        let record = ActionRecord::new(seat, action, self.trick_number(), self.history.len() as u32);
        self.history.push_back(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::core::action::Action;

    #[test]
    fn test_deal_starts_left_of_dealer() {
        let state = HandState::deal(Scores::new(4, 7), Seat::new(3), Deck::standard()).unwrap();

        assert_eq!(state.dealer(), Seat::new(3));
        assert_eq!(state.turn(), Seat::new(0));
        assert_eq!(state.actor(), Seat::new(0));
        assert_eq!(state.scores(), Scores::new(4, 7));
        assert_eq!(state.stake(), 1);
        assert_eq!(state.manilha(), state.vira().rank.next());
        assert!(state.table().is_empty());
        assert!(state.tricks().is_empty());
        assert!(!state.is_hand_over());
        assert!(!state.is_game_over());
        for seat in Seat::all() {
            assert_eq!(state.hand(seat).len(), 3);
        }
        assert_eq!(state.deck().len(), 27);
    }

    #[test]
    fn test_with_hands() {
        let vira = Card::new(Rank::Seven, Suit::Hearts);
        let state = HandState::with_hands(
            Scores::default(),
            Seat::new(0),
            vira,
            [
                vec![Card::new(Rank::Queen, Suit::Clubs)],
                vec![Card::new(Rank::Four, Suit::Spades)],
                vec![Card::new(Rank::Five, Suit::Spades)],
                vec![Card::new(Rank::Six, Suit::Spades)],
            ],
        );

        assert_eq!(state.manilha(), Rank::Queen);
        assert_eq!(state.turn(), Seat::new(1));
        assert_eq!(state.hand(Seat::new(0)), &[Card::new(Rank::Queen, Suit::Clubs)]);
        assert!(state.deck().is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let state = HandState::deal(Scores::default(), Seat::new(0), Deck::standard()).unwrap();
        let mut copy = state.clone();
        copy.record(Seat::new(1), Action::CallTruco);

        assert_eq!(copy.history().len(), 1);
        assert!(state.history().is_empty());
        assert_eq!(copy.history()[0].sequence, 0);
    }
}
