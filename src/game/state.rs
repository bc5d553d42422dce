//! Game state and snapshot types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Cards remain outside the foundations.
    InProgress,
    /// Every foundation holds Ace through King.
    Finished,
}

/// A card as it lies on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardView {
    /// The card.
    pub card: Card,
    /// Whether the card is face-up.
    pub face_up: bool,
}

impl CardView {
    /// Creates a face-up view of `card`.
    #[must_use]
    pub const fn up(card: Card) -> Self {
        Self {
            card,
            face_up: true,
        }
    }

    /// Creates a face-down view of `card`.
    #[must_use]
    pub const fn down(card: Card) -> Self {
        Self {
            card,
            face_up: false,
        }
    }
}

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Tableau columns, each ordered bottom to top.
    pub columns: Vec<Vec<CardView>>,
    /// Number of cards left in the draw pile.
    pub draw_pile: usize,
    /// Number of cards in the spent pile.
    pub spent_pile: usize,
    /// The card in the reveal slot.
    pub reveal: Option<Card>,
    /// Top card of each foundation, in [`Suit::ALL`] order.
    pub foundations: [(Suit, Option<Card>); 4],
}

impl Snapshot {
    /// Returns whether the draw pile is empty.
    #[must_use]
    pub const fn is_draw_pile_empty(&self) -> bool {
        self.draw_pile == 0
    }

    /// Returns the top card of the foundation for `suit`.
    #[must_use]
    pub const fn foundation_top(&self, suit: Suit) -> Option<Card> {
        self.foundations[suit.index()].1
    }
}
