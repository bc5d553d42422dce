//! Move outcome types.

use crate::card::{Card, Suit};

/// Result of a draw step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card was turned into the reveal slot.
    Revealed(Card),
    /// The spent pile became the new draw pile and the reveal slot was
    /// cleared.
    Recycled {
        /// Number of cards in the new draw pile.
        cards: usize,
    },
}

/// A move a driver can ask the game to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Move the run starting at `position` of column `from` onto column `to`.
    Run {
        /// Source column.
        from: usize,
        /// Position of the run's first card in the source column.
        position: usize,
        /// Destination column.
        to: usize,
    },
    /// Move the card at `position` (which must be the top) of `column` to
    /// its foundation.
    ColumnToFoundation {
        /// Source column.
        column: usize,
        /// Position of the card in the column.
        position: usize,
    },
    /// Move the reveal card onto column `to`.
    RevealToColumn {
        /// Destination column.
        to: usize,
    },
    /// Move the reveal card to its foundation.
    RevealToFoundation,
    /// Return the top card of a foundation to column `to`.
    FoundationToColumn {
        /// Foundation suit.
        suit: Suit,
        /// Destination column.
        to: usize,
    },
    /// Draw the next card, or recycle the spent pile.
    Draw,
}

/// What an accepted [`Move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Cards were relocated.
    Moved {
        /// Number of cards moved.
        cards: usize,
        /// Card turned face-up in the source column, if any.
        exposed: Option<Card>,
    },
    /// A draw step ran.
    Drew(DrawOutcome),
}
