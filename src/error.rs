//! Error types for game operations.

use thiserror::Error;

use crate::card::{Card, Suit};

/// Errors returned when a move is rejected.
///
/// A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The destination does not accept the card.
    #[error("this move is not allowed")]
    InvalidMove,
    /// The chosen card cannot be moved from where it lies.
    #[error("only the top card or a face-up run can be moved")]
    NotTopCard,
    /// There is no card to move or draw.
    #[error("there is no card to take from there")]
    EmptySource,
    /// The column or card position does not exist.
    #[error("no such column or card position")]
    OutOfRange,
    /// The spent pile has been recycled as often as the options allow.
    #[error("the draw pile cannot be recycled again")]
    RecycleLimitReached,
}

/// Errors describing a table that breaks the card-integrity rules.
///
/// These indicate a bug in the engine (or a malformed [`Layout`]), never a
/// bad player choice.
///
/// [`Layout`]: crate::Layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// A card is held by more than one pile or twice by the same pile.
    #[error("card {0:?} appears more than once")]
    DuplicateCard(Card),
    /// The table does not hold exactly 52 cards.
    #[error("the table holds {0} cards instead of 52")]
    CardCount(usize),
    /// A foundation is not an ascending single-suit run from the Ace.
    #[error("foundation {0:?} is out of sequence")]
    BrokenFoundation(Suit),
    /// Face-up cards in a column do not form a run.
    #[error("column {0} holds face-up cards that are not a run")]
    BrokenRun(usize),
    /// A card faces the wrong way for the pile it is in.
    #[error("card {0:?} faces the wrong way")]
    FaceState(Card),
    /// The layout does not have seven columns.
    #[error("a table needs 7 columns, got {0}")]
    ColumnCount(usize),
}
