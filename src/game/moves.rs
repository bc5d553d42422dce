use log::{debug, info};

use crate::card::{Card, Suit};
use crate::error::MoveError;
use crate::pile::Column;
use crate::result::{Move, MoveOutcome};
use crate::rules::{can_place_on_column, can_place_on_foundation};

use super::Game;

impl Game {
    fn column(&self, index: usize) -> Result<&Column, MoveError> {
        self.columns.get(index).ok_or(MoveError::OutOfRange)
    }

    /// Turns the new top card of column `index` face-up.
    ///
    /// Returns the card if it was face-down before.
    fn expose_top(&mut self, index: usize) -> Option<Card> {
        let top = self.columns[index].top()?;
        if self.is_up(top) {
            return None;
        }
        self.set_face_up(top, true);
        Some(top.card())
    }

    fn finish_move(&self) {
        self.check_integrity();
        if self.is_finished() {
            info!("all foundations complete");
        }
    }

    /// Moves the run starting at `position` in column `from` onto column
    /// `to`.
    ///
    /// The whole run from `position` to the top moves as a unit, keeping its
    /// order. Only the run's first card is checked against the destination.
    /// The source column's new top card is turned face-up.
    ///
    /// # Errors
    ///
    /// Returns an error if a column or the position does not exist, the
    /// source column is empty, the card at `position` is face-down, or the
    /// destination does not accept the run.
    pub fn move_run(
        &mut self,
        from: usize,
        position: usize,
        to: usize,
    ) -> Result<MoveOutcome, MoveError> {
        let source = self.column(from)?;
        let destination = self.column(to)?;
        if source.is_empty() {
            return Err(MoveError::EmptySource);
        }
        let first = source.get(position).ok_or(MoveError::OutOfRange)?;
        if !self.is_up(first) {
            return Err(MoveError::NotTopCard);
        }
        if from == to || !can_place_on_column(first.card(), destination) {
            return Err(MoveError::InvalidMove);
        }

        let run = self.columns[from].take_run(position);
        let cards = run.len();
        self.columns[to].extend(run);
        let exposed = self.expose_top(from);

        debug!("moved {cards} card(s) from column {from} to column {to}");
        self.finish_move();

        Ok(MoveOutcome::Moved { cards, exposed })
    }

    /// Moves the card at `position` in `column` to the foundation of its
    /// suit. The card must be the column's top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the column or position does not exist, the column
    /// is empty, the card is not the top card, or the foundation does not
    /// accept it.
    pub fn move_to_foundation(
        &mut self,
        column: usize,
        position: usize,
    ) -> Result<MoveOutcome, MoveError> {
        let source = self.column(column)?;
        let top = source.top().ok_or(MoveError::EmptySource)?;
        if position >= source.len() {
            return Err(MoveError::OutOfRange);
        }
        if position + 1 != source.len() {
            return Err(MoveError::NotTopCard);
        }
        let card = top.card();
        if !can_place_on_foundation(card, self.foundation(card.suit)) {
            return Err(MoveError::InvalidMove);
        }

        self.columns[column].pop();
        self.foundations[card.suit.index()].push(top);
        let exposed = self.expose_top(column);

        debug!("moved {card:?} from column {column} to its foundation");
        self.finish_move();

        Ok(MoveOutcome::Moved { cards: 1, exposed })
    }

    /// Moves the reveal card onto column `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the column does not exist, the reveal slot is
    /// empty, or the column does not accept the card.
    pub fn move_reveal_to_column(&mut self, to: usize) -> Result<MoveOutcome, MoveError> {
        let destination = self.column(to)?;
        let id = self.stock.reveal.ok_or(MoveError::EmptySource)?;
        if !can_place_on_column(id.card(), destination) {
            return Err(MoveError::InvalidMove);
        }

        self.stock.reveal = None;
        self.columns[to].push(id);

        debug!("moved reveal card {:?} to column {to}", id.card());
        self.finish_move();

        Ok(MoveOutcome::Moved {
            cards: 1,
            exposed: None,
        })
    }

    /// Moves the reveal card to the foundation of its suit.
    ///
    /// # Errors
    ///
    /// Returns an error if the reveal slot is empty or the foundation does
    /// not accept the card.
    pub fn move_reveal_to_foundation(&mut self) -> Result<MoveOutcome, MoveError> {
        let id = self.stock.reveal.ok_or(MoveError::EmptySource)?;
        let card = id.card();
        if !can_place_on_foundation(card, self.foundation(card.suit)) {
            return Err(MoveError::InvalidMove);
        }

        self.stock.reveal = None;
        self.foundations[card.suit.index()].push(id);

        debug!("moved reveal card {card:?} to its foundation");
        self.finish_move();

        Ok(MoveOutcome::Moved {
            cards: 1,
            exposed: None,
        })
    }

    /// Returns the top card of the `suit` foundation to column `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the column does not exist, the foundation is
    /// empty, or the column does not accept the card.
    pub fn move_foundation_to_column(
        &mut self,
        suit: Suit,
        to: usize,
    ) -> Result<MoveOutcome, MoveError> {
        let destination = self.column(to)?;
        let card = self
            .foundation(suit)
            .top_card()
            .ok_or(MoveError::EmptySource)?;
        if !can_place_on_column(card, destination) {
            return Err(MoveError::InvalidMove);
        }

        if let Some(id) = self.foundations[suit.index()].pop() {
            self.columns[to].push(id);
        }

        debug!("returned {card:?} from its foundation to column {to}");
        self.finish_move();

        Ok(MoveOutcome::Moved {
            cards: 1,
            exposed: None,
        })
    }

    /// Performs `mv`.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying move operation.
    pub fn apply(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        match mv {
            Move::Run { from, position, to } => self.move_run(from, position, to),
            Move::ColumnToFoundation { column, position } => {
                self.move_to_foundation(column, position)
            }
            Move::RevealToColumn { to } => self.move_reveal_to_column(to),
            Move::RevealToFoundation => self.move_reveal_to_foundation(),
            Move::FoundationToColumn { suit, to } => self.move_foundation_to_column(suit, to),
            Move::Draw => self.draw().map(MoveOutcome::Drew),
        }
    }
}
