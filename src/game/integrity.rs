use log::error;

use crate::card::{CardId, DECK_SIZE, Rank};
use crate::error::IntegrityError;
use crate::rules::can_stack;

use super::Game;

/// Counts cards while rejecting any seen twice.
struct Tally {
    seen: [bool; DECK_SIZE],
    count: usize,
}

impl Tally {
    const fn new() -> Self {
        Self {
            seen: [false; DECK_SIZE],
            count: 0,
        }
    }

    fn visit(&mut self, id: CardId) -> Result<(), IntegrityError> {
        if self.seen[id.index()] {
            return Err(IntegrityError::DuplicateCard(id.card()));
        }
        self.seen[id.index()] = true;
        self.count += 1;
        Ok(())
    }
}

impl Game {
    /// Checks that the table holds each of the 52 cards exactly once and
    /// that every pile is well formed.
    ///
    /// Columns must be face-down cards under a face-up run with a face-up
    /// top; foundations must climb from the Ace in their own suit; the
    /// reveal card must be face-up and draw and spent cards face-down.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), IntegrityError> {
        let mut tally = Tally::new();

        for (index, column) in self.columns.iter().enumerate() {
            let mut previous: Option<CardId> = None;
            for &id in column.cards() {
                tally.visit(id)?;
                if let Some(below) = previous {
                    match (self.is_up(below), self.is_up(id)) {
                        (true, false) => return Err(IntegrityError::BrokenRun(index)),
                        (true, true) if !can_stack(id.card(), below.card()) => {
                            return Err(IntegrityError::BrokenRun(index));
                        }
                        _ => {}
                    }
                }
                previous = Some(id);
            }
            if let Some(top) = column.top() {
                if !self.is_up(top) {
                    return Err(IntegrityError::FaceState(top.card()));
                }
            }
        }

        for foundation in &self.foundations {
            for (&id, &rank) in foundation.cards().iter().zip(Rank::ALL.iter().rev()) {
                tally.visit(id)?;
                let card = id.card();
                if card.suit != foundation.suit() || card.rank != rank {
                    return Err(IntegrityError::BrokenFoundation(foundation.suit()));
                }
                if !self.is_up(id) {
                    return Err(IntegrityError::FaceState(card));
                }
            }
            if foundation.len() > Rank::ALL.len() {
                return Err(IntegrityError::BrokenFoundation(foundation.suit()));
            }
        }

        for &id in self.stock.draw.iter().chain(&self.stock.spent) {
            tally.visit(id)?;
            if self.is_up(id) {
                return Err(IntegrityError::FaceState(id.card()));
            }
        }

        if let Some(id) = self.stock.reveal {
            tally.visit(id)?;
            if !self.is_up(id) {
                return Err(IntegrityError::FaceState(id.card()));
            }
        }

        if tally.count != DECK_SIZE {
            return Err(IntegrityError::CardCount(tally.count));
        }

        Ok(())
    }

    /// Runs [`Game::validate`] after an accepted move when the options ask
    /// for it.
    ///
    /// A failure here is an engine bug, not a player error.
    pub(super) fn check_integrity(&self) {
        if !self.options.verify_integrity {
            return;
        }
        if let Err(err) = self.validate() {
            error!("card integrity violated: {err}");
            panic!("card integrity violated: {err}");
        }
    }
}
