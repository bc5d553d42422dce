use log::{debug, info};
use rand::seq::SliceRandom;

use crate::error::MoveError;
use crate::result::DrawOutcome;

use super::Game;

impl Game {
    /// Retires the reveal card face-down to the spent pile.
    fn retire_reveal(&mut self) {
        if let Some(id) = self.stock.reveal.take() {
            self.set_face_up(id, false);
            self.stock.spent.push(id);
        }
    }

    /// Draw step.
    ///
    /// If the draw pile has cards, the reveal card (if any) is retired to the
    /// spent pile and the next card is revealed. Otherwise the reveal card is
    /// retired, the spent pile becomes the draw pile (reshuffled unless the
    /// options say otherwise) and the reveal slot is left empty.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no card in the draw pile, the spent pile
    /// or the reveal slot, or if the recycle limit has been reached.
    pub fn draw(&mut self) -> Result<DrawOutcome, MoveError> {
        let Some(next) = self.stock.draw.pop() else {
            return self.recycle();
        };

        self.retire_reveal();
        self.set_face_up(next, true);
        self.stock.reveal = Some(next);

        debug!("revealed {:?}", next.card());
        self.check_integrity();

        Ok(DrawOutcome::Revealed(next.card()))
    }

    /// Turns the spent pile (and the reveal card) into a new draw pile.
    fn recycle(&mut self) -> Result<DrawOutcome, MoveError> {
        if self.stock.spent.is_empty() && self.stock.reveal.is_none() {
            return Err(MoveError::EmptySource);
        }
        if self
            .options
            .max_recycles
            .is_some_and(|limit| self.recycles >= limit)
        {
            return Err(MoveError::RecycleLimitReached);
        }

        self.retire_reveal();
        let mut pile = core::mem::take(&mut self.stock.spent);
        if self.options.shuffle_on_recycle {
            pile.shuffle(&mut self.rng);
        } else {
            // The first card spent is drawn first, and draws pop the end.
            pile.reverse();
        }
        let cards = pile.len();
        self.stock.draw = pile;
        self.recycles += 1;

        info!("recycled {cards} spent card(s) into the draw pile");
        self.check_integrity();

        Ok(DrawOutcome::Recycled { cards })
    }
}
