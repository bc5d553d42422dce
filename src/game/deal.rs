use alloc::vec::Vec;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::CardId;
use crate::error::IntegrityError;
use crate::layout::Layout;
use crate::options::GameOptions;
use crate::pile::Column;

use super::{COLUMNS, Game};

impl Game {
    /// Deals a shuffled deck onto an empty table.
    ///
    /// Column `i` takes the next `i + 1` cards from the front of the deck,
    /// with only the last one face-up. The rest becomes the draw pile.
    pub(super) fn deal(&mut self, deck: Vec<CardId>) {
        let mut cards = deck.into_iter();

        for (index, column) in self.columns.iter_mut().enumerate() {
            for _ in 0..=index {
                if let Some(id) = cards.next() {
                    column.push(id);
                }
            }
            if let Some(top) = column.top() {
                self.face_up[top.index()] = true;
            }
        }

        // The front of the deck is drawn first, so it goes on the end.
        let mut draw: Vec<CardId> = cards.collect();
        draw.reverse();
        for &id in &draw {
            self.face_up[id.index()] = false;
        }
        self.stock.draw = draw;

        info!(
            "dealt {} columns, {} cards in the draw pile",
            COLUMNS,
            self.stock.draw.len()
        );
    }

    /// Starts a game from a hand-built position.
    ///
    /// Draw and spent pile cards are placed face-down, the reveal card and
    /// foundation cards face-up; column cards keep the face state given in
    /// the layout. `seed` drives later reshuffles.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout does not have seven columns, does not
    /// hold each of the 52 cards exactly once, or breaks a pile's ordering
    /// or face-state rules.
    pub fn from_layout(
        layout: Layout,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, IntegrityError> {
        if layout.columns.len() != COLUMNS {
            return Err(IntegrityError::ColumnCount(layout.columns.len()));
        }

        let mut game = Self::empty(options, ChaCha8Rng::seed_from_u64(seed));

        for (column, views) in game.columns.iter_mut().zip(&layout.columns) {
            *column = Column::new();
            for view in views {
                let id = view.card.id();
                column.push(id);
                game.face_up[id.index()] = view.face_up;
            }
        }

        for (foundation, cards) in game.foundations.iter_mut().zip(&layout.foundations) {
            for card in cards {
                foundation.push(card.id());
                game.face_up[card.id().index()] = true;
            }
        }

        game.stock.draw = layout.draw_pile.iter().rev().map(|&card| card.id()).collect();
        game.stock.spent = layout.spent_pile.iter().map(|&card| card.id()).collect();
        for &id in game.stock.draw.iter().chain(&game.stock.spent) {
            game.face_up[id.index()] = false;
        }
        if let Some(card) = layout.reveal {
            game.stock.reveal = Some(card.id());
            game.face_up[card.id().index()] = true;
        }

        game.validate()?;
        Ok(game)
    }
}
