//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, CardId, DECK_SIZE, Suit};
use crate::options::GameOptions;
use crate::pile::{Column, Foundation};

mod deal;
mod integrity;
mod moves;
pub mod state;
mod stock;

pub use state::{CardView, GameState, Snapshot};

/// Number of tableau columns.
pub const COLUMNS: usize = 7;

/// The cards not yet played to the tableau or the foundations.
#[derive(Debug, Clone, Default)]
struct Stock {
    /// Draw pile; the next card to reveal is last.
    draw: Vec<CardId>,
    /// Reveal slot.
    reveal: Option<CardId>,
    /// Spent pile, in the order cards were retired.
    spent: Vec<CardId>,
}

/// A Klondike solitaire game.
///
/// The game owns every pile and the face-up state of all 52 cards. Piles
/// hold [`CardId`]s, so each card exists in exactly one place. Use
/// [`GameOptions`] to configure the recycle rules.
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Face-up flag per card, indexed by [`CardId`].
    face_up: [bool; DECK_SIZE],
    /// Tableau columns.
    columns: [Column; COLUMNS],
    /// Foundations, indexed by [`Suit::index`].
    foundations: [Foundation; 4],
    /// Draw pile, reveal slot and spent pile.
    stock: Stock,
    /// Times the spent pile has been turned into the draw pile.
    recycles: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Deals a new game shuffled with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use klondike::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.draw_pile_len(), 24);
    /// assert!(!game.is_finished());
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::from_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Deals a new game using `rng` for this and every later shuffle.
    #[must_use]
    pub fn from_rng(options: GameOptions, mut rng: ChaCha8Rng) -> Self {
        let deck = Self::create_deck(&mut rng);
        let mut game = Self::empty(options, rng);
        game.deal(deck);
        game
    }

    /// Creates a table with no cards on it.
    fn empty(options: GameOptions, rng: ChaCha8Rng) -> Self {
        Self {
            options,
            face_up: [false; DECK_SIZE],
            columns: core::array::from_fn(|_| Column::new()),
            foundations: Suit::ALL.map(Foundation::new),
            stock: Stock::default(),
            recycles: 0,
            rng,
        }
    }

    /// Creates and shuffles a full deck.
    fn create_deck(rng: &mut ChaCha8Rng) -> Vec<CardId> {
        let mut cards: Vec<CardId> = Card::deck().map(Card::id).collect();
        cards.shuffle(rng);
        cards
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the tableau columns.
    #[must_use]
    pub const fn columns(&self) -> &[Column; COLUMNS] {
        &self.columns
    }

    /// Returns the foundation for `suit`.
    #[must_use]
    pub const fn foundation(&self, suit: Suit) -> &Foundation {
        &self.foundations[suit.index()]
    }

    /// Returns the card in the reveal slot.
    #[must_use]
    pub fn reveal(&self) -> Option<Card> {
        self.stock.reveal.map(CardId::card)
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.stock.draw.len()
    }

    /// Returns the number of cards in the spent pile.
    #[must_use]
    pub fn spent_pile_len(&self) -> usize {
        self.stock.spent.len()
    }

    /// Returns how many times the spent pile has been recycled.
    #[must_use]
    pub const fn recycles(&self) -> u32 {
        self.recycles
    }

    /// Returns whether `card` is face-up.
    #[must_use]
    pub const fn is_face_up(&self, card: Card) -> bool {
        self.face_up[card.id().index()]
    }

    fn is_up(&self, id: CardId) -> bool {
        self.face_up[id.index()]
    }

    fn set_face_up(&mut self, id: CardId, face_up: bool) {
        self.face_up[id.index()] = face_up;
    }

    fn view(&self, id: CardId) -> CardView {
        CardView {
            card: id.card(),
            face_up: self.is_up(id),
        }
    }

    /// Returns a read-only copy of the table for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            columns: self
                .columns
                .iter()
                .map(|column| column.cards().iter().map(|&id| self.view(id)).collect())
                .collect(),
            draw_pile: self.stock.draw.len(),
            spent_pile: self.stock.spent.len(),
            reveal: self.reveal(),
            foundations: Suit::ALL.map(|suit| (suit, self.foundation(suit).top_card())),
        }
    }

    /// Returns whether every foundation holds Ace through King.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.foundations.iter().all(Foundation::is_complete)
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.is_finished() {
            GameState::Finished
        } else {
            GameState::InProgress
        }
    }
}
