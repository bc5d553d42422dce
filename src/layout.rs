//! Hand-built table positions.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::game::{COLUMNS, CardView};

/// A table position to start a game from.
///
/// Build one with the `with_*` methods, then pass it to
/// [`Game::from_layout`], which checks that every card is placed exactly
/// once.
///
/// ```
/// use klondike::{Card, Game, GameOptions, Layout, Rank, Suit};
///
/// let layout = Layout::new()
///     .with_column(0, &[], &[Card::new(Suit::Hearts, Rank::Eight)])
///     .with_foundation(Suit::Spades, Rank::Six)
///     .fill_draw_pile();
/// let game = Game::from_layout(layout, GameOptions::default(), 1).unwrap();
/// assert_eq!(game.foundation(Suit::Spades).len(), 6);
/// ```
///
/// [`Game::from_layout`]: crate::Game::from_layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Tableau columns, each ordered bottom to top.
    pub columns: Vec<Vec<CardView>>,
    /// Draw pile, in the order the cards will be revealed.
    pub draw_pile: Vec<Card>,
    /// The card in the reveal slot.
    pub reveal: Option<Card>,
    /// Spent pile, in the order the cards were retired.
    pub spent_pile: Vec<Card>,
    /// Foundation piles, Ace first, indexed by [`Suit::index`].
    pub foundations: [Vec<Card>; 4],
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout {
    /// Creates a layout with seven empty columns and nothing else.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: vec![Vec::new(); COLUMNS],
            draw_pile: Vec::new(),
            reveal: None,
            spent_pile: Vec::new(),
            foundations: Default::default(),
        }
    }

    /// Replaces column `index` with `face_down` cards followed by `face_up`
    /// cards, both listed bottom to top.
    #[must_use]
    pub fn with_column(mut self, index: usize, face_down: &[Card], face_up: &[Card]) -> Self {
        if index >= self.columns.len() {
            self.columns.resize(index + 1, Vec::new());
        }
        self.columns[index] = face_down
            .iter()
            .map(|&card| CardView::down(card))
            .chain(face_up.iter().map(|&card| CardView::up(card)))
            .collect();
        self
    }

    /// Sets the draw pile, in the order the cards will be revealed.
    #[must_use]
    pub fn with_draw_pile(mut self, cards: &[Card]) -> Self {
        self.draw_pile = cards.to_vec();
        self
    }

    /// Sets the reveal card.
    #[must_use]
    pub fn with_reveal(mut self, card: Option<Card>) -> Self {
        self.reveal = card;
        self
    }

    /// Sets the spent pile.
    #[must_use]
    pub fn with_spent_pile(mut self, cards: &[Card]) -> Self {
        self.spent_pile = cards.to_vec();
        self
    }

    /// Fills the foundation for `suit` from the Ace up to `top`.
    #[must_use]
    pub fn with_foundation(mut self, suit: Suit, top: Rank) -> Self {
        self.foundations[suit.index()] = Rank::ALL[top.index()..]
            .iter()
            .rev()
            .map(|&rank| Card::new(suit, rank))
            .collect();
        self
    }

    /// Appends every card not yet placed anywhere to the draw pile.
    #[must_use]
    pub fn fill_draw_pile(mut self) -> Self {
        let mut placed = [false; DECK_SIZE];
        for card in self.cards() {
            placed[card.id().index()] = true;
        }
        let missing: Vec<Card> = Card::deck().filter(|card| !placed[card.id().index()]).collect();
        self.draw_pile.extend(missing);
        self
    }

    /// Iterates over every card placed in the layout.
    fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.columns
            .iter()
            .flatten()
            .map(|view| view.card)
            .chain(self.draw_pile.iter().copied())
            .chain(self.reveal)
            .chain(self.spent_pile.iter().copied())
            .chain(self.foundations.iter().flatten().copied())
    }
}
