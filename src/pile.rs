//! Tableau column and foundation pile representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, CardId, Rank, Suit};

/// A tableau column.
///
/// Cards are ordered bottom (index 0) to top (last).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    cards: Vec<CardId>,
}

impl Column {
    /// Creates a new empty column.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the cards in the column, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Returns the top card id.
    #[must_use]
    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Returns the top card.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.top().map(CardId::card)
    }

    /// Returns the card id at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<CardId> {
        self.cards.get(position).copied()
    }

    /// Adds a card on top.
    pub fn push(&mut self, id: CardId) {
        self.cards.push(id);
    }

    /// Adds a run on top, keeping its order.
    pub fn extend(&mut self, run: Vec<CardId>) {
        self.cards.extend(run);
    }

    /// Removes and returns the top card.
    pub fn pop(&mut self) -> Option<CardId> {
        self.cards.pop()
    }

    /// Removes and returns the run from `position` to the top.
    ///
    /// Returns an empty run if `position` is past the top.
    pub fn take_run(&mut self, position: usize) -> Vec<CardId> {
        if position >= self.cards.len() {
            return Vec::new();
        }
        self.cards.split_off(position)
    }

    /// Returns the number of cards in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// A foundation pile for one suit, built from Ace up to King.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Foundation {
    suit: Suit,
    cards: Vec<CardId>,
}

impl Foundation {
    /// Creates a new empty foundation for `suit`.
    #[must_use]
    pub const fn new(suit: Suit) -> Self {
        Self {
            suit,
            cards: Vec::new(),
        }
    }

    /// Returns the suit this pile collects.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the cards in the pile, Ace first.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Returns the top card.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.cards.last().copied().map(CardId::card)
    }

    /// Adds a card on top.
    pub fn push(&mut self, id: CardId) {
        self.cards.push(id);
    }

    /// Removes and returns the top card.
    pub fn pop(&mut self) -> Option<CardId> {
        self.cards.pop()
    }

    /// Returns whether the pile holds Ace through King of its suit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == Rank::ALL.len()
            && self
                .cards
                .iter()
                .zip(Rank::ALL.iter().rev())
                .all(|(id, &rank)| id.card() == Card::new(self.suit, rank))
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_run_splits_from_position() {
        let cards = [
            Card::new(Suit::Clubs, Rank::Nine),
            Card::new(Suit::Hearts, Rank::Eight),
            Card::new(Suit::Spades, Rank::Seven),
        ];
        let mut column = Column::new();
        for card in cards {
            column.push(card.id());
        }

        assert!(column.take_run(3).is_empty());
        let run = column.take_run(1);
        assert_eq!(run, [cards[1].id(), cards[2].id()]);
        assert_eq!(column.top_card(), Some(cards[0]));
    }

    #[test]
    fn complete_foundation_runs_ace_to_king() {
        let mut foundation = Foundation::new(Suit::Diamonds);
        for &rank in Rank::ALL.iter().rev() {
            assert!(!foundation.is_complete());
            foundation.push(Card::new(Suit::Diamonds, rank).id());
        }
        assert!(foundation.is_complete());
        assert_eq!(foundation.top_card(), Some(Card::new(Suit::Diamonds, Rank::King)));
    }
}
