//! Move legality rules.

use crate::card::{Card, Rank};
use crate::pile::{Column, Foundation};

/// Returns whether `card` may be placed on top of `column`.
///
/// An empty column takes only a King. Otherwise the card must be the next
/// lower rank and the opposite color of the column's top card; nothing goes
/// on an Ace.
#[must_use]
pub fn can_place_on_column(card: Card, column: &Column) -> bool {
    column
        .top_card()
        .map_or(card.rank == Rank::King, |top| can_stack(card, top))
}

/// Returns whether `card` may be placed on top of `foundation`.
///
/// An empty pile takes only the Ace of its suit; after that each card must
/// be the next higher rank of the same suit.
#[must_use]
pub fn can_place_on_foundation(card: Card, foundation: &Foundation) -> bool {
    if card.suit != foundation.suit() {
        return false;
    }
    foundation.top_card().map_or(card.rank == Rank::Ace, |top| {
        top.rank.index().checked_sub(1) == Some(card.rank.index())
    })
}

/// Returns whether `card` may lie directly on `below` in a tableau run.
pub(crate) fn can_stack(card: Card, below: Card) -> bool {
    below.rank != Rank::Ace
        && card.color() != below.color()
        && below.rank.index() + 1 == card.rank.index()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn column_of(cards: &[Card]) -> Column {
        let mut column = Column::new();
        for card in cards {
            column.push(card.id());
        }
        column
    }

    fn foundation_of(suit: Suit, cards: &[Card]) -> Foundation {
        let mut foundation = Foundation::new(suit);
        for card in cards {
            foundation.push(card.id());
        }
        foundation
    }

    #[test]
    fn empty_column_takes_only_kings() {
        let empty = Column::new();
        for card in Card::deck() {
            assert_eq!(can_place_on_column(card, &empty), card.rank == Rank::King);
        }
    }

    #[test]
    fn nothing_goes_on_an_ace() {
        for suit in Suit::ALL {
            let column = column_of(&[Card::new(suit, Rank::Ace)]);
            for card in Card::deck() {
                assert!(!can_place_on_column(card, &column));
            }
        }
    }

    #[test]
    fn column_needs_next_lower_rank_and_opposite_color() {
        let column = column_of(&[Card::new(Suit::Clubs, Rank::Jack)]);
        assert!(can_place_on_column(Card::new(Suit::Hearts, Rank::Ten), &column));
        assert!(can_place_on_column(Card::new(Suit::Diamonds, Rank::Ten), &column));
        assert!(!can_place_on_column(Card::new(Suit::Spades, Rank::Ten), &column));
        assert!(!can_place_on_column(Card::new(Suit::Hearts, Rank::Nine), &column));
        assert!(!can_place_on_column(Card::new(Suit::Hearts, Rank::Queen), &column));

        let column = column_of(&[Card::new(Suit::Hearts, Rank::Two)]);
        assert!(can_place_on_column(Card::new(Suit::Spades, Rank::Ace), &column));
    }

    #[test]
    fn foundation_builds_up_from_ace() {
        let ace = Card::new(Suit::Hearts, Rank::Ace);
        let two = Card::new(Suit::Hearts, Rank::Two);
        let three = Card::new(Suit::Hearts, Rank::Three);

        let empty = Foundation::new(Suit::Hearts);
        assert!(can_place_on_foundation(ace, &empty));
        assert!(!can_place_on_foundation(two, &empty));

        let with_ace = foundation_of(Suit::Hearts, &[ace]);
        assert!(can_place_on_foundation(two, &with_ace));
        assert!(!can_place_on_foundation(three, &with_ace));
        assert!(!can_place_on_foundation(ace, &with_ace));
    }

    #[test]
    fn foundation_rejects_other_suits() {
        let empty = Foundation::new(Suit::Spades);
        assert!(!can_place_on_foundation(Card::new(Suit::Clubs, Rank::Ace), &empty));

        let with_ace = foundation_of(Suit::Spades, &[Card::new(Suit::Spades, Rank::Ace)]);
        assert!(!can_place_on_foundation(Card::new(Suit::Hearts, Rank::Two), &with_ace));
    }

    #[test]
    fn nothing_goes_on_a_king_foundation() {
        let all: alloc::vec::Vec<Card> = Rank::ALL
            .iter()
            .rev()
            .map(|&rank| Card::new(Suit::Clubs, rank))
            .collect();
        let full = foundation_of(Suit::Clubs, &all);
        assert!(full.is_complete());
        for card in Card::deck() {
            assert!(!can_place_on_foundation(card, &full));
        }
    }
}
