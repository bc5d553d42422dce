//! Text rendering of cards and the table.
//!
//! Face-up cards print as rank and suit symbol (`"10♥"`, `"K ♠"`), face-down
//! cards as `"---"`. The [`Snapshot`] renders the whole board: reveal slot,
//! draw pile and foundations on the first line, then the numbered columns
//! side by side.

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank, Suit};
use crate::game::{CardView, Snapshot};

const HIDDEN: &str = "---";
const EMPTY: &str = "   ";

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        };
        write!(f, "{symbol}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::King => "K",
            Self::Queen => "Q",
            Self::Jack => "J",
            Self::Ten => "10",
            Self::Nine => "9",
            Self::Eight => "8",
            Self::Seven => "7",
            Self::Six => "6",
            Self::Five => "5",
            Self::Four => "4",
            Self::Three => "3",
            Self::Two => "2",
            Self::Ace => "A",
        };
        f.write_str(symbol)
    }
}

/// Always three columns wide.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rank == Rank::Ten {
            write!(f, "{}{}", self.rank, self.suit)
        } else {
            write!(f, "{} {}", self.rank, self.suit)
        }
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            fmt::Display::fmt(&self.card, f)
        } else {
            f.write_str(HIDDEN)
        }
    }
}

fn write_slot(f: &mut fmt::Formatter<'_>, card: Option<Card>) -> fmt::Result {
    match card {
        Some(card) => write!(f, "{card}"),
        None => f.write_str(HIDDEN),
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_slot(f, self.reveal)?;
        f.write_str("   ")?;
        if self.is_draw_pile_empty() {
            f.write_str(EMPTY)?;
        } else {
            f.write_str(HIDDEN)?;
        }
        f.write_str("      ")?;
        for (index, (_, top)) in self.foundations.iter().enumerate() {
            if index > 0 {
                f.write_str("   ")?;
            }
            write_slot(f, *top)?;
        }
        writeln!(f)?;

        f.write_str("   ")?;
        for number in 1..=self.columns.len() {
            write!(f, " {number}    ")?;
        }
        writeln!(f)?;

        let height = self.columns.iter().map(Vec::len).max().unwrap_or(0);
        for row in 0..height {
            write!(f, "{:<3}", alloc::format!("{}.", row + 1))?;
            for column in &self.columns {
                match column.get(row) {
                    Some(view) => write!(f, "{view}")?,
                    None => f.write_str(EMPTY)?,
                }
                f.write_str("   ")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::{Game, GameOptions};

    #[test]
    fn cards_render_three_wide() {
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10♥");
        assert_eq!(Card::new(Suit::Spades, Rank::King).to_string(), "K ♠");
        assert_eq!(CardView::down(Card::new(Suit::Clubs, Rank::Ace)).to_string(), "---");
    }

    #[test]
    fn board_shows_one_row_per_card_of_the_tallest_column() {
        let game = Game::new(GameOptions::default(), 3);
        let board = game.snapshot().to_string();
        // header, column numbers, then seven rows
        assert_eq!(board.lines().count(), 9);
        assert!(board.lines().nth(2).is_some_and(|line| line.starts_with("1. ")));
    }
}
