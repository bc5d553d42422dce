//! Card types and deck utilities.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits, in foundation order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Spades | Self::Clubs => Color::Black,
            Self::Hearts | Self::Diamonds => Color::Red,
        }
    }
}

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Spades and clubs.
    Black,
}

/// Card rank.
///
/// Variants are declared from King down to Ace. The position of a rank in
/// that order is its *rank index*, which the move rules use as an
/// adjacency table: a card may go onto a tableau card whose index is one
/// lower, and onto a foundation card whose index is one higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// King.
    King,
    /// Queen.
    Queen,
    /// Jack.
    Jack,
    /// Ten.
    Ten,
    /// Nine.
    Nine,
    /// Eight.
    Eight,
    /// Seven.
    Seven,
    /// Six.
    Six,
    /// Five.
    Five,
    /// Four.
    Four,
    /// Three.
    Three,
    /// Two.
    Two,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks, from King down to Ace.
    pub const ALL: [Self; 13] = [
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
        Self::Ace,
    ];

    /// Position of the rank in [`Rank::ALL`] (King = 0, Ace = 12).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Face value of the rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        13 - self as u8
    }

    /// Returns the rank with the given face value, if it is in 1..=13.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self::ALL[(13 - value) as usize])
        } else {
            None
        }
    }
}

/// A playing card.
///
/// Identity is the (rank, suit) pair. Whether a card is face-up is table
/// state and is tracked by the game, not by the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the color of the card.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Returns the card's slot in the game's card store.
    #[must_use]
    pub const fn id(self) -> CardId {
        CardId((self.suit.index() * Rank::ALL.len() + self.rank.index()) as u8)
    }

    /// Iterates over the 52 cards of a standard deck, suit by suit.
    pub fn deck() -> impl Iterator<Item = Self> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Self::new(suit, rank)))
    }
}

/// Index of a card in the game's card store (0..52).
///
/// Every (rank, suit) pair maps to exactly one id, so piles that hold ids
/// can never hold two physical copies of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u8);

impl CardId {
    /// Returns the id at `index`, if it is below [`DECK_SIZE`].
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < DECK_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Returns the raw store index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the card this id refers to.
    #[must_use]
    pub const fn card(self) -> Card {
        let ranks = Rank::ALL.len();
        let index = self.0 as usize;
        Card::new(Suit::ALL[index / ranks], Rank::ALL[index % ranks])
    }
}

impl From<Card> for CardId {
    fn from(card: Card) -> Self {
        card.id()
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
