//! A Klondike solitaire engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals the table, validates and
//! performs moves between the tableau, the draw pile and the foundations,
//! and reports when the game is won.
//!
//! # Example
//!
//! ```
//! use klondike::{DrawOutcome, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let drawn = game.draw().unwrap();
//! assert!(matches!(drawn, DrawOutcome::Revealed(_)));
//! assert_eq!(game.draw_pile_len(), 23);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod display;
pub mod error;
pub mod game;
pub mod layout;
pub mod options;
pub mod pile;
pub mod result;
pub mod rules;

// Re-export main types
pub use card::{Card, CardId, Color, DECK_SIZE, Rank, Suit};
pub use error::{IntegrityError, MoveError};
pub use game::{COLUMNS, CardView, Game, GameState, Snapshot};
pub use layout::Layout;
pub use options::GameOptions;
pub use pile::{Column, Foundation};
pub use result::{DrawOutcome, Move, MoveOutcome};
pub use rules::{can_place_on_column, can_place_on_foundation};
