//! CLI Klondike example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use klondike::{DrawOutcome, Game, GameOptions, Move, MoveOutcome, Suit};

fn main() {
    println!("Klondike CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        println!("\n{}", game.snapshot());

        let draw_label = if game.draw_pile_len() == 0 {
            "recycle the spent pile"
        } else {
            "draw a card"
        };
        println!("[s] move from a column  [t] move the revealed card");
        println!("[n] {draw_label}  [k] take back from a foundation  [q] quit");

        let mv = match prompt_line("Move: ").as_str() {
            "s" => prompt_column_move(&game),
            "t" => prompt_reveal_move(),
            "n" => Some(Move::Draw),
            "k" => prompt_foundation_move(),
            "q" | "quit" => {
                println!("Goodbye.");
                return;
            }
            _ => {
                println!("Unknown move.");
                continue;
            }
        };

        let Some(mv) = mv else {
            println!("Invalid choice.");
            continue;
        };

        match game.apply(mv) {
            Ok(MoveOutcome::Moved {
                exposed: Some(card),
                ..
            }) => println!("Turned over {card}."),
            Ok(MoveOutcome::Drew(DrawOutcome::Recycled { cards })) => {
                println!("Recycled {cards} card(s) into the draw pile.");
            }
            Ok(_) => {}
            Err(err) => println!("{err}."),
        }

        if game.is_finished() {
            println!("\n{}", game.snapshot());
            println!("All foundations complete. You win!");
            return;
        }
    }
}

fn prompt_column_move(game: &Game) -> Option<Move> {
    let from = prompt_index("Column (1-7): ")?;
    let column = game.columns().get(from)?;
    let snapshot = game.snapshot();
    for (position, view) in snapshot.columns.get(from)?.iter().enumerate() {
        if view.face_up {
            println!("{}. {view}", position + 1);
        }
    }
    let position = if column.len() <= 1 {
        0
    } else {
        prompt_index("Card: ")?
    };

    match prompt_line("Move to [s] column or [k] foundation: ").as_str() {
        "s" => {
            let to = prompt_index("Destination column (1-7): ")?;
            Some(Move::Run { from, position, to })
        }
        "k" => Some(Move::ColumnToFoundation {
            column: from,
            position,
        }),
        _ => None,
    }
}

fn prompt_reveal_move() -> Option<Move> {
    match prompt_line("Move to [s] column or [k] foundation: ").as_str() {
        "s" => {
            let to = prompt_index("Destination column (1-7): ")?;
            Some(Move::RevealToColumn { to })
        }
        "k" => Some(Move::RevealToFoundation),
        _ => None,
    }
}

fn prompt_foundation_move() -> Option<Move> {
    let suit = match prompt_line("Foundation [s]pades [h]earts [d]iamonds [c]lubs: ").as_str() {
        "s" => Suit::Spades,
        "h" => Suit::Hearts,
        "d" => Suit::Diamonds,
        "c" => Suit::Clubs,
        _ => return None,
    };
    let to = prompt_index("Destination column (1-7): ")?;
    Some(Move::FoundationToColumn { suit, to })
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Reads a 1-based number and returns it 0-based.
fn prompt_index(prompt: &str) -> Option<usize> {
    prompt_line(prompt)
        .parse::<usize>()
        .ok()
        .and_then(|value| value.checked_sub(1))
}
