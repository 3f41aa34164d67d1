//! Terminal front end
//!
//! Plays one game over stdin/stdout: the board is printed before every human
//! turn, the human enters moves as `row col`, and the engine's reply is
//! reported together with its thinking time. Rejected input re-prompts
//! without changing the game.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::board::{Board, MoveError, Pos, Stone, BOARD_SIZE};
use crate::engine::AiEngine;
use crate::game::{Game, Outcome, Phase};

/// Run one full game on the terminal.
pub fn run(depth: u8) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut game = Game::new();
    let engine = AiEngine::new(game.engine_color(), depth);

    println!("gobang: you play X (black), the engine plays O (white)");
    println!(
        "enter moves as \"row col\", both in 0-{}",
        BOARD_SIZE - 1
    );

    loop {
        match game.phase() {
            Phase::HumanTurn => {
                print_board(game.board());
                let Some(pos) = prompt_move(&mut input)? else {
                    return Ok(());
                };
                if let Err(err) = game.play_human(pos) {
                    println!("move rejected: {err}");
                }
            }
            Phase::EngineTurn => {
                let result = game.play_engine(&engine)?;
                if let Some(pos) = result.pos {
                    println!(
                        "engine plays ({}, {}) after {:.2}s",
                        pos.row,
                        pos.col,
                        result.time_ms as f64 / 1000.0
                    );
                }
            }
            Phase::Finished(outcome) => {
                print_board(game.board());
                match outcome {
                    Outcome::Win(winner) if winner == game.human_color() => {
                        println!("you win!");
                    }
                    Outcome::Win(_) => println!("the engine wins!"),
                    Outcome::Draw => println!("draw: the board is full"),
                }
                return Ok(());
            }
        }
    }
}

/// Prompt until a well-formed move arrives. `None` on end of input.
fn prompt_move(input: &mut impl BufRead) -> Result<Option<Pos>> {
    loop {
        print!("your move (row col): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match parse_move(line.trim()) {
            Ok(pos) => return Ok(Some(pos)),
            Err(err) => println!("move rejected: {err}"),
        }
    }
}

/// Parse `row col` into a board position.
fn parse_move(line: &str) -> Result<Pos, MoveError> {
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(MoveError::InvalidInput(
            "expected two integers separated by a space".into(),
        ));
    };
    let row: i32 = row
        .parse()
        .map_err(|_| MoveError::InvalidInput(format!("not a number: {row}")))?;
    let col: i32 = col
        .parse()
        .map_err(|_| MoveError::InvalidInput(format!("not a number: {col}")))?;
    Pos::from_signed(row, col).ok_or(MoveError::OutOfBounds(row, col))
}

fn print_board(board: &Board) {
    print!("   ");
    for col in 0..BOARD_SIZE {
        print!("{col:2} ");
    }
    println!();
    for row in 0..BOARD_SIZE {
        print!("{row:2} ");
        for col in 0..BOARD_SIZE {
            let glyph = match board.get(Pos::new(row as u8, col as u8)) {
                Stone::Black => 'X',
                Stone::White => 'O',
                Stone::Empty => '.',
            };
            print!(" {glyph} ");
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_well_formed_move() {
        assert_eq!(parse_move("7 12"), Ok(Pos::new(7, 12)));
        assert_eq!(parse_move("  0   0  "), Ok(Pos::new(0, 0)));
    }

    #[test]
    fn parse_rejects_wrong_arity() {
        assert!(matches!(parse_move(""), Err(MoveError::InvalidInput(_))));
        assert!(matches!(parse_move("7"), Err(MoveError::InvalidInput(_))));
        assert!(matches!(
            parse_move("1 2 3"),
            Err(MoveError::InvalidInput(_))
        ));
    }

    #[test]
    fn parse_rejects_non_numeric_input() {
        assert!(matches!(parse_move("a b"), Err(MoveError::InvalidInput(_))));
        assert!(matches!(
            parse_move("7 seven"),
            Err(MoveError::InvalidInput(_))
        ));
    }

    #[test]
    fn parse_rejects_out_of_range_coordinates() {
        assert_eq!(parse_move("15 0"), Err(MoveError::OutOfBounds(15, 0)));
        assert_eq!(parse_move("3 -1"), Err(MoveError::OutOfBounds(3, -1)));
    }
}
