//! The turn state machine
//!
//! A game alternates between the human (Black, moves first) and the engine
//! (White) until a winner is found or the board fills up. The front ends
//! feed human moves in and ask for engine moves; every applied move is
//! followed by the winner scan, and a decided game accepts no further moves.

use crate::board::{Board, MoveError, Pos, Stone};
use crate::engine::{AiEngine, MoveResult};
use crate::rules::{check_winner, winning_run};

/// Whose move the game is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    HumanTurn,
    EngineTurn,
    Finished(Outcome),
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Stone),
    /// The board filled up with no five-in-a-row.
    Draw,
}

/// One game of gobang between the human and the engine.
pub struct Game {
    board: Board,
    phase: Phase,
    last_move: Option<Pos>,
    human_color: Stone,
    engine_color: Stone,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::HumanTurn,
            last_move: None,
            human_color: Stone::Black,
            engine_color: Stone::White,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[must_use]
    pub fn human_color(&self) -> Stone {
        self.human_color
    }

    #[must_use]
    pub fn engine_color(&self) -> Stone {
        self.engine_color
    }

    /// The five cells of the winning line, once the game is won.
    #[must_use]
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        match self.phase {
            Phase::Finished(Outcome::Win(_)) => winning_run(&self.board).map(|(_, line)| line),
            _ => None,
        }
    }

    /// Apply a human move.
    ///
    /// Rejected with [`MoveError::OutOfTurn`] outside the human's turn and
    /// with the validation errors of [`Board::set`] otherwise; any rejection
    /// leaves the board and the phase untouched.
    pub fn play_human(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.phase != Phase::HumanTurn {
            return Err(MoveError::OutOfTurn);
        }
        self.board.set(pos, self.human_color)?;
        self.finish_move(pos, self.human_color);
        Ok(())
    }

    /// Run the engine's turn to completion and apply its move.
    ///
    /// Blocks for the duration of the search. Returns the search statistics;
    /// fails with [`MoveError::OutOfTurn`] outside the engine's turn.
    pub fn play_engine(&mut self, engine: &AiEngine) -> Result<MoveResult, MoveError> {
        if self.phase != Phase::EngineTurn {
            return Err(MoveError::OutOfTurn);
        }
        let result = engine.get_move_with_stats(&self.board);
        if let Some(pos) = result.pos {
            self.apply_engine_move(pos)?;
        }
        Ok(result)
    }

    /// Apply an engine move computed elsewhere.
    ///
    /// The GUI runs the search on a worker thread and feeds the chosen move
    /// back through here. Engine moves are drawn from the empty-cell
    /// candidates, so validation failures indicate a defect in the caller.
    pub fn apply_engine_move(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.phase != Phase::EngineTurn {
            return Err(MoveError::OutOfTurn);
        }
        self.board.set(pos, self.engine_color)?;
        self.finish_move(pos, self.engine_color);
        Ok(())
    }

    /// Post-move bookkeeping: winner scan, draw check, turn hand-off.
    fn finish_move(&mut self, pos: Pos, color: Stone) {
        self.last_move = Some(pos);
        self.phase = if let Some(winner) = check_winner(&self.board) {
            Phase::Finished(Outcome::Win(winner))
        } else if self.board.is_full() {
            Phase::Finished(Outcome::Draw)
        } else if color == self.human_color {
            Phase::EngineTurn
        } else {
            Phase::HumanTurn
        };
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    #[test]
    fn new_game_waits_for_the_human() {
        let game = Game::new();
        assert_eq!(game.phase(), Phase::HumanTurn);
        assert!(game.board().is_board_empty());
        assert_eq!(game.last_move(), None);
        assert_eq!(game.human_color(), Stone::Black);
        assert_eq!(game.engine_color(), Stone::White);
    }

    #[test]
    fn human_move_hands_over_to_the_engine() {
        let mut game = Game::new();
        game.play_human(Pos::new(7, 7)).unwrap();

        assert_eq!(game.phase(), Phase::EngineTurn);
        assert_eq!(game.board().get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(game.last_move(), Some(Pos::new(7, 7)));
    }

    #[test]
    fn occupied_cell_is_rejected_without_state_change() {
        let mut game = Game::new();
        game.play_human(Pos::new(7, 7)).unwrap();
        game.apply_engine_move(Pos::new(8, 8)).unwrap();
        let board_before = game.board().clone();

        let err = game.play_human(Pos::new(7, 7)).unwrap_err();
        assert_eq!(err, MoveError::CellOccupied(Pos::new(7, 7)));
        assert_eq!(game.phase(), Phase::HumanTurn);
        assert_eq!(*game.board(), board_before);
    }

    #[test]
    fn out_of_bounds_is_rejected_without_state_change() {
        let mut game = Game::new();
        let err = game.play_human(Pos::new(15, 2)).unwrap_err();
        assert_eq!(err, MoveError::OutOfBounds(15, 2));
        assert_eq!(game.phase(), Phase::HumanTurn);
        assert!(game.board().is_board_empty());
    }

    #[test]
    fn human_five_finishes_the_game() {
        let mut game = Game::new();
        for i in 0..4u8 {
            game.play_human(Pos::new(7, 5 + i)).unwrap();
            game.apply_engine_move(Pos::new(0, i)).unwrap();
        }
        game.play_human(Pos::new(7, 9)).unwrap();

        assert_eq!(game.phase(), Phase::Finished(Outcome::Win(Stone::Black)));
        assert!(game.winning_line().is_some());
    }

    #[test]
    fn engine_diagonal_five_finishes_the_game() {
        let mut game = Game::new();
        for i in 0..4u8 {
            game.play_human(Pos::new(0, i)).unwrap();
            game.apply_engine_move(Pos::new(3 + i, 3 + i)).unwrap();
        }
        game.play_human(Pos::new(0, 9)).unwrap();
        game.apply_engine_move(Pos::new(7, 7)).unwrap();

        assert_eq!(game.phase(), Phase::Finished(Outcome::Win(Stone::White)));
        let line = game.winning_line().unwrap();
        let expected: Vec<Pos> = (0..5).map(|i| Pos::new(3 + i, 3 + i)).collect();
        assert_eq!(line.to_vec(), expected);
    }

    #[test]
    fn finished_game_accepts_no_further_moves() {
        let mut game = Game::new();
        for i in 0..4u8 {
            game.play_human(Pos::new(7, 5 + i)).unwrap();
            game.apply_engine_move(Pos::new(0, i)).unwrap();
        }
        game.play_human(Pos::new(7, 9)).unwrap();

        assert_eq!(game.play_human(Pos::new(10, 10)), Err(MoveError::OutOfTurn));
        assert_eq!(
            game.apply_engine_move(Pos::new(10, 10)),
            Err(MoveError::OutOfTurn)
        );
    }

    #[test]
    fn engine_turn_rejects_human_input() {
        let mut game = Game::new();
        game.play_human(Pos::new(7, 7)).unwrap();
        assert_eq!(game.play_human(Pos::new(8, 8)), Err(MoveError::OutOfTurn));
    }

    #[test]
    fn play_engine_applies_a_legal_move() {
        let mut game = Game::new();
        game.play_human(Pos::new(7, 7)).unwrap();

        let engine = AiEngine::new(game.engine_color(), 2);
        let result = game.play_engine(&engine).unwrap();

        let pos = result.pos.unwrap();
        assert_eq!(game.board().get(pos), Stone::White);
        assert_eq!(game.phase(), Phase::HumanTurn);
        assert_eq!(game.last_move(), Some(pos));
    }

    #[test]
    fn play_engine_out_of_turn_is_rejected() {
        let mut game = Game::new();
        let engine = AiEngine::new(game.engine_color(), 1);
        assert_eq!(game.play_engine(&engine), Err(MoveError::OutOfTurn));
    }

    #[test]
    fn full_board_without_five_is_a_draw() {
        // Tile the board so neither color ever has five in a row: a cell is
        // Black iff (2*row + col) % 4 < 2. Rows alternate the stripe offset,
        // which caps every straight and diagonal run at two.
        let mut black = Vec::new();
        let mut white = Vec::new();
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                if (2 * row as u32 + col as u32) % 4 < 2 {
                    black.push(Pos::new(row, col));
                } else {
                    white.push(Pos::new(row, col));
                }
            }
        }
        assert_eq!(black.len(), white.len() + 1);

        let mut game = Game::new();
        for i in 0..white.len() {
            game.play_human(black[i]).unwrap();
            assert_eq!(game.phase(), Phase::EngineTurn);
            game.apply_engine_move(white[i]).unwrap();
            assert_eq!(game.phase(), Phase::HumanTurn);
        }
        game.play_human(*black.last().unwrap()).unwrap();

        assert_eq!(game.phase(), Phase::Finished(Outcome::Draw));
        assert_eq!(game.winning_line(), None);
    }
}
