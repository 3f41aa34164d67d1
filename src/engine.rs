//! Engine front door: one search per call, with timing and diagnostics
//!
//! [`AiEngine`] holds the fixed configuration (color, search depth) and a
//! cancellation flag. Each [`AiEngine::get_move_with_stats`] call clones the
//! caller's board, runs a single fixed-depth search, and reports the chosen
//! move together with the node count and elapsed time. The call blocks until
//! the search finishes; front ends that must stay responsive run it on a
//! worker thread and may cancel via [`AiEngine::cancel`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::board::{Board, Pos, Stone};
use crate::search::Searcher;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 2;

/// One selected move with search statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move; `None` only when the board was full or the search was
    /// cancelled before visiting a candidate
    pub pos: Option<Pos>,
    /// Search value of the chosen move
    pub score: i32,
    /// Nodes visited
    pub nodes: u64,
    /// Wall-clock search time in milliseconds
    pub time_ms: u64,
}

/// The automated player.
pub struct AiEngine {
    color: Stone,
    depth: u8,
    stop: Arc<AtomicBool>,
}

impl AiEngine {
    /// Create an engine playing `color` that searches `depth` plies.
    #[must_use]
    pub fn new(color: Stone, depth: u8) -> Self {
        Self {
            color,
            depth,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub fn color(&self) -> Stone {
        self.color
    }

    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Ask an in-flight search to stop at the next sibling boundary.
    /// The result of a cancelled search must be discarded.
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Get the best move for the current position.
    #[must_use]
    pub fn get_move(&self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).pos
    }

    /// Get the best move along with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board) -> MoveResult {
        let start = Instant::now();
        self.stop.store(false, Ordering::Relaxed);

        let mut work_board = board.clone();
        let mut searcher = Searcher::with_stop(self.color, Arc::clone(&self.stop));
        let result = searcher.select_move(&mut work_board, self.depth);

        let time_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            score = result.score,
            nodes = result.nodes,
            elapsed_ms = time_ms,
            "search finished"
        );

        MoveResult {
            pos: result.best_move,
            score: result.score,
            nodes: result.nodes,
            time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_accessors() {
        let engine = AiEngine::new(Stone::White, 3);
        assert_eq!(engine.color(), Stone::White);
        assert_eq!(engine.depth(), 3);
    }

    #[test]
    fn first_move_on_empty_board_is_origin() {
        let board = Board::new();
        let engine = AiEngine::new(Stone::White, 1);
        assert_eq!(engine.get_move(&board), Some(Pos::new(0, 0)));
    }

    #[test]
    fn caller_board_is_untouched() {
        let mut board = Board::new();
        board.set(Pos::new(7, 7), Stone::Black).unwrap();
        let snapshot = board.clone();

        let engine = AiEngine::new(Stone::White, 2);
        let result = engine.get_move_with_stats(&board);

        assert!(result.pos.is_some());
        assert_eq!(board, snapshot);
    }

    #[test]
    fn repeated_calls_agree() {
        let mut board = Board::new();
        board.set(Pos::new(7, 7), Stone::Black).unwrap();
        board.set(Pos::new(8, 8), Stone::White).unwrap();

        let engine = AiEngine::new(Stone::White, 2);
        let first = engine.get_move_with_stats(&board);
        let second = engine.get_move_with_stats(&board);

        assert_eq!(first.pos, second.pos);
        assert_eq!(first.score, second.score);
        assert_eq!(first.nodes, second.nodes);
    }

    #[test]
    fn takes_the_winning_completion() {
        let mut board = Board::new();
        for i in 5..9 {
            board.set(Pos::new(7, i), Stone::White).unwrap();
        }
        board.set(Pos::new(9, 9), Stone::Black).unwrap();

        let engine = AiEngine::new(Stone::White, 2);
        assert_eq!(engine.get_move(&board), Some(Pos::new(7, 4)));
    }
}
