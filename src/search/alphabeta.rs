//! Depth-limited minimax search with alpha-beta pruning
//!
//! The searcher explores candidate moves depth-first, placing a stone,
//! recursing, and removing it again before trying the next sibling. The
//! board is therefore a single mutable value owned by the in-flight search;
//! strict place/remove pairing guarantees that the board leaves every call
//! exactly as it entered.
//!
//! Layers alternate between the engine (maximizing) and the human
//! (minimizing, lookahead only). A node is a leaf when the remaining depth
//! is zero, when the position is already decided, or when no candidate
//! exists; leaves are valued as the difference of the two colors' pattern
//! evaluations.
//!
//! Depth is fixed per search: no iterative deepening and no time budget.
//! A cancellation flag, checked between sibling evaluations, lets a front
//! end abandon a search it no longer wants; the partial result is then
//! meaningless and should be discarded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;
use crate::rules::check_winner;

use super::movegen::candidate_moves;

/// Infinity for alpha-beta bounds
const INF: i32 = i32::MAX;

/// Outcome of one search call.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Value of the best move
    pub score: i32,
    /// Nodes visited below the root
    pub nodes: u64,
}

/// One-shot searcher for a single engine move.
pub struct Searcher {
    engine_color: Stone,
    human_color: Stone,
    nodes: u64,
    stop: Arc<AtomicBool>,
}

impl Searcher {
    pub fn new(engine_color: Stone) -> Self {
        Self::with_stop(engine_color, Arc::new(AtomicBool::new(false)))
    }

    /// Create a searcher sharing an external cancellation flag.
    pub fn with_stop(engine_color: Stone, stop: Arc<AtomicBool>) -> Self {
        Self {
            engine_color,
            human_color: engine_color.opponent(),
            nodes: 0,
            stop,
        }
    }

    #[inline]
    fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Pick the engine's move by searching `depth` plies.
    ///
    /// The root is a maximizing pass over the candidates in their canonical
    /// row-major order; the first candidate with the strictly greatest value
    /// wins ties. On return the board is exactly as it was on entry; the
    /// caller applies the chosen move.
    pub fn select_move(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        let mut best_move = None;
        let mut best_score = 0;
        let mut alpha = -INF;
        let beta = INF;

        for mov in candidate_moves(board) {
            if self.is_stopped() {
                break;
            }

            board.place(mov, self.engine_color);
            let value = self.alpha_beta(board, depth.saturating_sub(1), alpha, beta, false);
            board.remove(mov);

            if best_move.is_none() || value > best_score {
                best_score = value;
                best_move = Some(mov);
            }
            alpha = alpha.max(value);
        }

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }

    /// Recursive minimax step.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || check_winner(board).is_some() {
            return self.leaf_value(board);
        }

        let moves = candidate_moves(board);
        if moves.is_empty() {
            // Full board: value the position as it stands.
            return self.leaf_value(board);
        }

        if maximizing {
            let mut best = -INF;
            for mov in moves {
                if self.is_stopped() {
                    break;
                }
                board.place(mov, self.engine_color);
                let value = self.alpha_beta(board, depth - 1, alpha, beta, false);
                board.remove(mov);

                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for mov in moves {
                if self.is_stopped() {
                    break;
                }
                board.place(mov, self.human_color);
                let value = self.alpha_beta(board, depth - 1, alpha, beta, true);
                board.remove(mov);

                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Leaf value: the engine's evaluation minus the human's.
    fn leaf_value(&self, board: &Board) -> i32 {
        evaluate(board, self.engine_color) - evaluate(board, self.human_color)
    }
}
