//! Heuristic evaluation of board positions
//!
//! Scores a position for one color by classifying 5-cell line windows. For
//! every stone of the color and each of the four directions, the window
//! anchored at that stone is examined when it fits on the board, and its
//! (stone count, empty count) pair selects a weight from the pattern table.
//!
//! Windows anchored at different stones of the same line overlap, and every
//! overlapping window scores independently: a solid five contributes a five
//! window, an open-four window, and so on down the tail. Long runs therefore
//! weigh in super-linearly; the tests below pin that behavior.

use crate::board::{Board, Pos, Stone};

use super::patterns::PatternScore;

/// Direction vectors for line checking (4 directions)
/// Windows extend in the positive direction only; anchoring at every stone
/// covers the negative side.
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Evaluate the board for the given color.
///
/// Returns the sum of matched window weights. The score is one-sided: the
/// opponent's stones only matter by making windows unmatchable. The search
/// engine turns this into a signed leaf value by subtracting the opponent's
/// evaluation.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    let Some(stones) = board.stones(color) else {
        return 0;
    };

    let mut score = 0;
    for pos in stones.iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            score += window_score(board, pos, dr, dc, color);
        }
    }
    score
}

/// Classify the 5-cell window anchored at `start` extending in `(dr, dc)`.
///
/// Returns 0 when the window runs off the board or matches no tier.
/// Classification checks in priority order: five, four with an empty cell,
/// three with exactly two empty cells, two with exactly three empty cells.
fn window_score(board: &Board, start: Pos, dr: i32, dc: i32, color: Stone) -> i32 {
    // The deltas are 0 or +-1, so the window fits iff its far end does.
    if !Pos::is_valid(start.row as i32 + 4 * dr, start.col as i32 + 4 * dc) {
        return 0;
    }

    let mut stones = 0;
    let mut empties = 0;
    for k in 0..5 {
        let r = start.row as i32 + k * dr;
        let c = start.col as i32 + k * dc;
        match board.get(Pos::new(r as u8, c as u8)) {
            s if s == color => stones += 1,
            Stone::Empty => empties += 1,
            _ => {}
        }
    }

    match (stones, empties) {
        (5, _) => PatternScore::FIVE,
        (4, e) if e >= 1 => PatternScore::OPEN_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (2, 3) => PatternScore::OPEN_TWO,
        _ => 0,
    }
}
