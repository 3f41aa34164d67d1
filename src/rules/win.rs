//! Win condition checking
//!
//! A color wins as soon as it has five or more consecutive stones along a
//! row, a column, or either diagonal. The scan starts a run at every
//! occupied cell and extends it in the positive direction only; since every
//! stone of a run is tried as a start, runs of any length are found from
//! their head.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check for a winner.
///
/// Returns `Some(color)` for the first color found with a run of five or
/// more, `None` otherwise. Cells are scanned in row-major order, so the
/// result is deterministic. Runs after every applied move and as the search
/// leaf condition.
pub fn check_winner(board: &Board) -> Option<Stone> {
    winning_run(board).map(|(stone, _)| stone)
}

/// Find a winning run, returning the color and the first five cells of the
/// line. The front ends use the cells to highlight the win.
pub fn winning_run(board: &Board) -> Option<(Stone, [Pos; 5])> {
    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            let start = Pos::new(row, col);
            let stone = board.get(start);
            if stone == Stone::Empty {
                continue;
            }

            for &(dr, dc) in &DIRECTIONS {
                if run_length(board, start, dr, dc, stone) >= 5 {
                    let mut line = [start; 5];
                    for (i, cell) in line.iter_mut().enumerate() {
                        let r = row as i32 + dr * i as i32;
                        let c = col as i32 + dc * i as i32;
                        *cell = Pos::new(r as u8, c as u8);
                    }
                    return Some((stone, line));
                }
            }
        }
    }
    None
}

/// Length of the run of `stone` starting at `start` and extending in the
/// positive direction only.
fn run_length(board: &Board, start: Pos, dr: i32, dc: i32, stone: Stone) -> u32 {
    let mut count = 1;
    let mut r = start.row as i32 + dr;
    let mut c = start.col as i32 + dc;
    while let Some(pos) = Pos::from_signed(r, c) {
        if board.get(pos) != stone {
            break;
        }
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_in_row_horizontal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.set(Pos::new(7, i), Stone::Black).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Stone::Black));
    }

    #[test]
    fn five_in_row_vertical() {
        let mut board = Board::new();
        for i in 0..5 {
            board.set(Pos::new(i, 7), Stone::White).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Stone::White));
    }

    #[test]
    fn five_in_row_diagonal_se() {
        let mut board = Board::new();
        for i in 0..5 {
            board.set(Pos::new(3 + i, 3 + i), Stone::Black).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Stone::Black));
    }

    #[test]
    fn five_in_row_diagonal_sw() {
        let mut board = Board::new();
        // From (4, 8) down-left to (8, 4)
        for i in 0..5 {
            board.set(Pos::new(4 + i, 8 - i), Stone::White).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Stone::White));
    }

    #[test]
    fn four_in_row_is_not_a_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.set(Pos::new(7, i), Stone::Black).unwrap();
        }
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn six_in_row_also_wins() {
        let mut board = Board::new();
        for i in 0..6 {
            board.set(Pos::new(7, i), Stone::Black).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Stone::Black));
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn opponent_stone_breaks_the_run() {
        let mut board = Board::new();
        for i in 0..5 {
            board.set(Pos::new(7, i), Stone::Black).unwrap();
        }
        board.clear(Pos::new(7, 2)).unwrap();
        board.set(Pos::new(7, 2), Stone::White).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn five_at_board_edge() {
        let mut board = Board::new();
        for i in 10..15 {
            board.set(Pos::new(14, i), Stone::Black).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Stone::Black));
    }

    #[test]
    fn winning_run_reports_the_line() {
        let mut board = Board::new();
        for i in 0..5 {
            board.set(Pos::new(3 + i, 3 + i), Stone::White).unwrap();
        }

        let (stone, line) = winning_run(&board).unwrap();
        assert_eq!(stone, Stone::White);
        let expected: Vec<Pos> = (0..5).map(|i| Pos::new(3 + i, 3 + i)).collect();
        assert_eq!(line.to_vec(), expected);
    }
}
