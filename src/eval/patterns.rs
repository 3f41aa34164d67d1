//! Pattern weights for position evaluation
//!
//! The fixed weight table for 5-cell line windows. Each tier is an order of
//! magnitude above the previous one, so a single stronger pattern always
//! outweighs any accumulation of weaker ones.

/// Weights per pattern category
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - the game is won
    pub const FIVE: i32 = 1_000_000;
    /// Four stones with room left in the window
    pub const OPEN_FOUR: i32 = 100_000;
    /// Four with a single blocked extension
    pub const HALF_FOUR: i32 = 10_000;
    /// Three stones, two empty cells in the window
    pub const OPEN_THREE: i32 = 1_000;
    /// Three with a single blocked extension
    pub const HALF_THREE: i32 = 100;
    /// Two stones, three empty cells in the window
    pub const OPEN_TWO: i32 = 10;

    // The window classifier only distinguishes open tiers: a window with
    // four stones scores OPEN_FOUR whenever any cell is empty, and a mixed
    // window (own stones plus an opponent stone) matches no tier at all.
    // HALF_FOUR and HALF_THREE keep their slots in the table for tuning,
    // but no classification rule reaches them.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_table_exact_values() {
        assert_eq!(PatternScore::OPEN_TWO, 10);
        assert_eq!(PatternScore::HALF_THREE, 100);
        assert_eq!(PatternScore::OPEN_THREE, 1_000);
        assert_eq!(PatternScore::HALF_FOUR, 10_000);
        assert_eq!(PatternScore::OPEN_FOUR, 100_000);
        assert_eq!(PatternScore::FIVE, 1_000_000);
    }

    #[test]
    fn tiers_are_strictly_ordered() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::HALF_FOUR);
        assert!(PatternScore::HALF_FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::HALF_THREE);
        assert!(PatternScore::HALF_THREE > PatternScore::OPEN_TWO);
    }
}
