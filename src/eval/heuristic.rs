//! Heuristic evaluation function for Gomoku board positions
//!
//! The score measures one player's offensive potential. For every empty
//! cell the evaluator pretends the player stands there and scores every
//! 5-cell window through that cell on each axis. Overlapping windows are
//! summed on purpose: a cell that sits inside many strong windows
//! collects a large share of the total, which is what pulls the search
//! toward well-connected moves.
//!
//! The function is pure. The search calls it twice per candidate, so it
//! dominates search time.

use crate::board::{Board, Pos, Stone};
use crate::rules::DIRECTIONS;

use super::patterns::{score_window, WINDOW_LEN};

/// Cells on each side of the hypothetical stone
const REACH: i32 = (WINDOW_LEN - 1) as i32;

/// Cells in an axis line: both half-lines plus the center
const LINE_LEN: usize = 2 * WINDOW_LEN - 1;

/// Evaluate the board from the perspective of the given color.
///
/// Opponent stones only matter in that they block windows. Returns 0 for
/// a full board and for `Stone::Empty`.
///
/// # Example
///
/// ```
/// use gomoku::board::{Board, Pos, Stone};
/// use gomoku::eval::evaluate;
///
/// let mut board = Board::new(15);
/// let before = evaluate(&board, Stone::Black);
/// board.place_stone(Pos::new(7, 7), Stone::Black);
/// assert!(evaluate(&board, Stone::Black) > before);
/// ```
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i64 {
    if !color.is_player() {
        return 0;
    }
    board
        .empty_cells()
        .map(|pos| evaluate_cell(board, pos, color))
        .sum()
}

/// Score every window through `pos` on all four axes, as if `color`
/// played there.
#[must_use]
pub fn evaluate_cell(board: &Board, pos: Pos, color: Stone) -> i64 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| {
            let line = axis_line(board, pos, dr, dc, color);
            line.windows(WINDOW_LEN)
                .map(|window| score_window(window, color))
                .sum::<i64>()
        })
        .sum()
}

/// Build the 9-cell line through `pos` along `(dr, dc)`: four cells on
/// the negative side (farthest first), the hypothetical `color` stone,
/// then four cells on the positive side. Off-board cells are `None`.
fn axis_line(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> [Option<Stone>; LINE_LEN] {
    let mut line = [None; LINE_LEN];
    for (slot, offset) in line.iter_mut().zip(-REACH..=REACH) {
        *slot = if offset == 0 {
            Some(color)
        } else {
            let (r, c) = pos.step(dr, dc, offset);
            board.stone_at(r, c)
        };
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    #[test]
    fn test_center_cell_of_empty_board() {
        let board = Board::new(15);
        // 5 windows per axis, each a live one
        assert_eq!(
            evaluate_cell(&board, Pos::new(7, 7), Stone::Black),
            4 * 5 * PatternScore::LIVE_ONE
        );
    }

    #[test]
    fn test_corner_cell_of_empty_board() {
        let board = Board::new(15);
        // One on-board window on three axes, none on the anti-diagonal
        assert_eq!(
            evaluate_cell(&board, Pos::new(0, 0), Stone::White),
            3 * PatternScore::LIVE_ONE
        );
    }

    #[test]
    fn test_cell_completing_five() {
        let mut board = Board::new(5);
        for c in 0..4 {
            board.place_stone(Pos::new(0, c), Stone::Black);
        }
        // Horizontal five plus a live one down the column and the anti-diagonal
        assert_eq!(
            evaluate_cell(&board, Pos::new(0, 4), Stone::Black),
            PatternScore::FIVE + 2 * PatternScore::LIVE_ONE
        );
        // Same cell for White: every horizontal window holds black stones
        assert_eq!(
            evaluate_cell(&board, Pos::new(0, 4), Stone::White),
            2 * PatternScore::LIVE_ONE
        );
    }

    #[test]
    fn test_axis_line_sentinels() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(0, 1), Stone::White);
        let line = axis_line(&board, Pos::new(0, 0), 0, 1, Stone::Black);
        assert_eq!(&line[..4], &[None; 4]);
        assert_eq!(line[4], Some(Stone::Black));
        assert_eq!(line[5], Some(Stone::White));
        assert_eq!(line[8], Some(Stone::Empty));
    }

    #[test]
    fn test_empty_board_is_symmetric() {
        let board = Board::new(15);
        let black = evaluate(&board, Stone::Black);
        assert!(black > 0);
        assert_eq!(black, evaluate(&board, Stone::White));
    }

    #[test]
    fn test_evaluate_idempotent() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::White);
        board.place_stone(Pos::new(8, 8), Stone::Black);
        let first = evaluate(&board, Stone::Black);
        assert_eq!(first, evaluate(&board, Stone::Black));
    }

    #[test]
    fn test_own_stone_helps_opponent_stone_hurts() {
        let empty = Board::new(15);
        let base = evaluate(&empty, Stone::Black);

        let mut own = empty.clone();
        own.place_stone(Pos::new(7, 7), Stone::Black);
        assert!(evaluate(&own, Stone::Black) > base);

        let mut theirs = empty.clone();
        theirs.place_stone(Pos::new(7, 7), Stone::White);
        assert!(evaluate(&theirs, Stone::Black) < base);
    }

    #[test]
    fn test_full_board_scores_zero() {
        let mut board = Board::new(3);
        for r in 0..3 {
            for c in 0..3 {
                board.place_stone(Pos::new(r, c), Stone::Black);
            }
        }
        assert_eq!(evaluate(&board, Stone::Black), 0);
    }

    #[test]
    fn test_empty_color_scores_zero() {
        let board = Board::new(15);
        assert_eq!(evaluate(&board, Stone::Empty), 0);
    }
}
