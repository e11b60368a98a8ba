//! Win condition checking
//!
//! A game is won by five or more stones of one color in a row along any
//! of the four axes. Overlines count as wins.
//!
//! Detection is incremental: [`check_win`] only looks at the lines through
//! the most recently placed stone, so it must be called after every
//! placement rather than on arbitrary cells.

use crate::board::{Board, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 axes)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count contiguous `color` stones starting one step away from `pos`
/// along `(dr, dc)`. Stops at the first other cell or the board edge.
fn count_direction(board: &Board, pos: Pos, color: Stone, dr: i32, dc: i32) -> usize {
    let mut count = 0;
    let mut step = 1;
    loop {
        let (r, c) = pos.step(dr, dc, step);
        if board.stone_at(r, c) != Some(color) {
            return count;
        }
        count += 1;
        step += 1;
    }
}

/// Length of the run through `pos` along one axis, counting the stone
/// at `pos` itself. Returns 0 when `pos` is empty.
pub fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32) -> usize {
    let color = board.get(pos);
    if color == Stone::Empty {
        return 0;
    }
    1 + count_direction(board, pos, color, dr, dc) + count_direction(board, pos, color, -dr, -dc)
}

/// Check whether the stone just placed at `pos` completes five in a row.
///
/// Only checks the 4 axes through `pos`. No allocation.
#[inline]
pub fn check_win(board: &Board, pos: Pos) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| run_length(board, pos, dr, dc) >= WIN_LENGTH)
}

/// Find the complete winning run through `pos`, if any.
///
/// Positions are ordered from the negative end of the axis to the
/// positive end. An overline returns every stone in the run.
pub fn winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = count_direction(board, pos, color, -dr, -dc) as i32;
        let forward = count_direction(board, pos, color, dr, dc) as i32;
        if (back + forward + 1) as usize >= WIN_LENGTH {
            let line = (-back..=forward)
                .map(|i| {
                    let (r, c) = pos.step(dr, dc, i);
                    Pos::new(r as u8, c as u8)
                })
                .collect();
            return Some(line);
        }
    }
    None
}

/// A draw: no empty cell remains and the last move did not win.
pub fn is_draw(board: &Board, last_move: Option<Pos>) -> bool {
    board.is_full() && !last_move.is_some_and(|pos| check_win(board, pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(board: &mut Board, row: u8, cols: std::ops::Range<u8>, stone: Stone) {
        for c in cols {
            board.place_stone(Pos::new(row, c), stone);
        }
    }

    #[test]
    fn test_five_horizontal() {
        let mut board = Board::new(15);
        row_of(&mut board, 7, 3..8, Stone::Black);
        for c in 3..8 {
            assert!(check_win(&board, Pos::new(7, c)), "center at col {c}");
        }
    }

    #[test]
    fn test_four_is_not_win() {
        let mut board = Board::new(15);
        row_of(&mut board, 7, 3..7, Stone::Black);
        assert!(!check_win(&board, Pos::new(7, 6)));
        assert_eq!(run_length(&board, Pos::new(7, 6), 0, 1), 4);
    }

    #[test]
    fn test_five_vertical() {
        let mut board = Board::new(15);
        for r in 0..5 {
            board.place_stone(Pos::new(r, 2), Stone::White);
        }
        assert!(check_win(&board, Pos::new(0, 2)));
        assert!(check_win(&board, Pos::new(4, 2)));
    }

    #[test]
    fn test_five_diagonal_se() {
        let mut board = Board::new(15);
        for i in 0..5 {
            board.place_stone(Pos::new(10 + i, 10 + i), Stone::Black);
        }
        assert!(check_win(&board, Pos::new(12, 12)));
    }

    #[test]
    fn test_five_diagonal_ne() {
        let mut board = Board::new(15);
        for i in 0..5u8 {
            board.place_stone(Pos::new(14 - i, i), Stone::White);
        }
        assert!(check_win(&board, Pos::new(14, 0)));
        assert!(check_win(&board, Pos::new(10, 4)));
    }

    #[test]
    fn test_overline_wins() {
        let mut board = Board::new(15);
        row_of(&mut board, 0, 0..7, Stone::Black);
        assert!(check_win(&board, Pos::new(0, 3)));
        assert_eq!(winning_line(&board, Pos::new(0, 3)).map(|l| l.len()), Some(7));
    }

    #[test]
    fn test_mixed_colors_break_run() {
        let mut board = Board::new(15);
        row_of(&mut board, 5, 0..5, Stone::Black);
        board.place_stone(Pos::new(5, 2), Stone::White);
        assert!(!check_win(&board, Pos::new(5, 0)));
        assert!(!check_win(&board, Pos::new(5, 4)));
    }

    #[test]
    fn test_run_does_not_wrap_edges() {
        // Three at the end of row 0 and two at the start of row 1 are
        // adjacent in memory but not on the board.
        let mut board = Board::new(15);
        row_of(&mut board, 0, 12..15, Stone::Black);
        row_of(&mut board, 1, 0..2, Stone::Black);
        assert!(!check_win(&board, Pos::new(0, 14)));
        assert!(!check_win(&board, Pos::new(1, 0)));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new(15);
        assert!(!check_win(&board, Pos::new(7, 7)));
        assert_eq!(winning_line(&board, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_winning_line_ordered() {
        let mut board = Board::new(15);
        row_of(&mut board, 4, 2..7, Stone::White);
        let line = winning_line(&board, Pos::new(4, 5)).expect("five present");
        let expected: Vec<Pos> = (2..7).map(|c| Pos::new(4, c)).collect();
        assert_eq!(line, expected);
    }

    #[test]
    fn test_is_draw_full_board_without_win() {
        // 2x2 board can never hold five in a row
        let mut board = Board::new(2);
        board.place_stone(Pos::new(0, 0), Stone::Black);
        board.place_stone(Pos::new(0, 1), Stone::White);
        board.place_stone(Pos::new(1, 0), Stone::White);
        assert!(!is_draw(&board, Some(Pos::new(1, 0))));
        board.place_stone(Pos::new(1, 1), Stone::Black);
        assert!(is_draw(&board, Some(Pos::new(1, 1))));
    }

    #[test]
    fn test_is_draw_false_when_last_move_wins() {
        let mut board = Board::new(5);
        for r in 0..5u8 {
            for c in 0..5u8 {
                let stone = if r == 0 || (r + c) % 2 == 0 { Stone::Black } else { Stone::White };
                board.place_stone(Pos::new(r, c), stone);
            }
        }
        assert!(board.is_full());
        assert!(check_win(&board, Pos::new(0, 2)));
        assert!(!is_draw(&board, Some(Pos::new(0, 2))));
    }
}
