use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.row, 7);
    assert_eq!(pos.col, 7);
}

#[test]
fn test_pos_step() {
    let pos = Pos::new(0, 3);
    assert_eq!(pos.step(1, -1, 2), (2, 1));
    assert_eq!(pos.step(-1, 0, 1), (-1, 3));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_new_is_empty() {
    let board = Board::new(DEFAULT_BOARD_SIZE);
    assert_eq!(board.size(), 15);
    assert!(board.is_board_empty());
    assert_eq!(board.empty_cells().count(), 225);
    assert!(!board.is_full());
}

#[test]
fn test_board_contains() {
    let board = Board::new(15);
    assert!(board.contains(0, 0));
    assert!(board.contains(14, 14));
    assert!(!board.contains(-1, 0));
    assert!(!board.contains(0, -1));
    assert!(!board.contains(15, 0));
    assert!(!board.contains(0, 15));
}

#[test]
fn test_is_legal() {
    let mut board = Board::new(15);
    assert!(board.is_legal(Pos::new(7, 7)));
    assert!(!board.is_legal(Pos::new(15, 0)));
    assert!(!board.is_legal(Pos::new(0, 200)));

    board.place_stone(Pos::new(7, 7), Stone::Black);
    assert!(!board.is_legal(Pos::new(7, 7)));
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new(15);
    let pos = Pos::new(3, 4);
    let before = board.clone();

    board.place_stone(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert_eq!(board, before);
}

#[test]
fn test_stone_at_off_board() {
    let mut board = Board::new(5);
    board.place_stone(Pos::new(4, 4), Stone::Black);
    assert_eq!(board.stone_at(4, 4), Some(Stone::Black));
    assert_eq!(board.stone_at(0, 0), Some(Stone::Empty));
    assert_eq!(board.stone_at(5, 4), None);
    assert_eq!(board.stone_at(-1, 2), None);
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new(3);
    board.place_stone(Pos::new(0, 1), Stone::Black);
    board.place_stone(Pos::new(2, 2), Stone::White);

    let cells: Vec<Pos> = board.empty_cells().collect();
    assert_eq!(cells.len(), 7);
    assert_eq!(cells[0], Pos::new(0, 0));
    assert_eq!(cells[1], Pos::new(0, 2));
    assert!(!cells.contains(&Pos::new(2, 2)));
    let mut sorted = cells.clone();
    sorted.sort();
    assert_eq!(cells, sorted);
}

#[test]
fn test_occupied_cells() {
    let mut board = Board::new(4);
    board.place_stone(Pos::new(3, 0), Stone::White);
    board.place_stone(Pos::new(1, 2), Stone::Black);
    let cells: Vec<Pos> = board.occupied_cells().collect();
    assert_eq!(cells, vec![Pos::new(1, 2), Pos::new(3, 0)]);
}

#[test]
fn test_is_full() {
    let mut board = Board::new(2);
    for (i, pos) in [Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0)].into_iter().enumerate() {
        let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
        board.place_stone(pos, stone);
    }
    assert!(!board.is_full());
    board.place_stone(Pos::new(1, 1), Stone::White);
    assert!(board.is_full());
}

#[test]
fn test_display_dump() {
    let mut board = Board::new(3);
    board.place_stone(Pos::new(1, 1), Stone::Black);
    board.place_stone(Pos::new(0, 2), Stone::White);
    assert_eq!(board.to_string(), ". . O\n. X .\n. . .\n");
}
