//! Board tests

use tui_blocks::core::Board;
use tui_blocks::types::{Color, BOARD_HEIGHT, BOARD_WIDTH, EMPTY, MAX_BOARD_DIM, MIN_BOARD_DIM};

fn fill_row(board: &mut Board, y: i8, color: Color) {
    for x in 0..board.width() as i8 {
        board.set(x, y, color.index());
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_dimensions_are_clamped() {
    let small = Board::new(1, 0);
    assert_eq!((small.width(), small.height()), (MIN_BOARD_DIM, MIN_BOARD_DIM));
    let large = Board::new(200, 255);
    assert_eq!((large.width(), large.height()), (MAX_BOARD_DIM, MAX_BOARD_DIM));
}

#[test]
fn test_board_out_of_bounds_is_never_valid() {
    let board = Board::default();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(!board.is_valid(-1, 5));
    assert!(!board.is_valid(3, 20));
}

#[test]
fn test_board_set_rejects_non_colours() {
    let mut board = Board::default();
    assert!(board.set(5, 10, Color::Cyan.index()));
    assert_eq!(board.get(5, 10), Some(6));
    assert!(!board.set(5, 10, 7));
    assert_eq!(board.get(5, 10), Some(6));
    assert!(board.set(5, 10, EMPTY));
    assert!(board.is_valid(5, 10));
}

#[test]
fn test_clear_bottom_row_shifts_everything_down() {
    let mut board = Board::default();
    fill_row(&mut board, 19, Color::Red);
    board.set(2, 18, Color::Blue.index());
    board.set(7, 17, Color::Green.index());

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.get(2, 19), Some(Color::Blue.index()));
    assert_eq!(board.get(7, 18), Some(Color::Green.index()));
    assert_eq!(board.filled_count(), 2);
    assert_eq!(board.height(), 20);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::default();
    fill_row(&mut board, 19, Color::Red);
    fill_row(&mut board, 17, Color::Yellow);
    board.set(0, 18, Color::Purple.index());
    board.set(9, 16, Color::Cyan.index());

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.get(0, 19), Some(Color::Purple.index()));
    assert_eq!(board.get(9, 18), Some(Color::Cyan.index()));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_nothing_when_no_row_is_full() {
    let mut board = Board::default();
    for x in 0..9 {
        board.set(x, 19, Color::Red.index());
    }
    let before = board.clone();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_from_rows_validates_shape_and_values() {
    let rows = vec![vec![0u8; 4]; 4];
    assert!(Board::from_rows(&rows).is_some());

    let mut ragged = rows.clone();
    ragged[2].push(0);
    assert!(Board::from_rows(&ragged).is_none());

    let mut bad = rows.clone();
    bad[0][0] = 9;
    assert!(Board::from_rows(&bad).is_none());

    assert!(Board::from_rows(&vec![vec![0u8; 3]; 4]).is_none());
}
