use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(10, 10); // Center
    assert_eq!(pos.to_index(), 10 * 20 + 10);
    assert_eq!(Pos::from_index(210), pos);
    assert_eq!(pos.center_distance(), 0);
    assert_eq!(Pos::new(0, 0).center_distance(), 20);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(19, 19));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(20, 0));
    assert!(!Pos::is_valid(0, 20));
    assert_eq!(Pos::checked(20, 3), None);
    assert_eq!(Pos::checked(4, 3), Some(Pos::new(4, 3)));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 20);
    assert_eq!(TOTAL_CELLS, 400);
    assert_eq!(WIN_LENGTH, 4);
    assert_eq!(CENTER, 10);
}

#[test]
fn test_is_valid_move_matches_range_and_emptiness() {
    let mut board = Board::new();
    assert!(board.place_stone(5, 5, Stone::Black));

    for (row, col) in [(-1, 0), (0, -1), (20, 0), (0, 20), (5, 5), (100, -100)] {
        assert!(!board.is_valid_move(row, col), "({row}, {col}) should be invalid");
    }
    assert!(board.is_valid_move(0, 0));
    assert!(board.is_valid_move(19, 19));
    assert!(board.is_valid_move(5, 6));
}

#[test]
fn test_place_stone_rejects_without_side_effects() {
    let mut board = Board::new();
    assert!(board.place_stone(3, 4, Stone::White));
    let before = board.clone();

    assert!(!board.place_stone(3, 4, Stone::Black));
    assert!(!board.place_stone(-1, 4, Stone::Black));
    assert!(!board.place_stone(3, 20, Stone::Black));
    assert!(!board.place_stone(7, 7, Stone::Empty));

    assert_eq!(board, before);
    assert_eq!(board.get(Pos::new(3, 4)), Stone::White);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_get_at() {
    let mut board = Board::new();
    board.place_stone(2, 2, Stone::Black);
    assert_eq!(board.get_at(2, 2), Some(Stone::Black));
    assert_eq!(board.get_at(2, 3), Some(Stone::Empty));
    assert_eq!(board.get_at(-1, 3), None);
}

#[test]
fn test_empty_positions_row_major_and_stable() {
    let mut board = Board::new();
    assert_eq!(board.get_empty_positions().len(), TOTAL_CELLS);

    board.place_stone(0, 1, Stone::Black);
    board.place_stone(0, 0, Stone::White);
    let first = board.get_empty_positions();
    let second = board.get_empty_positions();
    assert_eq!(first, second);
    assert_eq!(first.len(), TOTAL_CELLS - 2);
    assert_eq!(first[0], Pos::new(0, 2));
    assert!(first.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_clone_is_independent() {
    let mut original = Board::new();
    original.place_stone(9, 9, Stone::Black);

    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.place_stone(9, 10, Stone::White);
    assert_eq!(original.get(Pos::new(9, 10)), Stone::Empty);

    original.place_stone(0, 0, Stone::White);
    assert_eq!(copy.get(Pos::new(0, 0)), Stone::Empty);
}

#[test]
fn test_retract_restores_cell() {
    let mut board = Board::new();
    let before = board.clone();
    board.place_stone(4, 4, Stone::White);
    board.retract(Pos::new(4, 4));
    assert_eq!(board, before);
}

#[test]
fn test_board_full() {
    let mut board = Board::new();
    for (i, pos) in board.get_empty_positions().into_iter().enumerate() {
        assert!(!board.is_board_full());
        let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
        assert!(board.place(pos, stone));
    }
    assert!(board.is_board_full());
    assert!(board.get_empty_positions().is_empty());
}

#[test]
fn test_occupied_row_major() {
    let mut board = Board::new();
    board.place_stone(7, 1, Stone::White);
    board.place_stone(2, 9, Stone::Black);
    let occupied: Vec<Pos> = board.occupied().collect();
    assert_eq!(occupied, vec![Pos::new(2, 9), Pos::new(7, 1)]);
}

#[test]
fn test_check_winner_all_directions() {
    let lines: [[(i32, i32); 4]; 4] = [
        [(5, 5), (5, 6), (5, 7), (5, 8)],     // horizontal
        [(5, 5), (6, 5), (7, 5), (8, 5)],     // vertical
        [(5, 5), (6, 6), (7, 7), (8, 8)],     // diagonal down-right
        [(5, 8), (6, 7), (7, 6), (8, 5)],     // diagonal down-left
    ];
    for line in lines {
        let mut board = Board::new();
        for &(r, c) in &line {
            board.place_stone(r, c, Stone::Black);
        }
        for &(r, c) in &line {
            assert!(board.check_winner(r, c, Stone::Black), "anchor ({r}, {c}) of {line:?}");
            assert!(!board.check_winner(r, c, Stone::White));
        }
    }
}

#[test]
fn test_check_winner_three_is_not_enough() {
    let mut board = Board::new();
    for c in 0..3 {
        board.place_stone(19, c, Stone::White);
    }
    assert!(!board.check_winner(19, 2, Stone::White));
}

#[test]
fn test_check_winner_interrupted_line() {
    let mut board = Board::new();
    board.place_stone(10, 4, Stone::Black);
    board.place_stone(10, 5, Stone::Black);
    board.place_stone(10, 6, Stone::White);
    board.place_stone(10, 7, Stone::Black);
    board.place_stone(10, 8, Stone::Black);
    assert!(!board.check_winner(10, 5, Stone::Black));
    assert!(!board.check_winner(10, 7, Stone::Black));
}

#[test]
fn test_check_winner_out_of_range_anchor() {
    let board = Board::new();
    assert!(!board.check_winner(-3, 0, Stone::Black));
    assert!(!board.check_winner(0, 25, Stone::Black));
}
