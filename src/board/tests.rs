use super::*;

#[test]
fn test_disc_opponent() {
    assert_eq!(Disc::Black.opponent(), Disc::White);
    assert_eq!(Disc::White.opponent(), Disc::Black);
    assert_eq!(Disc::Empty.opponent(), Disc::Empty);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(NUM_CELLS, 64);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.row, 3);
    assert_eq!(pos.col, 4);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 3 * 8 + 4);
    assert_eq!(pos.to_index(), 28);

    let pos2 = Pos::from_index(28);
    assert_eq!(pos2.row, 3);
    assert_eq!(pos2.col, 4);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(Pos::is_valid(3, 4));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
}

#[test]
fn test_pos_ordering_is_row_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 7).to_index(), 7);
    assert_eq!(Pos::new(7, 0).to_index(), 56);
    assert_eq!(Pos::new(7, 7).to_index(), 63);
}

#[test]
fn test_pos_notation_display() {
    assert_eq!(Pos::new(0, 0).to_string(), "a1");
    assert_eq!(Pos::new(7, 7).to_string(), "h8");
    assert_eq!(Pos::new(2, 3).to_string(), "d3");
}

#[test]
fn test_pos_notation_parse() {
    assert_eq!("a1".parse::<Pos>(), Ok(Pos::new(0, 0)));
    assert_eq!("h8".parse::<Pos>(), Ok(Pos::new(7, 7)));
    assert_eq!("d3".parse::<Pos>(), Ok(Pos::new(2, 3)));
    assert_eq!("D3".parse::<Pos>(), Ok(Pos::new(2, 3)));
}

#[test]
fn test_pos_notation_parse_rejects_invalid() {
    assert!("".parse::<Pos>().is_err());
    assert!("d".parse::<Pos>().is_err());
    assert!("d33".parse::<Pos>().is_err());
    assert!("z3".parse::<Pos>().is_err());
    assert!("d9".parse::<Pos>().is_err());
    assert!("d0".parse::<Pos>().is_err());
    assert!("33".parse::<Pos>().is_err());
}

#[test]
fn test_pos_notation_roundtrip() {
    for idx in 0..NUM_CELLS {
        let pos = Pos::from_index(idx);
        assert_eq!(pos.to_string().parse::<Pos>(), Ok(pos));
    }
}

#[test]
fn test_empty_board() {
    let board = Board::new();
    assert_eq!(board.count(Disc::Black), 0);
    assert_eq!(board.count(Disc::White), 0);
    assert_eq!(board.count(Disc::Empty), 64);
    assert_eq!(board.score(), 0);
}

#[test]
fn test_standard_opening_placement() {
    let board = Board::standard();
    assert_eq!(board.get(Pos::new(3, 3)), Disc::Black);
    assert_eq!(board.get(Pos::new(3, 4)), Disc::White);
    assert_eq!(board.get(Pos::new(4, 3)), Disc::White);
    assert_eq!(board.get(Pos::new(4, 4)), Disc::Black);
    assert_eq!(board.count(Disc::Black), 2);
    assert_eq!(board.count(Disc::White), 2);
    assert_eq!(board.disc_count(), 4);
    assert_eq!(board.score(), 0);
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new();
    let pos = Pos::new(5, 2);

    assert!(board.is_empty(pos));
    board.place(pos, Disc::Black);
    assert_eq!(board.get(pos), Disc::Black);
    assert!(!board.is_empty(pos));

    board.place(pos, Disc::Empty);
    assert!(board.is_empty(pos));
}

#[test]
fn test_board_copy_is_independent() {
    let original = Board::standard();
    let mut copy = original;

    copy.place(Pos::new(0, 0), Disc::White);

    assert_eq!(copy.get(Pos::new(0, 0)), Disc::White);
    assert!(original.is_empty(Pos::new(0, 0)));
    assert_ne!(original, copy);
}

#[test]
fn test_score_matches_counts() {
    let mut board = Board::standard();
    board.place(Pos::new(0, 0), Disc::Black);
    board.place(Pos::new(0, 1), Disc::Black);
    board.place(Pos::new(7, 7), Disc::White);

    assert_eq!(board.count(Disc::Black), 4);
    assert_eq!(board.count(Disc::White), 3);
    assert_eq!(
        board.score(),
        board.count(Disc::Black) as i32 - board.count(Disc::White) as i32
    );
    assert_eq!(board.score(), 1);
}

#[test]
fn test_board_display() {
    let rendered = Board::standard().to_string();
    assert!(rendered.contains("a b c d e f g h"));
    // One rank line per row plus the header.
    assert_eq!(rendered.lines().count(), 9);
    assert_eq!(rendered.matches('X').count(), 2);
    assert_eq!(rendered.matches('O').count(), 2);
}
