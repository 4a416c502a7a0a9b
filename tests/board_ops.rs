use matecheck::board::{Board, BoardError};
use matecheck::coord::Coord;
use matecheck::pieces::{Piece, PieceKind};

#[test]
fn place_query_remove_roundtrip() {
    let mut board = Board::new();
    let pos = Coord::new(3, 4);

    assert!(!board.is_occupied(pos));
    board.place(pos, Piece::new(PieceKind::Rook)).unwrap();
    assert!(board.is_occupied(pos));
    assert_eq!(
        board.get(pos).unwrap().map(|p| p.kind),
        Some(PieceKind::Rook)
    );

    let taken = board.remove(pos).unwrap();
    assert_eq!(taken, Some(Piece::new(PieceKind::Rook)));
    assert!(!board.is_occupied(pos));
    assert_eq!(board.get(pos).unwrap(), None);
}

#[test]
fn removing_an_empty_square_is_a_noop() {
    let mut board = Board::new();
    assert_eq!(board.remove(Coord::new(0, 0)).unwrap(), None);
}

#[test]
fn occupied_square_rejects_and_keeps_the_original() {
    let mut board = Board::new();
    let pos = Coord::new(2, 2);

    board.place(pos, Piece::new(PieceKind::Rook)).unwrap();
    let err = board.place(pos, Piece::new(PieceKind::Bishop)).unwrap_err();
    assert_eq!(err, BoardError::Occupied(pos));

    // The prior occupant is intact.
    assert_eq!(
        board.get(pos).unwrap().map(|p| p.kind),
        Some(PieceKind::Rook)
    );
}

#[test]
fn out_of_bounds_coordinates_are_rejected() {
    let mut board = Board::new();

    for bad in [
        Coord::new(8, 0),
        Coord::new(0, 8),
        Coord::new(-1, 3),
        Coord::new(3, -1),
    ] {
        assert_eq!(
            board.place(bad, Piece::new(PieceKind::Queen)),
            Err(BoardError::OutOfBounds(bad))
        );
        assert_eq!(board.remove(bad), Err(BoardError::OutOfBounds(bad)));
        assert_eq!(board.get(bad), Err(BoardError::OutOfBounds(bad)));
        // Total lookups read off-board as vacant.
        assert!(!board.is_occupied(bad));
        assert_eq!(board.occupant(bad), None);
    }
}

#[test]
fn failed_placement_leaves_the_board_unchanged() {
    let mut board = Board::new();
    board
        .place(Coord::new(1, 1), Piece::new(PieceKind::King))
        .unwrap();

    let _ = board.place(Coord::new(1, 1), Piece::new(PieceKind::Queen));
    let _ = board.place(Coord::new(9, 9), Piece::new(PieceKind::Queen));

    let mut occupied = Vec::new();
    for x in 0..8 {
        for y in 0..8 {
            let c = Coord::new(x, y);
            if board.is_occupied(c) {
                occupied.push(c);
            }
        }
    }
    assert_eq!(occupied, vec![Coord::new(1, 1)]);
}

#[test]
fn display_renders_a_glyph_grid() {
    let mut board = Board::new();
    board
        .place(Coord::new(2, 0), Piece::new(PieceKind::Knight))
        .unwrap();
    board
        .place(Coord::new(0, 1), Piece::new(PieceKind::King))
        .unwrap();

    let dump = board.to_string();
    let rows: Vec<&str> = dump.lines().collect();
    assert_eq!(rows.len(), 8);

    // Row = y; the first output row is y = 0.
    assert_eq!(rows[0], ". . N . . . . .");
    assert_eq!(rows[1], "K . . . . . . .");
    for row in &rows[2..] {
        assert_eq!(*row, ". . . . . . . .");
    }
}
