//! Board-level integration tests: collision contract and line compaction

use neontris::core::{shape_of, Board};
use neontris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn collision_contract_floor_walls_overlap() {
    let mut board = Board::new();
    let shape = shape_of(PieceKind::O);

    // Floor: bottom row of the O at y=18 is row 19; one more row collides.
    assert!(!board.collides(&shape, 4, 18, 0, 0));
    assert!(board.collides(&shape, 4, 18, 0, 1));

    // Side walls.
    assert!(board.collides(&shape, 0, 5, -1, 0));
    assert!(board.collides(&shape, 8, 5, 1, 0));

    // Overlap with a locked cell.
    board.set(5, 10, Some(PieceKind::T));
    assert!(board.collides(&shape, 4, 9, 0, 0));
}

#[test]
fn collision_skips_overlap_above_grid() {
    let mut board = Board::new();
    fill_row(&mut board, 0, PieceKind::I);

    let shape = shape_of(PieceKind::O);
    // Entirely above the grid: no overlap check, no collision.
    assert!(!board.collides(&shape, 4, -2, 0, 0));
    // Column bounds still apply above the grid.
    assert!(board.collides(&shape, 9, -2, 0, 0));
}

#[test]
fn merge_preserves_row_count() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    fill_row(&mut board, 18, PieceKind::J);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);
    assert_eq!(board.cells().len(), BOARD_WIDTH * BOARD_HEIGHT);
}

#[test]
fn cleared_rows_replaced_at_top_preserving_order() {
    let mut board = Board::new();
    // Bottom-up: survivor A (row 19 partial), full row 18, survivor B
    // (row 17 partial).
    board.set(0, 19, Some(PieceKind::S));
    fill_row(&mut board, 18, PieceKind::I);
    board.set(9, 17, Some(PieceKind::Z));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 1);

    // A stays on row 19; B moves down into the vacated row 18.
    assert!(board.is_occupied(0, 19));
    assert!(board.is_occupied(9, 18));
    // Top row is fresh and empty.
    for x in 0..BOARD_WIDTH as i8 {
        assert_eq!(board.get(x, 0), Some(None));
    }
}

#[test]
fn full_rows_always_removed_regardless_of_position() {
    for y in [0i8, 7, 19] {
        let mut board = Board::new();
        fill_row(&mut board, y, PieceKind::L);
        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), 1, "row {y}");
        assert!(board.cells().iter().all(|c| c.is_none()), "row {y}");
    }
}

#[test]
fn stamp_is_defensive_about_out_of_range_cells() {
    let mut board = Board::new();
    let shape = shape_of(PieceKind::I);
    // Partially above the grid: only the in-range cells are written, and
    // nothing panics.
    board.stamp(&shape, 3, -2, PieceKind::I);
    let written = board.cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(written, 2);
}
