//! Pieces module - tetromino catalog and matrix rotation
//!
//! Shapes are small square matrices of tagged cells. The catalog entries are
//! immutable templates; rotation always produces a new matrix. Rotation is a
//! plain 90-degree matrix rotation (transpose plus a reverse), so it works
//! uniformly for the 2x2, 3x3 and 4x4 shapes without per-piece tables.

use crate::types::{Cell, PieceKind, RotationDir};

/// A piece shape: a square matrix of cells, each empty or carrying the
/// owning piece's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: Vec<Vec<Cell>>,
}

impl Shape {
    fn from_pattern(kind: PieceKind, pattern: &[&str]) -> Self {
        let rows = pattern
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| if c == '.' { None } else { Some(kind) })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Row width of the matrix (also the kick search bound)
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// Iterate the (dx, dy) offsets of every occupied cell
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_some())
                .map(move |(x, _)| (x as i8, y as i8))
        })
    }

    /// Rotate 90 degrees, returning a new shape.
    ///
    /// Transpose (row i, col j -> row j, col i), then reverse each row for
    /// clockwise or reverse the row order for counter-clockwise.
    pub fn rotated(&self, dir: RotationDir) -> Shape {
        let n_rows = self.rows.len();
        let n_cols = self.width();

        let mut rows: Vec<Vec<Cell>> = (0..n_cols)
            .map(|j| (0..n_rows).map(|i| self.rows[i][j]).collect())
            .collect();

        match dir {
            RotationDir::Clockwise => {
                for row in &mut rows {
                    row.reverse();
                }
            }
            RotationDir::CounterClockwise => rows.reverse(),
        }

        Shape { rows }
    }
}

/// Canonical spawn-orientation shape for a piece kind.
///
/// These matrices are the catalog; note the I piece is a vertical bar in
/// column 1 of a 4x4 matrix and S/T/Z carry an empty trailing row, which
/// matters for rotation and kick outcomes.
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_pattern(kind, &[".X..", ".X..", ".X..", ".X.."]),
        PieceKind::J => Shape::from_pattern(kind, &[".X.", ".X.", "XX."]),
        PieceKind::L => Shape::from_pattern(kind, &[".X.", ".X.", ".XX"]),
        PieceKind::O => Shape::from_pattern(kind, &["XX", "XX"]),
        PieceKind::S => Shape::from_pattern(kind, &[".XX", "XX.", "..."]),
        PieceKind::T => Shape::from_pattern(kind, &["...", "XXX", ".X."]),
        PieceKind::Z => Shape::from_pattern(kind, &["XX.", ".XX", "..."]),
    }
}
