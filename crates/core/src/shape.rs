//! Shape catalog and matrix rotation.
//!
//! Each of the 7 tetrominoes is a rectangular boolean matrix stored inside a
//! fixed 4x4 buffer with explicit row/column counts. Rotation derives a new
//! matrix; the piece's kind is carried separately and never recovered by
//! matching matrices against the catalog.

use crt_tetris_types::PieceKind;

/// Maximum side length of any shape matrix.
pub const SHAPE_MAX: usize = 4;

/// A rectangular boolean shape matrix.
///
/// `cells[row][col]` is `true` for filled cells; only the `rows` x `cols`
/// top-left corner of the buffer is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    cells: [[bool; SHAPE_MAX]; SHAPE_MAX],
    rows: u8,
    cols: u8,
}

impl ShapeMatrix {
    /// Build a matrix from row slices (1 = filled).
    fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= SHAPE_MAX);
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));

        let mut cells = [[false; SHAPE_MAX]; SHAPE_MAX];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            cells,
            rows: rows.len() as u8,
            cols: rows[0].len() as u8,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.cols && y < self.rows && self.cells[y as usize][x as usize]
    }

    /// Iterate the filled cells as `(x, y)` offsets from the top-left corner.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |y| {
            (0..self.cols as usize)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.filled_cells().count()
    }

    /// Rotate 90 degrees clockwise: `rotated[c][r] = self[rows-1-r][c]`.
    ///
    /// Dimensions swap; the original matrix is left untouched so a failed
    /// rotation can simply discard the result.
    pub fn rotated_cw(&self) -> Self {
        let mut out = [[false; SHAPE_MAX]; SHAPE_MAX];
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        for r in 0..rows {
            for c in 0..cols {
                out[c][rows - 1 - r] = self.cells[r][c];
            }
        }
        Self {
            cells: out,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

/// The unrotated catalog shape for a piece kind.
///
/// Catalog order matches `PieceKind::id`: I, O, T, L, J, S, Z.
pub fn base_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => ShapeMatrix::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => ShapeMatrix::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => ShapeMatrix::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
        PieceKind::L => ShapeMatrix::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
        PieceKind::J => ShapeMatrix::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
        PieceKind::S => ShapeMatrix::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => ShapeMatrix::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    }
}
