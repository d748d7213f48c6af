//! Board: the grid of locked cells.
//!
//! Cells are stored row-major in a flat buffer allocated once at
//! construction. Coordinates are `(x, y)` with x growing rightwards and y
//! growing downwards; a cell becomes occupied only when a piece locks and
//! empty again only through line-clear compaction.

use arrayvec::ArrayVec;

use crt_tetris_types::Cell;

use crate::piece::Piece;

/// A piece has at most 4 cells, so one lock fills at most 4 rows.
pub const MAX_CLEARED_ROWS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set a cell, returning false when out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff `(x, y)` is inside the grid and holds a locked cell.
    ///
    /// Out-of-range coordinates report unoccupied; bounds rejection is the
    /// collision validator's job.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let start = y * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Row indices where every column is occupied, top to bottom.
    ///
    /// At most [`MAX_CLEARED_ROWS`] rows can be full, because rows only
    /// fill when a piece locks and a piece has 4 cells. A board seeded with
    /// more full rows than that violates the invariant.
    pub fn full_rows(&self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut rows = ArrayVec::new();
        for y in 0..self.height as usize {
            if self.is_row_full(y) {
                debug_assert!(
                    !rows.is_full(),
                    "more than {} full rows",
                    MAX_CLEARED_ROWS
                );
                if !rows.is_full() {
                    rows.push(y);
                }
            }
        }
        rows
    }

    /// Remove the named rows and insert the same number of empty rows at the
    /// top, shifting everything above each removed row down by one.
    ///
    /// `rows` must be sorted top to bottom (as produced by [`full_rows`]).
    ///
    /// [`full_rows`]: Board::full_rows
    pub fn clear_rows(&mut self, rows: &[usize]) {
        if rows.is_empty() {
            return;
        }

        let width = self.width as usize;
        let mut write_y = self.height as usize;

        // Compact surviving rows downwards, skipping the cleared ones.
        for read_y in (0..self.height as usize).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                let dst = write_y * width;
                self.cells.copy_within(src..src + width, dst);
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }
    }

    /// Write the piece's filled cells into the grid.
    ///
    /// The placement must already have been validated; writing onto an
    /// occupied cell is a programming error. Cells above the visible grid
    /// (y < 0, possible after a best-effort hold placement) are skipped.
    pub fn commit(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if y < 0 {
                continue;
            }
            debug_assert!(!self.is_occupied(x, y), "commit over occupied cell");
            self.set(x, y, Some(piece.kind));
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell (used by restart).
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }
}
