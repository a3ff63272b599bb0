//! Square letter grid used while placing words.
//!
//! The grid is a flat row-major buffer of ASCII bytes. Each cell holds either
//! [`BLANK`] or one uppercase letter.

use crate::geometry::{Coord, Layout};

/// Sentinel for a cell no word has written to yet.
pub const BLANK: u8 = b' ';

/// Converts `(row, col)` to a linear cell index.
///
/// Index order is row-major: `idx = row * size + col`. Panics on coordinates
/// outside the grid, since a flat index would otherwise alias into the next row.
#[inline(always)]
pub fn coord_to_idx(size: usize, (row, col): Coord) -> usize {
    assert!(
        row < size && col < size,
        "cell ({row},{col}) is outside a {size}x{size} grid"
    );
    row * size + col
}

/// Converts a linear cell index back to `(row, col)`.
#[inline(always)]
pub const fn idx_to_coord(size: usize, cell_index: usize) -> Coord {
    (cell_index / size, cell_index % size)
}

/// A `size x size` grid of letters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Creates a grid with every cell blank.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![BLANK; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reads one cell.
    #[inline]
    pub fn get(&self, coord: Coord) -> u8 {
        self.cells[coord_to_idx(self.size, coord)]
    }

    /// Writes one cell.
    ///
    /// A non-blank cell may only be rewritten with the letter it already
    /// holds; placement checks compatibility before any write.
    #[inline]
    pub fn set(&mut self, coord: Coord, letter: u8) {
        let idx = coord_to_idx(self.size, coord);
        debug_assert!(
            self.cells[idx] == BLANK || self.cells[idx] == letter,
            "overwriting {:?} with {:?} at {coord:?}",
            self.cells[idx] as char,
            letter as char
        );
        self.cells[idx] = letter;
    }

    /// True if the cell is blank or already holds `letter`.
    #[inline]
    pub fn is_blank_or_equal(&self, coord: Coord, letter: u8) -> bool {
        let cell = self.get(coord);
        cell == BLANK || cell == letter
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks(0) panics; an empty grid has no rows either way
        self.cells.chunks(self.size.max(1))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Number of cells still holding [`BLANK`].
    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == BLANK).count()
    }

    /// Reads `len` letters along `layout` from `start`.
    ///
    /// Blank cells come back as spaces, so a partially written word is visible.
    pub fn read(&self, start: Coord, layout: Layout, len: usize) -> String {
        layout
            .positions(start, len)
            .map(|coord| self.get(coord) as char)
            .collect()
    }
}
