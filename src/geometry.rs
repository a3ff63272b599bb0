//! Word layouts and their bounds predicates.
//!
//! A layout maps a start coordinate, a letter index and the word length to the
//! cell that letter occupies. There are six layouts: horizontal and vertical in
//! both reading directions, plus the two diagonals running down the grid.

use std::fmt;

/// A grid coordinate as `(row, col)`.
pub type Coord = (usize, usize);

/// Number of distinct layouts.
pub const NUM_LAYOUTS: usize = 6;

/// The direction a word is written in, relative to its start coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layout {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Down and to the right.
    Diagonal,
    /// Down and to the left.
    MirrorDiagonal,
    /// Right to left along a row; the last letter sits on the start cell.
    ReversedHorizontal,
    /// Bottom to top along a column; the last letter sits on the start cell.
    ReversedVertical,
}

/// Position functions, indexed by `Layout as usize`.
///
/// Each takes `(start, letter_index, word_length)`. Ordering note: the index
/// mapping must stay in sync with the discriminants of [`Layout`].
const POSITIONS: [fn(Coord, usize, usize) -> Coord; NUM_LAYOUTS] = [
    |(row, col), i, _| (row, col + i),
    |(row, col), i, _| (row + i, col),
    |(row, col), i, _| (row + i, col + i),
    |(row, col), i, _| (row + i, col - i),
    |(row, col), i, len| (row, col + (len - 1 - i)),
    |(row, col), i, len| (row + (len - 1 - i), col),
];

impl Layout {
    /// All layouts, in discriminant order.
    pub const ALL: [Layout; NUM_LAYOUTS] = [
        Layout::Horizontal,
        Layout::Vertical,
        Layout::Diagonal,
        Layout::MirrorDiagonal,
        Layout::ReversedHorizontal,
        Layout::ReversedVertical,
    ];

    /// Human-readable layout name, as printed in hints.
    pub const fn name(self) -> &'static str {
        match self {
            Layout::Horizontal => "horizontal",
            Layout::Vertical => "vertical",
            Layout::Diagonal => "diagonal",
            Layout::MirrorDiagonal => "mirror diagonal",
            Layout::ReversedHorizontal => "reversed horizontal",
            Layout::ReversedVertical => "reversed vertical",
        }
    }

    /// Maps letter `index` of a word of length `word_len` to its grid cell.
    ///
    /// Callers must check [`Layout::fits`] first; an unfit layout can
    /// underflow (mirror diagonal) or land outside the grid.
    #[inline]
    pub fn position(self, start: Coord, index: usize, word_len: usize) -> Coord {
        POSITIONS[self as usize](start, index, word_len)
    }

    /// Iterates the cells of every letter of a word, in letter order.
    pub fn positions(self, start: Coord, word_len: usize) -> impl Iterator<Item = Coord> {
        (0..word_len).map(move |index| self.position(start, index, word_len))
    }

    /// Whether a word of `word_len` letters starting at `start` stays inside a
    /// `grid_size` square grid.
    pub fn fits(self, grid_size: usize, start: Coord, word_len: usize) -> bool {
        let (row, col) = start;
        match self {
            Layout::Horizontal | Layout::ReversedHorizontal => {
                fits_horizontal(grid_size, col, word_len)
            }
            Layout::Vertical | Layout::ReversedVertical => fits_vertical(grid_size, row, word_len),
            Layout::Diagonal => {
                fits_horizontal(grid_size, col, word_len) && fits_vertical(grid_size, row, word_len)
            }
            Layout::MirrorDiagonal => fits_vertical(grid_size, row, word_len) && col >= word_len,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
fn fits_horizontal(grid_size: usize, start_col: usize, word_len: usize) -> bool {
    grid_size.saturating_sub(start_col) >= word_len
}

#[inline]
fn fits_vertical(grid_size: usize, start_row: usize, word_len: usize) -> bool {
    grid_size.saturating_sub(start_row) >= word_len
}

/// Returns the layouts whose bounds predicate holds, in discriminant order.
pub fn eligible_layouts(grid_size: usize, start: Coord, word_len: usize) -> Vec<Layout> {
    Layout::ALL
        .into_iter()
        .filter(|layout| layout.fits(grid_size, start, word_len))
        .collect()
}
