//! Text rendering of grids and hints.

use std::fmt;

use crate::builder::Hint;
use crate::grid::Grid;

/// Formats the grid one row per line, cells separated by a single space.
///
/// Blank cells show as spaces. No trailing newline.
pub fn render_grid(grid: &Grid) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|&cell| (cell as char).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats one line per hint, in placement order. No trailing newline.
pub fn render_hints(hints: &[Hint]) -> String {
    hints
        .iter()
        .map(Hint::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_grid(self))
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.start;
        write!(
            f,
            "Word: {}, Position: row={row}, col={col}, Layout: {}",
            self.word, self.layout
        )
    }
}
