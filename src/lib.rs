//! Word Search Generator Library
//!
//! Places words into a square letter grid along six layouts, growing the grid
//! until every word fits, and reports where each word went.

pub mod builder;
pub mod config;
pub mod error;
pub mod filler;
pub mod geometry;
pub mod grid;
pub mod logging;
pub mod placer;
pub mod report;
pub mod words;

pub use builder::{build_puzzle, Hint, Puzzle};
pub use config::BuildConfig;
pub use error::{PuzzleError, WordError};
pub use filler::fill_gaps;
pub use geometry::{Coord, Layout};
pub use grid::Grid;
pub use report::{render_grid, render_hints};
pub use words::{read_words, Word};
