//! Randomized placement of a single word.
//!
//! One attempt samples a start cell uniformly, shuffles the layouts that fit
//! there, and takes the first layout whose cells are all blank or already hold
//! the matching letter. Letters are written only once the whole word checks
//! out, so a failed attempt leaves the grid untouched.

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::geometry::{eligible_layouts, Coord, Layout};
use crate::grid::Grid;
use crate::words::Word;

/// Where a word ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The sampled start cell the layout was applied to.
    pub start: Coord,
    pub layout: Layout,
    /// Cell of each letter, in letter order.
    pub positions: Vec<Coord>,
}

/// Why a single attempt failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptFailure {
    /// No layout fits inside the grid from the sampled start.
    NoEligibleLayout,
    /// Every fitting layout crosses a cell holding a different letter.
    Conflict,
}

/// A word could not be placed within its attempt budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptsExhausted {
    pub attempts: usize,
}

/// Attempt budget for one word at one grid size.
#[inline]
pub const fn max_attempts(grid_size: usize) -> usize {
    grid_size * grid_size
}

/// Letter cells of `word` along `layout`, or `None` if any cell conflicts.
fn compatible_positions(
    grid: &Grid,
    start: Coord,
    layout: Layout,
    word: &Word,
) -> Option<Vec<Coord>> {
    let letters = word.as_bytes();
    layout
        .positions(start, letters.len())
        .zip(letters)
        .map(|(coord, &letter)| grid.is_blank_or_equal(coord, letter).then_some(coord))
        .collect()
}

/// Picks a layout for `word` at `start` without touching the grid.
///
/// Eligible layouts are tried in a uniformly random order; the first one that
/// is letter-compatible wins.
pub fn choose_layout<R: Rng + ?Sized>(
    grid: &Grid,
    start: Coord,
    word: &Word,
    rng: &mut R,
) -> Result<(Layout, Vec<Coord>), AttemptFailure> {
    let mut candidates = eligible_layouts(grid.size(), start, word.len());
    if candidates.is_empty() {
        return Err(AttemptFailure::NoEligibleLayout);
    }

    candidates.shuffle(rng);
    candidates
        .into_iter()
        .find_map(|layout| {
            compatible_positions(grid, start, layout, word).map(|positions| (layout, positions))
        })
        .ok_or(AttemptFailure::Conflict)
}

/// Runs one attempt: sample a start cell, choose a layout, and commit.
///
/// The grid must be at least 1x1.
pub fn attempt_placement<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &Word,
    rng: &mut R,
) -> Result<Placement, AttemptFailure> {
    let size = grid.size();
    let start = (rng.gen_range(0..size), rng.gen_range(0..size));
    let (layout, positions) = choose_layout(grid, start, word, rng)?;

    for (&coord, &letter) in positions.iter().zip(word.as_bytes()) {
        grid.set(coord, letter);
    }

    Ok(Placement {
        start,
        layout,
        positions,
    })
}

/// Places `word` somewhere in `grid`, trying at most `attempts` start cells.
pub fn place_word<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &Word,
    attempts: usize,
    rng: &mut R,
) -> Result<Placement, AttemptsExhausted> {
    let mut no_layout = 0;
    for _ in 0..attempts {
        match attempt_placement(grid, word, rng) {
            Ok(placement) => return Ok(placement),
            Err(AttemptFailure::NoEligibleLayout) => no_layout += 1,
            Err(AttemptFailure::Conflict) => {}
        }
    }

    trace!(
        "{word}: {attempts} attempts failed in a {size}x{size} grid ({no_layout} had no fitting layout)",
        size = grid.size()
    );
    Err(AttemptsExhausted { attempts })
}
