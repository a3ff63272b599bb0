//! Fills blank cells with random letters so placed words blend in.

use rand::Rng;

use crate::grid::{Grid, BLANK};

/// Letters used for filler cells.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns a copy of `grid` with every blank cell replaced by a random letter.
///
/// Cells that already hold a letter are left alone, so filling a full grid
/// changes nothing.
pub fn fill_gaps<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Grid {
    let mut filled = grid.clone();
    fill_gaps_in_place(&mut filled, rng);
    filled
}

pub(crate) fn fill_gaps_in_place<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    for cell in grid.cells_mut().iter_mut().filter(|cell| **cell == BLANK) {
        *cell = ALPHABET[rng.gen_range(0..ALPHABET.len())];
    }
}
