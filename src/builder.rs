//! Grid sizing loop.
//!
//! Words are placed in input order into a fresh blank grid. If any word runs
//! out of attempts, the whole grid is thrown away and the next size up is
//! tried, until every word fits or the size cap is passed.

use log::debug;
use rand::Rng;

use crate::config::BuildConfig;
use crate::error::PuzzleError;
use crate::filler;
use crate::geometry::{Coord, Layout};
use crate::grid::Grid;
use crate::placer::{max_attempts, place_word};
use crate::words::Word;

/// Where one occurrence of a word was placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hint {
    pub word: Word,
    pub start: Coord,
    pub layout: Layout,
}

impl Hint {
    /// Cell of each letter, in letter order.
    pub fn positions(&self) -> impl Iterator<Item = Coord> + '_ {
        self.layout.positions(self.start, self.word.len())
    }
}

/// A finished puzzle: the grid plus one hint per input word, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub hints: Vec<Hint>,
    /// Number of grid sizes tried, including the successful one.
    pub rounds: usize,
}

impl Puzzle {
    /// Replaces every blank cell with a random letter.
    pub fn fill_gaps<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        filler::fill_gaps_in_place(&mut self.grid, rng);
    }
}

/// State of the sizing loop.
enum SizingState {
    /// Try to place every word in a fresh grid of this size.
    Sizing(usize),
    /// Every word placed.
    Success(Puzzle),
}

/// Places every word into a fresh `size x size` grid.
///
/// On failure returns the index of the first word that ran out of attempts;
/// the partial grid is dropped with it.
pub fn place_all<R: Rng + ?Sized>(
    words: &[Word],
    size: usize,
    rng: &mut R,
) -> Result<(Grid, Vec<Hint>), usize> {
    let mut grid = Grid::new(size);
    let mut hints = Vec::with_capacity(words.len());

    for (index, word) in words.iter().enumerate() {
        let placement = place_word(&mut grid, word, max_attempts(size), rng).map_err(|_| index)?;
        hints.push(Hint {
            word: word.clone(),
            start: placement.start,
            layout: placement.layout,
        });
    }

    Ok((grid, hints))
}

/// Builds a puzzle containing every word.
///
/// Sizes are tried one at a time from `max(min_size, longest word)` up to the
/// configured cap. Earlier words constrain later ones, so input order affects
/// the result.
pub fn build_puzzle<R: Rng + ?Sized>(
    words: &[Word],
    config: &BuildConfig,
    rng: &mut R,
) -> Result<Puzzle, PuzzleError> {
    let longest = words
        .iter()
        .max_by_key(|word| word.len())
        .ok_or(PuzzleError::EmptyWordList)?;
    let start_size = config.start_size(longest.len());
    let cap = config.effective_cap(start_size);

    let mut last_failed = longest;
    let mut rounds = 0;
    let mut state = SizingState::Sizing(start_size);

    loop {
        state = match state {
            SizingState::Sizing(size) if size > cap => {
                return Err(PuzzleError::SizeCapExceeded {
                    cap,
                    word: last_failed.to_string(),
                });
            }
            SizingState::Sizing(size) => {
                rounds += 1;
                match place_all(words, size, rng) {
                    Ok((grid, hints)) => SizingState::Success(Puzzle {
                        grid,
                        hints,
                        rounds,
                    }),
                    Err(index) => {
                        last_failed = &words[index];
                        debug!("{size}x{size}: could not place {last_failed}, growing grid");
                        SizingState::Sizing(size + 1)
                    }
                }
            }
            SizingState::Success(mut puzzle) => {
                if config.fill_gaps {
                    puzzle.fill_gaps(rng);
                }
                debug!(
                    "placed {} words in a {size}x{size} grid after {rounds} round(s)",
                    puzzle.hints.len(),
                    size = puzzle.grid.size()
                );
                return Ok(puzzle);
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::grid::BLANK;
    use crate::words::parse_words;

    fn words(texts: &[&str]) -> Vec<Word> {
        parse_words(texts).unwrap()
    }

    fn assert_hints_read_back(puzzle: &Puzzle) {
        for hint in &puzzle.hints {
            let read = puzzle.grid.read(hint.start, hint.layout, hint.word.len());
            assert_eq!(
                read,
                hint.word.as_str(),
                "{} at {:?} {} reads back as {read:?}",
                hint.word,
                hint.start,
                hint.layout
            );
        }
    }

    #[test]
    fn test_cat_and_dog() {
        let mut rng = StdRng::seed_from_u64(10);
        let config = BuildConfig::default().with_min_size(3);
        let puzzle = build_puzzle(&words(&["cat", "dog"]), &config, &mut rng).unwrap();

        assert!(puzzle.grid.size() >= 3);
        assert_eq!(puzzle.hints.len(), 2);
        assert_eq!(puzzle.hints[0].word.as_str(), "CAT");
        assert_eq!(puzzle.hints[1].word.as_str(), "DOG");
        assert_hints_read_back(&puzzle);
    }

    #[test]
    fn test_single_letter_one_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let puzzle = build_puzzle(&words(&["a"]), &BuildConfig::default(), &mut rng).unwrap();

        assert_eq!(puzzle.grid.size(), 1);
        assert_eq!(puzzle.grid.cells(), b"A");
        assert_eq!(puzzle.hints[0].start, (0, 0));
        assert_eq!(puzzle.rounds, 1);
    }

    #[test]
    fn test_long_word_grows_grid() {
        let mut rng = StdRng::seed_from_u64(12);
        let word = "supercalifragilisticexpialidocious";
        let puzzle = build_puzzle(&words(&[word]), &BuildConfig::default(), &mut rng).unwrap();

        assert!(puzzle.grid.size() >= word.len());
        assert_eq!(puzzle.grid.size(), word.len() + puzzle.rounds - 1);
        assert_hints_read_back(&puzzle);
    }

    #[test]
    fn test_empty_word_list_is_rejected() {
        let mut rng = StdRng::seed_from_u64(13);
        assert_eq!(
            build_puzzle(&[], &BuildConfig::default(), &mut rng),
            Err(PuzzleError::EmptyWordList)
        );
    }

    #[test]
    fn test_cap_below_longest_word() {
        let mut rng = StdRng::seed_from_u64(14);
        let config = BuildConfig::default().with_size_cap(2);
        assert_eq!(
            build_puzzle(&words(&["ab", "abc"]), &config, &mut rng),
            Err(PuzzleError::SizeCapExceeded {
                cap: 2,
                word: "ABC".to_string(),
            })
        );
    }

    #[test]
    fn test_cap_exceeded_when_letters_cannot_fit() {
        // ten distinct letters never fit in nine cells
        let mut rng = StdRng::seed_from_u64(15);
        let config = BuildConfig::default().with_min_size(2).with_size_cap(3);
        let result = build_puzzle(&words(&["ab", "cd", "ef", "gh", "ij"]), &config, &mut rng);
        assert!(
            matches!(result, Err(PuzzleError::SizeCapExceeded { cap: 3, .. })),
            "got {result:?}"
        );
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let list = words(&["rust", "grid", "search", "letter", "word"]);
        let config = BuildConfig::default().with_min_size(4);
        let first = build_puzzle(&list, &config, &mut StdRng::seed_from_u64(16)).unwrap();
        let second = build_puzzle(&list, &config, &mut StdRng::seed_from_u64(16)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_words_get_separate_hints() {
        let mut rng = StdRng::seed_from_u64(17);
        let config = BuildConfig::default().with_min_size(5);
        let puzzle = build_puzzle(&words(&["cat", "dog", "cat"]), &config, &mut rng).unwrap();

        assert_eq!(puzzle.hints.len(), 3);
        assert_eq!(puzzle.hints[0].word, puzzle.hints[2].word);
        assert_hints_read_back(&puzzle);
    }

    #[test]
    fn test_cells_are_blank_or_uppercase() {
        let list = words(&["alpha", "beta", "gamma", "delta", "epsilon", "zeta"]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = build_puzzle(&list, &BuildConfig::default(), &mut rng).unwrap();
            assert!(
                puzzle
                    .grid
                    .cells()
                    .iter()
                    .all(|&cell| cell == BLANK || cell.is_ascii_uppercase()),
                "seed {seed} produced an invalid cell"
            );
            assert_hints_read_back(&puzzle);
            assert_eq!(
                puzzle.grid.size(),
                list.iter().map(Word::len).max().unwrap() + puzzle.rounds - 1
            );
        }
    }

    #[test]
    fn test_fill_gaps_option() {
        let mut rng = StdRng::seed_from_u64(18);
        let config = BuildConfig::default().with_min_size(6).with_fill_gaps(true);
        let puzzle = build_puzzle(&words(&["cat", "dog"]), &config, &mut rng).unwrap();
        assert_eq!(puzzle.grid.blank_count(), 0);
        assert_hints_read_back(&puzzle);
    }

    #[test]
    fn test_round_fails_when_letters_outnumber_cells() {
        let mut rng = StdRng::seed_from_u64(19);
        let result = place_all(&words(&["ab", "cd", "ef"]), 2, &mut rng);
        assert!(result.is_err(), "six distinct letters cannot fit in four cells");
    }
}
