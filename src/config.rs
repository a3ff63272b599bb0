//! Build options shared by the library and the CLI.

/// Grid sizes tried past the starting size when no cap is given.
pub const DEFAULT_SIZE_HEADROOM: usize = 64;

/// Options for [`crate::build_puzzle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    /// Smallest grid size to try. The longest word raises it if needed.
    pub min_size: usize,
    /// Largest grid size to try before giving up.
    ///
    /// `None` means [`DEFAULT_SIZE_HEADROOM`] sizes past the starting size.
    pub size_cap: Option<usize>,
    /// Replace blank cells with random letters once every word is placed.
    pub fill_gaps: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            min_size: 1,
            size_cap: None,
            fill_gaps: false,
        }
    }
}

impl BuildConfig {
    pub fn with_min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn with_size_cap(mut self, size_cap: usize) -> Self {
        self.size_cap = Some(size_cap);
        self
    }

    pub fn with_fill_gaps(mut self, fill_gaps: bool) -> Self {
        self.fill_gaps = fill_gaps;
        self
    }

    /// First grid size to try for words whose longest has `longest_word` letters.
    pub fn start_size(&self, longest_word: usize) -> usize {
        self.min_size.max(longest_word)
    }

    /// Last grid size to try, given the starting size.
    pub fn effective_cap(&self, start_size: usize) -> usize {
        self.size_cap
            .unwrap_or_else(|| start_size.saturating_add(DEFAULT_SIZE_HEADROOM))
    }
}
