//! Input words: validation and line-oriented reading.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use log::info;
use rustc_hash::FxHashMap;

use crate::error::WordError;

/// A validated word: one or more ASCII letters, stored uppercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    /// Validates `text` against `^[A-Za-z]+$` and uppercases it.
    pub fn new(text: &str) -> Result<Self, WordError> {
        if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_alphabetic()) {
            return Err(WordError::Invalid {
                word: text.to_string(),
            });
        }
        Ok(Self(text.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Letters as ASCII bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; an empty word never validates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Word::new(text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates a list of strings, keeping their order.
pub fn parse_words<S: AsRef<str>>(texts: &[S]) -> Result<Vec<Word>, WordError> {
    texts.iter().map(|text| Word::new(text.as_ref())).collect()
}

/// Reads one word per line.
///
/// Surrounding whitespace is trimmed and blank lines are skipped. The first
/// invalid line is reported with its 1-based line number. Duplicates are kept,
/// since each occurrence is placed on its own.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<Word>, WordError> {
    let mut words = Vec::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let word = Word::new(text).map_err(|_| WordError::InvalidLine {
            line: line_index + 1,
            word: text.to_string(),
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(WordError::Empty);
    }

    log_duplicates(&words);
    Ok(words)
}

fn log_duplicates(words: &[Word]) {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for word in words {
        *counts.entry(word.as_str()).or_default() += 1;
    }

    let mut duplicates: Vec<_> = counts.into_iter().filter(|&(_, count)| count > 1).collect();
    duplicates.sort_unstable();
    for (word, count) in duplicates {
        info!("{word} appears {count} times; each occurrence is placed separately");
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_word_is_uppercased() {
        let word = Word::new("Cat").unwrap();
        assert_eq!(word.as_str(), "CAT");
        assert_eq!(word.len(), 3);
        assert_eq!(word.to_string(), "CAT");
    }

    #[test]
    fn test_word_rejects_non_letters() {
        for text in ["", "cat dog", "c4t", "café", "-"] {
            assert!(
                matches!(Word::new(text), Err(WordError::Invalid { .. })),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_read_words_keeps_order_and_duplicates() {
        let input = Cursor::new("cat\n  dog \n\ncat\r\n");
        let words = read_words(input).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(texts, ["CAT", "DOG", "CAT"]);
    }

    #[test]
    fn test_read_words_reports_line_number() {
        let input = Cursor::new("cat\ndog\nb1rd\n");
        match read_words(input) {
            Err(WordError::InvalidLine { line, word }) => {
                assert_eq!(line, 3);
                assert_eq!(word, "b1rd");
            }
            other => panic!("expected InvalidLine, got {other:?}"),
        }
    }

    #[test]
    fn test_read_words_empty_input() {
        assert!(matches!(read_words(Cursor::new("\n\n")), Err(WordError::Empty)));
    }

    #[test]
    fn test_parse_words() {
        let words = parse_words(&["a", "Bc"]).unwrap();
        assert_eq!(words, vec![Word::new("A").unwrap(), Word::new("BC").unwrap()]);
        assert!(parse_words(&["ok", "no!"]).is_err());
    }
}
