use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Failed to open word list '{path}': {source}", path = path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read word list: {0}")]
    Read(#[from] io::Error),

    #[error("No matching {length}-letter words found in word list")]
    NoMatchingWords { length: usize },
}

/// A sorted dictionary of lowercase words that all have the same length.
///
/// This is the shape of input the search engine expects. A `WordList` is never empty.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    word_length: usize,
    excluded: usize,
}

impl WordList {
    /// Reads one word per line, keeping the `length`-letter ones.
    ///
    /// Lines are trimmed and lowercased first, and length is measured in bytes. Words of the right length that contain
    /// anything other than `a..=z` are dropped and counted in [`WordList::excluded`]. The
    /// result is sorted; duplicate lines are kept.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Read`] if the reader fails, or
    /// [`WordListError::NoMatchingWords`] if no line yields a usable word.
    pub fn parse_from_reader(reader: impl BufRead, length: usize) -> Result<Self, WordListError> {
        let mut words = Vec::new();
        let mut excluded = 0;

        for line in reader.lines() {
            let word = line?.trim().to_lowercase();
            if word.len() != length {
                continue;
            }
            if word.bytes().all(|b| b.is_ascii_lowercase()) {
                words.push(word);
            } else {
                excluded += 1;
            }
        }

        if words.is_empty() {
            return Err(WordListError::NoMatchingWords { length });
        }

        words.sort_unstable();
        info!(
            "Loaded {} {}-letter words, excluding {} invalid words.",
            words.len(),
            length,
            excluded
        );

        Ok(Self {
            words,
            word_length: length,
            excluded,
        })
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P, length: usize) -> Result<Self, WordListError> {
        let path = path.as_ref();
        info!("Loading words from {:?}...", path);
        let file = File::open(path).map_err(|source| WordListError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_from_reader(BufReader::new(file), length)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of lines that had the right length but contained non-letters.
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    /// Maps a user-supplied word onto an index of this list.
    ///
    /// `None` or a blank word yields `default`. Otherwise the word is normalized and located
    /// by binary search; if it is not in the list, the index of the first word sorting after
    /// it (or the last word, if none does) is used instead and a warning is logged.
    pub fn resolve_index(&self, word: Option<&str>, default: usize) -> usize {
        let Some(word) = word
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
        else {
            return default;
        };

        let index = self
            .words
            .partition_point(|candidate| candidate.as_str() < word.as_str())
            .min(self.words.len() - 1);

        let found = &self.words[index];
        if *found == word {
            debug!("Resolved {:?} to index {}.", word, index);
        } else {
            warn!("No word {:?} in word list, using {:?}.", word, found);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    const RAW: &str = "  Card\nAREA\nrear\nda-t\ncafé\nlonger\n\nab\nrear\n";

    #[test]
    fn parse_normalizes_filters_and_sorts() {
        let list = WordList::parse_from_reader(Cursor::new(RAW), 4).unwrap();
        assert_eq!(list.words(), ["area", "card", "rear", "rear"]);
        assert_eq!(list.excluded(), 1);
        assert_eq!(list.word_length(), 4);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn word_length_counts_bytes_not_characters() {
        // "café" is four characters but five bytes long.
        let list = WordList::parse_from_reader(Cursor::new("café
bread
"), 5).unwrap();
        assert_eq!(list.words(), ["bread"]);
        assert_eq!(list.excluded(), 1);

        let list = WordList::parse_from_reader(Cursor::new("café
bake
"), 4).unwrap();
        assert_eq!(list.words(), ["bake"]);
        assert_eq!(list.excluded(), 0);
    }

    #[test]
    fn parse_without_matching_words_is_an_error() {
        let result = WordList::parse_from_reader(Cursor::new(RAW), 9);
        assert!(matches!(
            result,
            Err(WordListError::NoMatchingWords { length: 9 })
        ));
    }

    #[test]
    fn load_from_path_reads_file_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "zebra\napple\nmango\nkiwi\n").unwrap();

        let list = WordList::load_from_path(file.path(), 5).unwrap();
        assert_eq!(list.into_words(), vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn load_from_missing_path_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        match WordList::load_from_path(&missing, 5) {
            Err(WordListError::Open { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected an open error, got {other:?}"),
        }
    }

    #[test]
    fn resolve_index_handles_exact_missing_and_default_words() {
        let list = WordList::parse_from_reader(Cursor::new("bake\ncake\nlake\nmake\n"), 4).unwrap();

        assert_eq!(list.resolve_index(None, 3), 3);
        assert_eq!(list.resolve_index(Some("   "), 0), 0);
        assert_eq!(list.resolve_index(Some("cake"), 0), 1);
        assert_eq!(list.resolve_index(Some(" LAKE "), 0), 2);
        // Not present: the next word in sort order is used.
        assert_eq!(list.resolve_index(Some("dove"), 0), 2);
        assert_eq!(list.resolve_index(Some("aaaa"), 3), 0);
        // Past the end: clamps to the last word.
        assert_eq!(list.resolve_index(Some("zzzz"), 0), 3);
    }
}
