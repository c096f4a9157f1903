use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use garble_logging::{garble_debug, garble_info};
use thiserror::Error;

static ENGLISH_WORDS: &str = include_str!("../data/english_words.txt");

/// Extra length spell-check word-frequency engines allow past the longest
/// known word before they stop checking a word.
pub const SPELL_CHECKER_OVERLONG_SLACK: usize = 3;

/// Word-validity lookups consumed by the dictionary-backed strategies.
///
/// Implementations must answer concurrent read-only queries; strategies are
/// shared across threads.
pub trait Dictionary: Send + Sync {
    /// Returns the words from `words` that are not recognized, each distinct
    /// word at most once.
    fn unknown<'w>(&self, words: &'w [String]) -> HashSet<&'w str>;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn unknown<'w>(&self, words: &'w [String]) -> HashSet<&'w str> {
        (**self).unknown(words)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn unknown<'w>(&self, words: &'w [String]) -> HashSet<&'w str> {
        (**self).unknown(words)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    fn unknown<'w>(&self, words: &'w [String]) -> HashSet<&'w str> {
        (**self).unknown(words)
    }
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid word frequency json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dictionary contains no words")]
    Empty,
}

/// In-memory, case-insensitive word set.
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: HashSet<String>,
    longest_word: usize,
    overlong_slack: Option<usize>,
    skip_nan: bool,
}

impl WordListDictionary {
    /// Builds a dictionary from arbitrary words. Words are trimmed and
    /// lowercased; empty entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        let longest_word = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
        Self {
            words,
            longest_word,
            overlong_slack: None,
            skip_nan: false,
        }
    }

    /// Parses a plain word list: one word per line, blank lines and lines
    /// starting with `#` ignored.
    pub fn from_word_list(text: &str) -> Result<Self, DictionaryError> {
        let dictionary = Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        dictionary.non_empty()
    }

    /// Parses a word-frequency JSON object (`{"word": count, ...}`), keeping
    /// words seen at least `min_count` times.
    pub fn from_frequency_json(json: &str, min_count: u64) -> Result<Self, DictionaryError> {
        let frequencies: BTreeMap<String, u64> = serde_json::from_str(json)?;
        let total = frequencies.len();
        let dictionary = Self::from_words(
            frequencies
                .into_iter()
                .filter(|(_, count)| *count >= min_count)
                .map(|(word, _)| word),
        );
        garble_debug!(
            "Kept {} of {} frequency entries (min_count={})",
            dictionary.len(),
            total,
            min_count
        );
        dictionary.non_empty()
    }

    /// Loads a dictionary file. `.json` files are read as word-frequency
    /// objects, anything else as a plain word list.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let dictionary = if is_json {
            Self::from_frequency_json(&content, 1)?
        } else {
            Self::from_word_list(&content)?
        };
        garble_info!("Loaded {} dictionary words from {:?}", dictionary.len(), path);
        Ok(dictionary)
    }

    /// Built-in English word list (about 18,600 word forms, inflections
    /// included).
    pub fn common_english() -> Self {
        Self::from_words(
            ENGLISH_WORDS
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Stops reporting words longer than the longest known word plus `slack`
    /// characters as unknown; such words are passed over instead of flagged.
    pub fn with_overlong_leniency(mut self, slack: usize) -> Self {
        self.overlong_slack = Some(slack);
        self
    }

    /// Checks words the way spell-check word-frequency engines do: words
    /// longer than the longest known word plus
    /// [`SPELL_CHECKER_OVERLONG_SLACK`] and the literal `nan` are never
    /// reported unknown.
    pub fn spell_checker_compatible(mut self) -> Self {
        self.skip_nan = true;
        self.with_overlong_leniency(SPELL_CHECKER_OVERLONG_SLACK)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn is_checked(&self, word: &str) -> bool {
        if self.skip_nan && word.eq_ignore_ascii_case("nan") {
            return false;
        }
        !self
            .overlong_slack
            .is_some_and(|slack| word.chars().count() > self.longest_word + slack)
    }

    fn non_empty(self) -> Result<Self, DictionaryError> {
        if self.is_empty() {
            Err(DictionaryError::Empty)
        } else {
            Ok(self)
        }
    }
}

impl Dictionary for WordListDictionary {
    fn unknown<'w>(&self, words: &'w [String]) -> HashSet<&'w str> {
        words
            .iter()
            .map(String::as_str)
            .filter(|word| self.is_checked(word) && !self.contains(word))
            .collect()
    }
}
