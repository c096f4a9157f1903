//! English word validation: text is plausible when enough of its words are
//! dictionary words.

use garble_logging::{garble_debug, garble_trace};

use crate::config::WordValidationConfig;
use crate::dictionary::{Dictionary, WordListDictionary};
use crate::strategy::Strategy;
use crate::token::tokenize;

/// Word counts behind a validity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordValidity {
    pub total_words: usize,
    pub valid_words: usize,
}

impl WordValidity {
    pub fn unknown_words(&self) -> usize {
        self.total_words - self.valid_words
    }

    /// Share of recognized words; `0.0` when there are no words at all.
    pub fn score(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.valid_words as f64 / self.total_words as f64
    }

    /// Text without words never passes, whatever the threshold.
    pub fn passes(&self, threshold: f64) -> bool {
        self.total_words > 0 && self.score() >= threshold
    }
}

/// Tokenizes `text` and counts how many tokens `dictionary` recognizes.
///
/// Every occurrence counts: a misspelling repeated three times costs three
/// words even though the dictionary reports it once.
pub fn validity_report<D: Dictionary + ?Sized>(text: &str, dictionary: &D) -> WordValidity {
    let words = tokenize(text);
    if words.is_empty() {
        garble_trace!("No word tokens in {} bytes of text", text.len());
        return WordValidity::default();
    }

    let unknown = dictionary.unknown(&words);
    let unknown_occurrences = words
        .iter()
        .filter(|word| unknown.contains(word.as_str()))
        .count();
    garble_debug!(
        "Scored {} words: {} distinct unknown, {} unknown occurrences",
        words.len(),
        unknown.len(),
        unknown_occurrences
    );

    WordValidity {
        total_words: words.len(),
        valid_words: words.len() - unknown_occurrences,
    }
}

pub fn validity_score<D: Dictionary + ?Sized>(text: &str, dictionary: &D) -> f64 {
    validity_report(text, dictionary).score()
}

pub fn is_valid<D: Dictionary + ?Sized>(text: &str, dictionary: &D, threshold: f64) -> bool {
    validity_report(text, dictionary).passes(threshold)
}

/// Strategy classifying text by its share of dictionary words.
#[derive(Debug, Clone)]
pub struct EnglishWordValidationStrategy<D> {
    dictionary: D,
    config: WordValidationConfig,
}

impl<D: Dictionary> EnglishWordValidationStrategy<D> {
    pub fn new(dictionary: D, config: WordValidationConfig) -> Self {
        Self { dictionary, config }
    }

    pub fn with_default_config(dictionary: D) -> Self {
        Self::new(dictionary, WordValidationConfig::default())
    }

    pub fn config(&self) -> &WordValidationConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    pub fn report(&self, text: &str) -> WordValidity {
        validity_report(text, &self.dictionary)
    }
}

impl EnglishWordValidationStrategy<WordListDictionary> {
    /// Strategy backed by the built-in English word list.
    pub fn common_english(config: WordValidationConfig) -> Self {
        Self::new(WordListDictionary::common_english(), config)
    }
}

impl<D: Dictionary> Strategy for EnglishWordValidationStrategy<D> {
    fn name(&self) -> &'static str {
        "english_word_validation"
    }

    fn predict(&self, text: &str) -> bool {
        let threshold = self.config.valid_word_threshold();
        let verdict = self.report(text).passes(threshold);
        garble_trace!("{} verdict={} threshold={}", self.name(), verdict, threshold);
        verdict
    }

    fn predict_proba(&self, text: &str) -> f64 {
        self.report(text).score()
    }
}
