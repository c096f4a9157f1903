//! Garble core: text-quality strategies that tell prose from noise.
mod config;
mod dictionary;
mod english;
mod strategy;
mod token;

pub use config::{ConfigError, WordValidationConfig, DEFAULT_VALID_WORD_THRESHOLD};
pub use dictionary::{
    Dictionary, DictionaryError, WordListDictionary, SPELL_CHECKER_OVERLONG_SLACK,
};
pub use english::{
    is_valid, validity_report, validity_score, EnglishWordValidationStrategy, WordValidity,
};
pub use strategy::Strategy;
pub use token::tokenize;
