use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Classify text as English prose or garble by its share of dictionary words.
#[derive(Debug, Parser)]
#[command(name = "garble", version)]
pub struct Args {
    /// Minimum share of dictionary words, in [0, 1]. Overrides the config file.
    #[arg(long)]
    pub threshold: Option<f64>,
    /// RON config file, e.g. `(valid_word_threshold: 0.6)`.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Word list (one word per line) or word-frequency `.json` file.
    /// Defaults to a built-in list of frequent English words.
    #[arg(long)]
    pub dictionary: Option<PathBuf>,
    /// Print validity scores instead of verdicts.
    #[arg(long)]
    pub score: bool,
    /// Never flag `nan` or words much longer than any dictionary word,
    /// matching spell-check word-frequency engines.
    #[arg(long)]
    pub lenient: bool,
    /// Log verbosity.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
    /// Also write logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Texts to classify. Reads one text per stdin line when omitted.
    pub texts: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
