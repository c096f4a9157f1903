use std::io::{BufRead, Write};

use anyhow::Context;
use garble_core::{
    EnglishWordValidationStrategy, Strategy, WordListDictionary, WordValidationConfig,
};
use garble_logging::{garble_debug, garble_info};

use crate::args::Args;

/// Classifies every text from `args` (or every non-empty `input` line when
/// no texts were given) and writes one result line per text to `out`.
pub fn run<R: BufRead, W: Write>(args: &Args, input: R, mut out: W) -> anyhow::Result<()> {
    let strategy = build_strategy(args)?;
    garble_info!(
        "Classifying with {} (threshold={}, {} dictionary words)",
        strategy.name(),
        strategy.config().valid_word_threshold(),
        strategy.dictionary().len()
    );

    if args.texts.is_empty() {
        for line in input.lines() {
            let line = line.context("failed to read stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            writeln!(out, "{}", format_result(&strategy, &line, args.score))?;
        }
    } else {
        for text in &args.texts {
            writeln!(out, "{}", format_result(&strategy, text, args.score))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn build_strategy(args: &Args) -> anyhow::Result<EnglishWordValidationStrategy<WordListDictionary>> {
    let config = resolve_config(args)?;
    let mut dictionary = match &args.dictionary {
        Some(path) => WordListDictionary::load(path)
            .with_context(|| format!("failed to load dictionary {}", path.display()))?,
        None => {
            garble_debug!("No dictionary given, using the built-in word list");
            WordListDictionary::common_english()
        }
    };
    if args.lenient {
        dictionary = dictionary.spell_checker_compatible();
    }
    Ok(EnglishWordValidationStrategy::new(dictionary, config))
}

/// Built-in default, then the config file, then `--threshold`.
fn resolve_config(args: &Args) -> anyhow::Result<WordValidationConfig> {
    let config = match &args.config {
        Some(path) => WordValidationConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => WordValidationConfig::default(),
    };
    match args.threshold {
        Some(threshold) => {
            WordValidationConfig::new(threshold).context("invalid --threshold value")
        }
        None => Ok(config),
    }
}

fn format_result<S: Strategy>(strategy: &S, text: &str, score: bool) -> String {
    if score {
        format!("{:.4}\t{}", strategy.predict_proba(text), text)
    } else {
        let verdict = if strategy.predict(text) {
            "valid"
        } else {
            "garbled"
        };
        format!("{verdict}\t{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn run_to_string(argv: &[&str], stdin: &str) -> anyhow::Result<String> {
        let args = Args::try_parse_from(std::iter::once("garble").chain(argv.iter().copied()))?;
        let mut out = Vec::new();
        run(&args, stdin.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn prints_verdicts_for_positional_texts() {
        garble_logging::initialize_for_tests();
        let output = run_to_string(&["The cat sat on the mat", "zxq vbn"], "").unwrap();
        assert_eq!(output, "valid\tThe cat sat on the mat\ngarbled\tzxq vbn\n");
    }

    #[test]
    fn reads_non_empty_stdin_lines_when_no_texts_given() {
        let output = run_to_string(&["--score"], "the dog\n\n   \nqq zz\n").unwrap();
        assert_eq!(output, "1.0000\tthe dog\n0.0000\tqq zz\n");
    }

    #[test]
    fn threshold_flag_overrides_config_file() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("garble.ron");
        fs::write(&config, "(valid_word_threshold: 0.9)").unwrap();
        let words = temp.path().join("words.txt");
        fs::write(&words, "has\nseen\ncat\n").unwrap();
        let config = config.to_str().unwrap();
        let words = words.to_str().unwrap();

        let from_file =
            run_to_string(&["--config", config, "--dictionary", words, "I has seen teh cat"], "")
                .unwrap();
        assert_eq!(from_file, "garbled\tI has seen teh cat\n");

        let overridden = run_to_string(
            &[
                "--config",
                config,
                "--dictionary",
                words,
                "--threshold",
                "0.5",
                "I has seen teh cat",
            ],
            "",
        )
        .unwrap();
        assert_eq!(overridden, "valid\tI has seen teh cat\n");
    }

    #[test]
    fn lenient_flag_passes_over_overlong_words() {
        let temp = TempDir::new().unwrap();
        let words = temp.path().join("words.txt");
        fs::write(&words, "cat\nsat\n").unwrap();
        let words = words.to_str().unwrap();
        let text = "cat sat qwertyuiop";

        let strict = run_to_string(&["--dictionary", words, "--score", text], "").unwrap();
        assert_eq!(strict, format!("0.6667\t{text}\n"));

        let lenient =
            run_to_string(&["--dictionary", words, "--score", "--lenient", text], "").unwrap();
        assert_eq!(lenient, format!("1.0000\t{text}\n"));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = run_to_string(&["--threshold", "1.5", "hello"], "").unwrap_err();
        assert!(format!("{err:#}").contains("invalid --threshold value"));
    }

    #[test]
    fn missing_dictionary_is_reported_with_its_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.txt");
        let err = run_to_string(&["--dictionary", missing.to_str().unwrap(), "hi"], "")
            .unwrap_err();
        assert!(format!("{err:#}").contains("nope.txt"));
    }
}
