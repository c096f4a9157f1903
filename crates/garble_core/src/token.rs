//! Word tokenizer used by the dictionary-backed strategies.

/// Extracts lowercase word tokens from `text`.
///
/// The whole text is case folded first, then every maximal run of ASCII
/// letters becomes one token. Everything else (digits, underscores,
/// punctuation, whitespace, non-ASCII letters) separates tokens and is
/// dropped. Tokens come back in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let folded = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in folded.char_indices() {
        if c.is_ascii_lowercase() {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            tokens.push(folded[s..i].to_string());
        }
    }
    if let Some(s) = start {
        tokens.push(folded[s..].to_string());
    }

    tokens
}
