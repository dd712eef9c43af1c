//! Tokenization of raw text lines into normalized word tokens.
//!
//! Every downstream count depends on this step, so both functions are
//! public and independently testable. Tokenization is ASCII-letter only:
//! digits, punctuation, and non-ASCII characters all act as separators.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for maximal runs of non-ASCII-letter characters.
static NON_LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z]+").expect("valid regex"));

/// Replace every maximal run of non-ASCII-letter characters with a single
/// space. Case is preserved; lowercasing happens later in [`tokenize_line`].
pub fn replace_non_letters(text: &str) -> String {
    NON_LETTER_RUN.replace_all(text, " ").into_owned()
}

/// Tokenize one line of text into normalized words.
///
/// Lowercases the line, collapses non-letter runs to single spaces, and
/// splits on whitespace, discarding empty fragments. Pure function of its
/// input; no length filtering happens here.
pub fn tokenize_line(line: &str) -> Vec<String> {
    replace_non_letters(&line.to_lowercase())
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
