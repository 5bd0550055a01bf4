//! The JSON word-list form of the packed configuration.
//!
//! A document `{"bitstream": ["0000", "3c1e", ...]}` carrying exactly 102
//! four-digit lowercase hex tokens, each one 16-bit word of the store. A
//! bare array of tokens (without the wrapping object) is accepted on load
//! for compatibility with older tool output.

use clb_model::bitmap::BITSTREAM_WORDS;
use clb_model::{ClbError, ClbResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize)]
struct WordDoc<'a> {
    bitstream: &'a [String],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WordDocIn {
    Wrapped { bitstream: Vec<String> },
    Bare(Vec<String>),
}

/// Renders the word list as the JSON document text.
pub fn render_words(words: &[u16]) -> String {
    let tokens: Vec<String> = words.iter().map(|w| format!("{w:04x}")).collect();
    let doc = WordDoc { bitstream: &tokens };
    serde_json::to_string_pretty(&doc).expect("word list serializes")
}

/// Parses the JSON document text into the word list.
///
/// # Errors
///
/// [`ClbError::ParseError`] for malformed JSON or non-hex tokens, and
/// [`ClbError::LengthMismatch`] when the token count does not yield 1632
/// bits.
pub fn parse_words(text: &str) -> ClbResult<Vec<u16>> {
    let doc: WordDocIn = serde_json::from_str(text).map_err(|e| ClbError::parse(e.to_string()))?;
    let tokens = match doc {
        WordDocIn::Wrapped { bitstream } => bitstream,
        WordDocIn::Bare(words) => words,
    };

    if tokens.len() != BITSTREAM_WORDS {
        return Err(ClbError::LengthMismatch {
            actual: tokens.len() * 16,
            expected: BITSTREAM_WORDS * 16,
        });
    }

    tokens
        .iter()
        .map(|t| u16::from_str_radix(t, 16).map_err(|_| ClbError::parse(t.clone())))
        .collect()
}

/// Writes the word list to a JSON file.
pub fn save_words(path: &Path, words: &[u16]) -> ClbResult<()> {
    std::fs::write(path, render_words(words)).map_err(|e| ClbError::io(path, e))
}

/// Reads the word list from a JSON file.
pub fn load_words(path: &Path) -> ClbResult<Vec<u16>> {
    let text = std::fs::read_to_string(path).map_err(|e| ClbError::io(path, e))?;
    parse_words(&text)
}
