// WHY: Sentence splitting for concordance numbering
// Candidate boundaries come from a compiled regex; abbreviation exemptions are checked on the preceding chars

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::debug;

pub mod abbreviations;
pub mod normalization;

pub use abbreviations::AbbreviationChecker;
pub use normalization::{normalize_text, normalize_text_into};

/// Period or question mark followed by exactly one whitespace character
/// `\s` is Unicode-aware, so a non-breaking space after `.` is a boundary as well.
/// WHY: `!` is deliberately absent; an exclamation mark never ends a sentence on its own
const BOUNDARY_PATTERN: &str = r"[.?]\s";

/// Splits normalized text into sentences
pub struct SentenceSplitter {
    /// Compiled candidate boundary matcher
    boundary: Regex,
    abbreviations: AbbreviationChecker,
}

impl SentenceSplitter {
    /// Compile the boundary pattern
    pub fn new() -> Result<Self> {
        let boundary = Regex::new(BOUNDARY_PATTERN)?;
        debug!("Compiled sentence boundary pattern: {}", BOUNDARY_PATTERN);

        Ok(Self {
            boundary,
            abbreviations: AbbreviationChecker::new(),
        })
    }

    /// Split text into sentences, borrowing from the input
    ///
    /// The boundary punctuation stays with its sentence and the single whitespace
    /// character after it is dropped. Empty sentences are kept: callers number every
    /// element. The result always holds at least one element, `[""]` for empty input.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut sentence_start = 0;

        for candidate in self.boundary.find_iter(text) {
            // '.' and '?' are one byte wide
            let punct_end = candidate.start() + 1;

            if self.abbreviations.is_exempt(&text[..punct_end]) {
                continue;
            }

            sentences.push(&text[sentence_start..punct_end]);
            sentence_start = candidate.end();
        }

        sentences.push(&text[sentence_start..]);

        debug!("Split {} bytes into {} sentences", text.len(), sentences.len());
        sentences
    }
}
