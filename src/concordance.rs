// WHY: Aggregation of per-word occurrence counts and sentence numbers
// Built as a fold over (sentence number, word) pairs into an explicit accumulator

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::sentence_splitter::{normalize_text, SentenceSplitter};
use crate::tokenizer::WordTokenizer;

/// Occurrences of one word
/// `count()` always equals `sentence_numbers().len()`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConcordanceEntry {
    count: usize,
    sentences: Vec<usize>,
}

impl ConcordanceEntry {
    fn first_seen(sentence_number: usize) -> Self {
        Self {
            count: 1,
            sentences: vec![sentence_number],
        }
    }

    fn record(&mut self, sentence_number: usize) {
        self.count += 1;
        self.sentences.push(sentence_number);
    }

    /// Total number of occurrences
    pub fn count(&self) -> usize {
        self.count
    }

    /// 1-based sentence number of every occurrence, in scan order, duplicates kept
    pub fn sentence_numbers(&self) -> &[usize] {
        &self.sentences
    }
}

/// Summary counts for one concordance build
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcordanceStats {
    /// Sentences produced by the splitter, empty ones included
    pub sentences: usize,
    /// Total word occurrences
    pub word_occurrences: usize,
    pub distinct_words: usize,
}

/// Word to occurrence mapping for one input text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Concordance {
    entries: HashMap<String, ConcordanceEntry>,
    sentence_count: usize,
}

impl Concordance {
    pub fn get(&self, word: &str) -> Option<&ConcordanceEntry> {
        self.entries.get(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of sentences scanned, including sentences without words
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Entries sorted ascending by word (byte-wise string order)
    pub fn sorted_entries(&self) -> Vec<(&str, &ConcordanceEntry)> {
        let mut sorted: Vec<_> = self
            .entries
            .iter()
            .map(|(word, entry)| (word.as_str(), entry))
            .collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
        sorted
    }

    pub fn stats(&self) -> ConcordanceStats {
        ConcordanceStats {
            sentences: self.sentence_count,
            word_occurrences: self.entries.values().map(ConcordanceEntry::count).sum(),
            distinct_words: self.entries.len(),
        }
    }

    fn record(&mut self, word: &str, sentence_number: usize) {
        // WHY: look up by &str first so repeated words never allocate a key
        match self.entries.get_mut(word) {
            Some(entry) => entry.record(sentence_number),
            None => {
                self.entries
                    .insert(word.to_string(), ConcordanceEntry::first_seen(sentence_number));
            }
        }
    }
}

/// Drives sentence splitting and tokenization over a whole text
pub struct ConcordanceBuilder {
    splitter: SentenceSplitter,
    tokenizer: WordTokenizer,
}

impl ConcordanceBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            splitter: SentenceSplitter::new()?,
            tokenizer: WordTokenizer::new(),
        })
    }

    /// Normalize raw text (newlines to spaces, lower-case) and build its concordance
    pub fn build(&self, raw_text: &str) -> Concordance {
        let normalized = normalize_text(raw_text);
        self.build_normalized(&normalized)
    }

    /// Build from text that is already newline-free and lower-cased
    pub fn build_normalized(&self, text: &str) -> Concordance {
        let sentences = self.splitter.split(text);
        let mut buffer = String::new();

        // Sentence numbers are 1-based and every split element consumes one
        let concordance = sentences.iter().zip(1..).fold(
            Concordance::default(),
            |mut acc, (sentence, sentence_number)| {
                for word in self.tokenizer.words_into(sentence, &mut buffer) {
                    acc.record(word, sentence_number);
                }
                acc.sentence_count = sentence_number;
                acc
            },
        );

        let stats = concordance.stats();
        debug!(?stats, "Concordance accumulation finished");
        info!(
            "Built concordance: {} distinct words over {} sentences",
            stats.distinct_words, stats.sentences
        );

        concordance
    }
}
