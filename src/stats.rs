// WHY: Run statistics written alongside the report when requested
// Mirrors the concordance summary plus input and timing details

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::concordance::ConcordanceStats;
use crate::reader::ReadStats;

/// Statistics for one program run
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunStats {
    /// Input file path, or `<sample>`
    pub input: String,
    pub bytes_read: u64,
    /// Sentences produced by the splitter, empty ones included
    pub sentences: usize,
    pub word_occurrences: usize,
    pub distinct_words: usize,
    /// Build time in milliseconds, excluding the input read
    pub processing_time_ms: u64,
    /// Throughput in bytes per second
    pub bytes_per_sec: f64,
}

impl RunStats {
    pub fn new(read: &ReadStats, concordance: ConcordanceStats, processing_time_ms: u64) -> Self {
        let bytes_per_sec = if processing_time_ms > 0 {
            read.bytes_read as f64 / (processing_time_ms as f64 / 1000.0)
        } else {
            0.0
        };

        Self {
            input: read.source.clone(),
            bytes_read: read.bytes_read,
            sentences: concordance.sentences,
            word_occurrences: concordance.word_occurrences,
            distinct_words: concordance.distinct_words,
            processing_time_ms,
            bytes_per_sec,
        }
    }

    /// Write stats as pretty-printed JSON
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(path, content).await?;
        Ok(())
    }
}
