pub mod concordance;
pub mod reader;
pub mod report;
pub mod sentence_splitter;
pub mod stats;
pub mod tokenizer;

// Re-export main types for convenient access
pub use concordance::{Concordance, ConcordanceBuilder, ConcordanceEntry, ConcordanceStats};
pub use sentence_splitter::{normalize_text, SentenceSplitter};
pub use tokenizer::WordTokenizer;

// Re-export input and output collaborators
pub use reader::{read_input, InputSource, ReadError, ReadStats, ReaderConfig, SAMPLE_TEXT};
pub use report::{format_entry, render_text, write_report, ReportFormat};
pub use stats::RunStats;
