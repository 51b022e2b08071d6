//! Concordance report rendering

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::concordance::{Concordance, ConcordanceEntry};

/// Output format for the rendered report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// `word<TAB>{count:s1,s2,...}` per line
    #[default]
    Text,
    /// JSON array of word records
    Json,
}

/// Trait for report formatters; entries arrive sorted by word
pub trait ReportFormatter {
    fn write_entry(&mut self, word: &str, entry: &ConcordanceEntry) -> Result<()>;

    /// Finalize output (e.g., emit the JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Format one report line without the trailing newline
pub fn format_entry(word: &str, entry: &ConcordanceEntry) -> String {
    let sentences = entry
        .sentence_numbers()
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{}\t{{{}:{}}}", word, entry.count(), sentences)
}

/// Plain text formatter - one word per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn write_entry(&mut self, word: &str, entry: &ConcordanceEntry) -> Result<()> {
        writeln!(self.writer, "{}", format_entry(word, entry))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// One word in the JSON report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub count: usize,
    pub sentences: Vec<usize>,
}

/// JSON formatter - collects records and writes one pretty-printed array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<WordRecord>,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn write_entry(&mut self, word: &str, entry: &ConcordanceEntry) -> Result<()> {
        self.records.push(WordRecord {
            word: word.to_string(),
            count: entry.count(),
            sentences: entry.sentence_numbers().to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Render every entry, sorted by word, through a formatter
pub fn render(concordance: &Concordance, formatter: &mut dyn ReportFormatter) -> Result<()> {
    for (word, entry) in concordance.sorted_entries() {
        formatter.write_entry(word, entry)?;
    }
    formatter.finish()
}

/// Write the report in the requested format
pub fn write_report<W: Write>(concordance: &Concordance, format: ReportFormat, writer: W) -> Result<()> {
    match format {
        ReportFormat::Text => render(concordance, &mut TextFormatter::new(writer)),
        ReportFormat::Json => render(concordance, &mut JsonFormatter::new(writer)),
    }
}

/// Render the text report into a string
pub fn render_text(concordance: &Concordance) -> Result<String> {
    let mut buffer = Vec::new();
    write_report(concordance, ReportFormat::Text, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
