use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Text indexed when no input file is supplied
pub const SAMPLE_TEXT: &str = "Given an arbitrary text document written in English,
write a program that will generate a concordance, i.e. an alphabetical
list of all word occurrences, labeled with word frequencies. Bonus:
label each word with the sentence numbers in which each occurrence
appeared.";

/// Errors raised while obtaining the input text
#[derive(Debug, Error)]
pub enum ReadError {
    /// The input file is missing, unreadable, or not valid UTF-8
    #[error("input unavailable: {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the raw text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Built-in sample text
    Sample,
    /// Whole contents of a file
    File(PathBuf),
}

impl InputSource {
    /// Resolve the CLI inputs; `force_sample` wins over a supplied path
    pub fn from_args(path: Option<PathBuf>, force_sample: bool) -> Self {
        match path {
            Some(path) if !force_sample => Self::File(path),
            _ => Self::Sample,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Sample => "<sample>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Configuration for input reading behavior
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Decode invalid UTF-8 with U+FFFD replacement characters instead of failing
    pub lossy_utf8: bool,
}

/// Statistics for one input read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub source: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Read the raw text for a source
pub async fn read_input(
    source: &InputSource,
    config: &ReaderConfig,
) -> Result<(String, ReadStats), ReadError> {
    let start_time = std::time::Instant::now();

    let text = match source {
        InputSource::Sample => {
            debug!("No input file supplied, using sample text");
            SAMPLE_TEXT.to_string()
        }
        InputSource::File(path) => read_file_to_string(path, config).await?,
    };

    let stats = ReadStats {
        source: source.describe(),
        bytes_read: text.len() as u64,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    info!(
        "Read {}: {} bytes in {}ms",
        stats.source, stats.bytes_read, stats.duration_ms
    );
    Ok((text, stats))
}

/// Read a whole file as text
/// Invalid UTF-8 fails unless `config.lossy_utf8` is set.
pub async fn read_file_to_string<P: AsRef<Path>>(
    file_path: P,
    config: &ReaderConfig,
) -> Result<String, ReadError> {
    let path = file_path.as_ref();
    debug!("Starting async read of file: {}", path.display());

    let unavailable = |source: std::io::Error| {
        warn!("Failed to read file {}: {}", path.display(), source);
        ReadError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        }
    };

    let bytes = tokio::fs::read(path).await.map_err(unavailable)?;

    if config.lossy_utf8 {
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }

    String::from_utf8(bytes)
        .map_err(|e| unavailable(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
