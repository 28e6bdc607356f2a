use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the filtering pipeline.
///
/// Every variant is fatal for the run; the driver prints it and exits
/// non-zero. No partial output is written once an error occurs.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Rule file missing or unreadable.
    #[error("failed to read rule file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rule pattern did not compile.
    #[error("invalid filter pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Input document is not valid JSON.
    #[error("failed to parse analysis JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Input parsed as JSON but is not shaped like an analysis document.
    #[error("malformed analysis document: {0}")]
    MalformedInput(String),

    /// Reading the input or writing the output failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}
