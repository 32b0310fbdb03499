/// Error types for source loading and normalization
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for source export operations
#[derive(Error, Debug)]
pub enum SourceError {
    /// The export file is missing or unreadable
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither the comma nor the semicolon convention yielded a usable table
    #[error("Could not parse {} as comma- or semicolon-delimited text", path.display())]
    Delimiter { path: PathBuf },

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required canonical column has no recognized alias in the header
    #[error("{dataset} export has no '{canonical}' column (accepted names: {aliases})")]
    MissingColumn {
        dataset: &'static str,
        canonical: &'static str,
        aliases: String,
    },
}

/// Type alias for Results using SourceError
pub type Result<T> = std::result::Result<T, SourceError>;
