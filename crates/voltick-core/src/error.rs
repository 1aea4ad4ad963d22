use std::path::PathBuf;

use thiserror::Error;

/// Validation and parse errors for domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid trading date '{value}', expected DD-MM-YYYY")]
    InvalidDate { value: String },
    #[error("invalid tick time '{value}', expected HH:MM:SS")]
    InvalidTime { value: String },

    #[error("invalid volume '{value}', expected a non-negative integer")]
    InvalidVolume { value: String },
}

/// Fatal ingestion failures. Any malformed input aborts the whole run;
/// there is no partial-results mode.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}:{line}: {source}", path.display())]
    BadField {
        path: PathBuf,
        line: u64,
        #[source]
        source: ValidationError,
    },
}

impl IngestError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn bad_field(
        path: impl Into<PathBuf>,
        line: u64,
        source: ValidationError,
    ) -> Self {
        Self::BadField {
            path: path.into(),
            line,
            source,
        }
    }
}
