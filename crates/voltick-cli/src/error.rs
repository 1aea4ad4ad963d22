use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] voltick_core::ValidationError),

    #[error(transparent)]
    Ingest(#[from] voltick_core::IngestError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("report write failed: {0}")]
    Report(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::Ingest(_) => 3,
            Self::Serialization(_) => 4,
            Self::Report(_) => 6,
            Self::Io(_) => 10,
        }
    }
}
