use livemark_core::{FetchError, FetchErrorKind};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] livemark_core::ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Fetch(error) => match error.kind() {
                FetchErrorKind::Retrieval => 3,
                FetchErrorKind::Validation => 4,
                FetchErrorKind::Document => 5,
            },
            Self::Logging(_) => 1,
            Self::Serialization(_) => 6,
            Self::Io(_) => 10,
        }
    }
}
