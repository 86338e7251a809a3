use std::fmt::{Display, Formatter};
use std::num::ParseFloatError;

use thiserror::Error;

use crate::domain::FieldLabel;
use crate::http_client::HttpError;

/// Top-level failure of a single `retrieve` call.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed data retrieval: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("failed validation: {0}")]
    Validation(#[from] ValidationError),

    #[error("malformed document: {0}")]
    Document(#[from] DocumentError),
}

/// Coarse classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Retrieval,
    Validation,
    Document,
}

impl FetchErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Retrieval => "retrieval",
            Self::Validation => "validation",
            Self::Document => "document",
        }
    }
}

impl Display for FetchErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchError {
    pub const fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Retrieval(_) => FetchErrorKind::Retrieval,
            Self::Validation(_) => FetchErrorKind::Validation,
            Self::Document(_) => FetchErrorKind::Document,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self.kind() {
            FetchErrorKind::Retrieval => "fetch.retrieval",
            FetchErrorKind::Validation => "fetch.validation",
            FetchErrorKind::Document => "fetch.document",
        }
    }

    /// Whether an out-of-band retry could plausibly succeed.
    ///
    /// Only transport failures and non-success statuses qualify; a payload that
    /// decoded but was wrong will be just as wrong the next time.
    pub const fn retryable(&self) -> bool {
        matches!(
            self,
            Self::Retrieval(RetrievalError::Transport { .. } | RetrievalError::Status { .. })
        )
    }
}

/// The source could not be reached or did not produce usable data.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("instrument identifier cannot be empty")]
    EmptyIdentifier,

    #[error("failed get request to {upstream}: {cause}")]
    Transport {
        upstream: &'static str,
        #[source]
        cause: HttpError,
    },

    #[error("{upstream} http response status is not successful: {status}")]
    Status { upstream: &'static str, status: u16 },

    #[error("failed parsing {upstream} response: {cause}")]
    Decode {
        upstream: &'static str,
        #[source]
        cause: serde_json::Error,
    },

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("incomplete data on page {url}")]
    IncompleteData { url: String },
}

/// The payload decoded but does not carry the fields the schema promises.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required result array")]
    MissingResultArray,
    #[error("missing required currency field")]
    MissingCurrency,
    #[error("missing required regularMarketPrice field")]
    MissingPrice,
    #[error("currency field is empty")]
    EmptyCurrency,
    #[error("regularMarketPrice field is zero")]
    ZeroPrice,
}

/// The response body could not be turned into a document tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("response body is empty")]
    EmptyBody,
}

/// A raw page value that does not coerce into its field's type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid value '{value}' for field '{label}': {kind}")]
pub struct FieldError {
    pub label: FieldLabel,
    pub value: String,
    #[source]
    pub kind: FieldErrorKind,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    #[error("not a number ({0})")]
    InvalidNumber(#[from] ParseFloatError),
    #[error("not a finite number")]
    NonFinite,
    #[error("not a MM/DD/YYYY date ({0})")]
    InvalidDate(#[from] time::error::Parse),
}
