use thiserror::Error;

use crate::validate::INVALID_POSTAL_CODE_MESSAGE;

/// Coarse classification of a failed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Network,
}

/// Everything that can stop a submission before a forecast is rendered.
///
/// The `Display` text is what ends up in the error region of the page.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{}", INVALID_POSTAL_CODE_MESSAGE)]
    InvalidInput,

    #[error("no location found")]
    LocationNotFound,

    #[error("no forecast found")]
    ForecastNotFound,

    #[error("Failed to reach the {service} service: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} request failed with status {status}: {body}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse {service} response: {source}")]
    Malformed {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::InvalidInput => ErrorKind::InvalidInput,
            LookupError::LocationNotFound | LookupError::ForecastNotFound => ErrorKind::NotFound,
            LookupError::Request { .. }
            | LookupError::Status { .. }
            | LookupError::Malformed { .. } => ErrorKind::Network,
        }
    }
}
