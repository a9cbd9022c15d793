//! Translation errors

use std::fmt;

/// Failures while obtaining or decoding a structured candidate
///
/// `Transport` and `Api` mean the service could not be reached or refused
/// the request; `InvalidReply` means it answered with something that is not
/// the expected shape. The distinction is kept for observability; all
/// variants feed the same fallback.
#[derive(Debug, Clone)]
pub enum TranslateError {
    /// The service could not be reached (connect error, timeout)
    Transport(String),
    /// The service replied with a non-success status
    Api { status: u16, message: String },
    /// The reply could not be used as the expected JSON shape
    InvalidReply(String),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Transport(message) => {
                write!(f, "translation service unreachable: {}", message)
            }
            TranslateError::Api { status, message } => {
                write!(f, "translation service error ({}): {}", status, message)
            }
            TranslateError::InvalidReply(message) => {
                write!(f, "translation reply not usable: {}", message)
            }
        }
    }
}

impl std::error::Error for TranslateError {}
