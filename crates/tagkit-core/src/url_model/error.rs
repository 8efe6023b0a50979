//! Error type for URL decomposition.

use thiserror::Error;

/// Raised when a raw URL string cannot be split into scheme, authority,
/// path, query and fragment components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("invalid URL {raw:?}: {reason}")]
    InvalidUrl { raw: String, reason: &'static str },
}

impl UrlError {
    pub(crate) fn invalid(raw: &str, reason: &'static str) -> Self {
        UrlError::InvalidUrl {
            raw: raw.to_string(),
            reason,
        }
    }
}
