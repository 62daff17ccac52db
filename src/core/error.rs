use thiserror::Error;

/// Crate-wide error type that aggregates the layer-specific errors.
///
/// Callers only ever see two kinds: the credential could not be resolved at
/// construction, or a request failed. The wrapped layer error carries the
/// detail for anyone who wants to look closer.
#[derive(Error, Debug)]
pub enum Error {
    /// Credential or endpoint could not be resolved
    #[error(transparent)]
    Configuration(#[from] crate::config::error::ConfigError),

    /// Transport failure, non-success status or undecodable body
    #[error("API request failed: {0}")]
    RequestFailure(#[from] crate::client::RequestError),
}

/// Result type alias for wrapper operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    pub fn is_request_failure(&self) -> bool {
        matches!(self, Error::RequestFailure(_))
    }

    /// HTTP status of a rejected request, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RequestFailure(crate::client::RequestError::Status { status, .. }) => {
                Some(*status)
            }
            _ => None,
        }
    }
}
