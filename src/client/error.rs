use thiserror::Error;

/// Ways a single API round trip can fail
#[derive(Error, Debug)]
pub enum RequestError {
    /// Connection, TLS or I/O failure before a full response arrived
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not valid JSON
    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}
