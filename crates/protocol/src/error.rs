//! Errors raised while encoding, decoding or parsing board data.

/// Failures from the board data types.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The task list could not be written as JSON.
    #[error("could not encode tasks: {0}")]
    Encode(#[source] serde_json::Error),

    /// A persisted blob is not a JSON task list.
    #[error("could not decode tasks: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("unknown status {0:?}, expected todo, inprogress or done")]
    InvalidStatus(String),

    #[error("unknown priority {0:?}, expected low, medium or high")]
    InvalidPriority(String),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
