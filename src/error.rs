use thiserror::Error;

/// Errors raised while talking to the text input source registry.
#[derive(Debug, Error)]
pub enum Error {
    /// No enabled input source carries the requested identifier.
    #[error("input source '{0}' not found")]
    NotFound(String),

    /// The source was found but the OS refused to make it active.
    #[error("failed to select input source '{id}' (error code: {status})")]
    Select { id: String, status: i32 },

    /// The OS returned a null handle where a list or property was expected.
    #[error("failed to query input sources: {0}")]
    Enumerate(&'static str),

    #[error("{0}")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
