//! Error types for the Turtle writer.

use thiserror::Error;

/// Errors raised by [`TurtleWriter`](super::TurtleWriter) operations.
///
/// The invalid-use variants signal programming errors in the calling
/// converter; they are not recoverable mid-document.
#[derive(Debug, Error)]
pub enum WriterError {
    /// An object-adding operation was called before any subject was started.
    #[error("no triple has been started")]
    NoActiveSubject,

    /// A blank node created by a different writer instance was used.
    #[error("blank node _:b{id} does not belong to this writer")]
    ForeignBlankNode { id: u64 },

    /// The underlying sink failed; propagated unmodified.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for writer operations.
pub type Result<T> = std::result::Result<T, WriterError>;
