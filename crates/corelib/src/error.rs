//! Generic operation outcome, shared across crates. Success is `Ok`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CimError {
    /// The operation failed; the message comes from the failing collaborator
    /// (for imports, the external reader's error string).
    #[error("operation failed: {0}")]
    Failure(String),

    /// Not enough memory was available to perform the requested operation.
    #[error("out of memory")]
    OutOfMemory,
}

pub type CimResult<T> = Result<T, CimError>;
