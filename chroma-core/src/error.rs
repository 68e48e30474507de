//! Error type shared by the conversion engine and the storage port.

use thiserror::Error;

/// Failures surfaced by color parsing, validation and storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input does not match `^#?[0-9A-Fa-f]{6}$`.
    #[error("Invalid hex format '{0}'. Use the #RRGGBB format")]
    InvalidFormat(String),

    /// A required request field was absent or blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// No saved color has the requested id.
    #[error("Color with ID {0} not found")]
    NotFound(String),

    /// The repository backing the saved colors could not serve the request.
    #[error("Color storage unavailable: {0}")]
    Storage(String),
}

/// Result alias over [`ColorError`].
pub type Result<T> = std::result::Result<T, ColorError>;
