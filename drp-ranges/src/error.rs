/// Error types for the range catalog and picker configuration
use drp_utils::error::DateError;
use thiserror::Error;

/// Main error type for DRP range operations
#[derive(Error, Debug)]
pub enum RangeError {
    /// A boundary date could not be parsed
    #[error(transparent)]
    Date(#[from] DateError),

    /// Picker configuration was not valid JSON or had the wrong shape
    #[error("Invalid picker configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A configured color token was empty
    #[error("Range color at position {0} is empty")]
    EmptyColor(usize),
}

/// Type alias for Results using RangeError
pub type Result<T> = std::result::Result<T, RangeError>;
