//! Error types for the fixture harness

use thiserror::Error;

/// Result type alias for fixture operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when rendering or invoking fixtures
#[derive(Error, Debug)]
pub enum Error {
    /// No fixture is registered under the requested name
    #[error("Unknown fixture: {0}")]
    UnknownFixture(String),

    /// The supplied props could not be deserialized
    #[error("Invalid props: {0}")]
    PropsError(String),

    /// Failed to serialize a component description to markup
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
