//! Render error types.

use std::io;

/// Error produced while building attributes or rendering a tree.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Attribute key is empty or whitespace only.
    #[error("empty or whitespace attribute key not allowed")]
    EmptyAttributeKey,

    /// Attribute value is the absence marker (JSON `null`).
    #[error("attribute '{key}' has nil value")]
    NilAttributeValue {
        /// Attribute key, trimmed.
        key: String,
    },

    /// Attribute value is neither a string nor a boolean.
    #[error("attribute value must be string or bool, got {found} for key '{key}'")]
    InvalidAttributeType {
        /// Attribute key, trimmed.
        key: String,
        /// Name of the offending value type (e.g. `number`).
        found: &'static str,
    },

    /// The sink refused the rendered bytes.
    #[error(transparent)]
    Sink(#[from] io::Error),
}

impl RenderError {
    /// Whether the error was raised by attribute validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Sink(_))
    }

    /// Convert into an [`io::Error`].
    ///
    /// Sink failures are returned unchanged; validation failures become
    /// [`io::ErrorKind::InvalidData`].
    #[must_use]
    pub fn into_io(self) -> io::Error {
        match self {
            Self::Sink(err) => err,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
