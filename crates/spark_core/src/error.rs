//! Style engine error types

use thiserror::Error;

/// Errors raised while building or editing a style tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Attempt to overwrite or delete one of the reserved control keys
    #[error("cannot modify protected property `{0}`")]
    ProtectedProperty(String),

    /// No node exists at the given path
    #[error("no style node at `{0}`")]
    PathNotFound(String),

    /// A path segment points through a leaf
    #[error("style node at `{0}` is not an object")]
    NotAnObject(String),

    /// Input value has no style representation (arrays, booleans, null)
    #[error("unsupported {kind} value at `{path}`")]
    UnsupportedValue { path: String, kind: &'static str },
}

/// Result type for style engine operations
pub type Result<T> = std::result::Result<T, StyleError>;
