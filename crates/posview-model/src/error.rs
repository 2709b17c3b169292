//! Error types for model lookups.

use thiserror::Error;

/// Errors raised when resolving user input against the registered views.
///
/// The pipeline itself is total; these only occur at configuration
/// boundaries (unknown view name, unknown sort/filter field).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// No registered view with this name.
    #[error("unknown view: {name}")]
    UnknownView { name: String },

    /// The view has no field with this name.
    #[error("unknown field '{field}' in view {view}")]
    UnknownField { view: String, field: String },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
