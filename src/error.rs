//! Error types.

use thiserror::Error;

/// Errors from looking up components or parsing configuration.
///
/// Rendering never fails; these only come from construction-time lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoxstyleError {
    /// A name that is not part of the component catalog.
    #[error("unknown component '{name}'")]
    UnknownComponent { name: String },

    /// A mode string that is neither development nor production.
    #[error("invalid mode '{value}', expected 'development' or 'production'")]
    InvalidMode { value: String },
}
