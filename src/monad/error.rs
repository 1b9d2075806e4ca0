//! Error types for the monad builder.

use std::fmt;

/// Errors raised by the monad builder's named-operation registry.
///
/// # Examples
///
/// ```rust
/// use combinars::monad::MonadError;
///
/// let error = MonadError::DuplicateOperation {
///     name: "negate".to_string(),
/// };
/// assert_eq!(
///     format!("{}", error),
///     "operation `negate` is already registered on this constructor"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonadError {
    /// [`lift`](crate::monad::Unit::lift) was asked to register a name
    /// that is already present in this constructor's registry.
    DuplicateOperation {
        /// The name that was already registered.
        name: String,
    },
    /// [`invoke`](crate::monad::Instance::invoke) was asked for a name
    /// that has never been lifted on this constructor.
    UnknownOperation {
        /// The name that was not found.
        name: String,
    },
}

impl fmt::Display for MonadError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateOperation { name } => write!(
                formatter,
                "operation `{name}` is already registered on this constructor"
            ),
            Self::UnknownOperation { name } => write!(
                formatter,
                "no operation named `{name}` has been lifted on this constructor"
            ),
        }
    }
}

impl std::error::Error for MonadError {}
