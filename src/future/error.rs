//! Error types for the `Future` module.
//!
//! A `Future` can fail in exactly two ways: with an error supplied by the
//! caller, or with an [`UnrecognizedError`] produced when a construction
//! executor panics. [`FutureError`] is the default error type and covers
//! both, plus the failures of the natural transformations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The normalized error used when an executor fails without producing an
/// error value (it panicked).
///
/// # Examples
///
/// ```rust
/// use promissory::future::UnrecognizedError;
///
/// let error = UnrecognizedError::new(Some("index out of bounds".to_string()));
/// assert_eq!(error.to_string(), "Unrecognized error");
/// assert_eq!(error.panic_message(), Some("index out of bounds"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnrecognizedError {
    panic_message: Option<String>,
}

impl UnrecognizedError {
    /// Creates an error, optionally keeping the text of the panic payload.
    #[must_use]
    pub const fn new(panic_message: Option<String>) -> Self {
        Self { panic_message }
    }

    /// The panic payload text, when the panic carried a string.
    #[must_use]
    pub fn panic_message(&self) -> Option<&str> {
        self.panic_message.as_deref()
    }
}

impl std::fmt::Display for UnrecognizedError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Unrecognized error")
    }
}

impl std::error::Error for UnrecognizedError {}

/// The default error type of [`Future`](super::Future).
///
/// # Examples
///
/// ```rust
/// use promissory::future::FutureError;
///
/// assert_eq!(FutureError::failed("boom").to_string(), "boom");
/// assert_eq!(FutureError::MissingValue.to_string(), "Missing value");
/// assert_eq!(FutureError::EmptyList.to_string(), "Empty list");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FutureError {
    /// A failure described by the caller.
    Failed(String),
    /// An executor panicked.
    Unrecognized(UnrecognizedError),
    /// An `Option` converted to a `Future` was `None`.
    MissingValue,
    /// A `Vec` converted to a `Future` was empty.
    EmptyList,
}

impl FutureError {
    /// Creates a [`FutureError::Failed`] with the given message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

impl std::fmt::Display for FutureError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failed(message) => write!(formatter, "{message}"),
            Self::Unrecognized(error) => write!(formatter, "{error}"),
            Self::MissingValue => write!(formatter, "Missing value"),
            Self::EmptyList => write!(formatter, "Empty list"),
        }
    }
}

impl std::error::Error for FutureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unrecognized(error) => Some(error),
            _ => None,
        }
    }
}

impl From<UnrecognizedError> for FutureError {
    fn from(error: UnrecognizedError) -> Self {
        Self::Unrecognized(error)
    }
}
