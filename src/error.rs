//! Error types shared by the functional interfaces.
//!
//! Throwing interfaces are generic over their failure type `E`; the types in
//! this module are the ones the library itself produces: [`NestedError`] when a
//! failure is wrapped, and [`ConfigError`] when environment configuration is
//! malformed.

use std::error::Error as StdError;
use thiserror::Error;

/// Type-erased, thread-safe error used as the cause of a [`NestedError`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Uniform wrapper around the failure of a throwing interface.
///
/// Produced by `nest` (as an unwind payload) and `wrap_err` (as the `Err` value).
/// The wrapped failure is available through [`std::error::Error::source`],
/// [`NestedError::cause`] and [`NestedError::downcast_ref`].
///
/// Wrapping is idempotent: wrapping a `NestedError` yields the same error, never
/// a wrapper of a wrapper.
///
/// # Examples
///
/// ```
/// use lambdas::NestedError;
///
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
/// let nested = NestedError::new(io);
/// assert!(nested.downcast_ref::<std::io::Error>().is_some());
///
/// let rewrapped = NestedError::new(nested);
/// assert!(rewrapped.downcast_ref::<std::io::Error>().is_some());
/// ```
#[derive(Debug, Error)]
#[error("nested failure: {source}")]
pub struct NestedError {
    source: BoxError,
}

impl NestedError {
    /// Wraps `error`, unless it already is a `NestedError`.
    pub fn new<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        let boxed: BoxError = error.into();
        match boxed.downcast::<NestedError>() {
            Ok(nested) => *nested,
            Err(source) => {
                log::trace!("wrapping failure into NestedError: {}", source);
                Self { source }
            }
        }
    }

    /// The wrapped failure.
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.source
    }

    /// Borrows the wrapped failure as `E` when that is its concrete type.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref::<E>()
    }

    /// Returns `true` if the wrapped failure is an `E`.
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.source.is::<E>()
    }

    /// Unwraps into the boxed cause.
    pub fn into_inner(self) -> BoxError {
        self.source
    }
}

/// Malformed configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be an unsigned integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be one of \"text\" or \"json\", got {value:?}")]
    UnknownLogFormat { key: &'static str, value: String },
}
