//! Throwable functional interfaces
//!
//! Every interface in this module wraps a closure that returns `Result<_, E>`
//! for an arbitrary failure type `E`. Callers pick how a failure leaves the
//! interface:
//!
//! - `try_*` returns the `Result` unchanged.
//! - `wrap_err` replaces `E` by [`NestedError`] at the `Result` level.
//! - `map_err` converts `E` into another failure type.
//! - `recover` turns the interface into its non-throwing counterpart, computing
//!   a substitute result from the failure.
//! - `nest` turns it into its non-throwing counterpart that unwinds with a
//!   [`NestedError`] payload carrying `E` as its source.
//! - `sneaky_throw` turns it into its non-throwing counterpart that unwinds
//!   carrying the original `E`, recoverable only through [`catch_thrown`].
//!
//! Panics raised by the wrapped closure are never caught, wrapped or recovered.
//! [`catch_nested`] and [`catch_thrown`] convert the unwinding forms back into
//! a `Result` at a boundary of the caller's choosing.

pub mod consumer;
pub mod function;
pub mod predicate;
pub mod supplier;

use crate::error::{BoxError, NestedError};
use std::panic::{self, AssertUnwindSafe};

pub use consumer::{ThrowableBiConsumer, ThrowableConsumer};
pub use function::{
    MemoizedThrowableFunction, ThrowableBiFunction, ThrowableFunction, ThrowableTriFunction,
};
pub use predicate::{
    MemoizedThrowablePredicate, ThrowableBiPredicate, ThrowablePredicate, ThrowableTriPredicate,
};
pub use supplier::{MemoizedThrowableSupplier, ThrowableSupplier};

pub type ThrowableUnaryOperator<T, E> = ThrowableFunction<T, T, E>;
pub type ThrowableBinaryOperator<T, E> = ThrowableBiFunction<T, T, T, E>;
pub type ThrowableTernaryOperator<T, E> = ThrowableTriFunction<T, T, T, T, E>;

/// Unwinds with `error` wrapped in a [`NestedError`].
pub(crate) fn raise_nested<E: Into<BoxError>>(error: E) -> ! {
    panic::panic_any(NestedError::new(error))
}

/// Unwind payload of `sneaky_throw`.
///
/// A plain `panic!` carries a `String` or `&'static str`; tagging thrown
/// failures keeps those apart from a failure type that happens to match.
pub(crate) struct Thrown<E>(pub(crate) E);

/// Unwinds with `error` tagged as a thrown failure.
pub(crate) fn raise<E: Send + 'static>(error: E) -> ! {
    panic::panic_any(Thrown(error))
}

/// Runs `f`, turning an unwind raised by a `nest`ed interface back into `Err`.
///
/// Any other panic is resumed unchanged. `f` runs under `AssertUnwindSafe`, so
/// state it leaves half-updated on failure must not be trusted afterwards.
///
/// # Examples
///
/// ```
/// use lambdas::{catch_nested, ThrowablePredicate};
///
/// let parse = ThrowablePredicate::new(|s: &String| s.parse::<i32>().map(|n| n > 0)).nest();
/// assert_eq!(catch_nested(|| parse.test(&"7".to_string())).ok(), Some(true));
///
/// let err = catch_nested(|| parse.test(&"seven".to_string())).unwrap_err();
/// assert!(err.is::<std::num::ParseIntError>());
/// ```
pub fn catch_nested<R, F>(f: F) -> Result<R, NestedError>
where
    F: FnOnce() -> R,
{
    catch_payload::<NestedError, R, F>(f)
}

/// Runs `f`, turning an unwind raised by a `sneaky_throw`n interface with an
/// `E` failure back into `Err(E)`.
///
/// Any other panic is resumed unchanged, including a plain `panic!` whose
/// message type equals `E`.
pub fn catch_thrown<E, R, F>(f: F) -> Result<R, E>
where
    E: 'static,
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Thrown<E>>() {
            Ok(thrown) => Err(thrown.0),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// Runs `f`, turning an unwind whose payload is exactly an `E` back into `Err`.
fn catch_payload<E, R, F>(f: F) -> Result<R, E>
where
    E: 'static,
    F: FnOnce() -> R,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<E>() {
            Ok(error) => Err(*error),
            Err(other) => panic::resume_unwind(other),
        },
    }
}
