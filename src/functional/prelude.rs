//! Prelude for the functional interfaces
//!
//! Re-exports the generic interfaces, their memoized and throwable forms, and
//! the unwinding helpers, so that one glob import covers typical use:
//!
//! ```
//! use lambdas::prelude::*;
//!
//! let short = Predicate::new(|s: &String| s.len() < 4);
//! assert!(short.test(&"abc".to_string()));
//! ```
//!
//! The primitive aliases are left out on purpose to keep the glob small; import
//! them from [`crate::functional::primitives`].

pub use crate::config::MemoConfig;
pub use crate::error::NestedError;
pub use crate::functional::consumer::{BiConsumer, Consumer, TriConsumer};
pub use crate::functional::function::{
    BiFunction, Function, MemoizedBiFunction, MemoizedFunction, TriFunction,
};
pub use crate::functional::memoize::CacheStats;
pub use crate::functional::operator::{BinaryOperator, TernaryOperator, UnaryOperator};
pub use crate::functional::predicate::{
    BiPredicate, MemoizedBiPredicate, MemoizedPredicate, MemoizedTriPredicate, Predicate,
    TriPredicate,
};
pub use crate::functional::supplier::{MemoizedSupplier, Supplier};
pub use crate::functional::throwable::{
    catch_nested, catch_thrown, MemoizedThrowableFunction, MemoizedThrowablePredicate,
    MemoizedThrowableSupplier, ThrowableBiConsumer, ThrowableBiFunction, ThrowableBiPredicate,
    ThrowableBinaryOperator, ThrowableConsumer, ThrowableFunction, ThrowablePredicate,
    ThrowableSupplier, ThrowableTernaryOperator, ThrowableTriFunction, ThrowableTriPredicate,
    ThrowableUnaryOperator,
};
