//! Composable functional interfaces.
//!
//! Predicates, functions, consumers, suppliers and operators of one to three
//! arguments, each with combinators (`and`, `or`, `compose`, `and_then`, ...)
//! and opt-in memoization backed by a concurrent cache. Every interface has a
//! throwable counterpart wrapping a `Result`-returning closure, which can be
//! recovered, nested into a [`NestedError`] or rethrown unchanged.
//!
//! ```
//! use lambdas::{Function, Predicate};
//!
//! let trimmed_len = Function::new(|s: &String| s.trim().len());
//! let blank = Predicate::new(|n: &usize| *n == 0).compose(trimmed_len);
//! assert!(blank.test(&"   ".to_string()));
//! ```

pub mod config;
pub mod error;
pub mod functional;
pub mod utils;

pub use config::MemoConfig;
pub use error::{BoxError, ConfigError, NestedError};
pub use functional::memoize::{CacheStats, MemoCache};
pub use functional::prelude::*;
pub use functional::{prelude, primitives};

#[cfg(feature = "logging")]
pub use utils::logger::{init_logging, init_logging_with, LogFormat};
