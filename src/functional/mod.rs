//! Functional interfaces and their combinators.

pub mod consumer;
pub mod function;
pub mod memoize;
pub mod operator;
pub mod predicate;
pub mod prelude;
pub mod primitives;
pub mod supplier;
pub mod throwable;
