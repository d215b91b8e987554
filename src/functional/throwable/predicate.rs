//! Predicates that may fail with an error of type `E`.

use super::{raise, raise_nested};
use crate::config::MemoConfig;
use crate::error::{BoxError, NestedError};
use crate::functional::memoize::{CacheStats, MemoCache};
use crate::functional::predicate::{BiPredicate, Predicate, TriPredicate};
use std::hash::Hash;

/// A fallible boolean-valued function of one argument.
pub struct ThrowablePredicate<T, E> {
    test: Box<dyn Fn(&T) -> Result<bool, E> + Send + Sync>,
}

impl<T: 'static, E: 'static> ThrowablePredicate<T, E> {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> Result<bool, E> + Send + Sync + 'static,
    {
        Self {
            test: Box::new(test),
        }
    }

    pub fn try_test(&self, value: &T) -> Result<bool, E> {
        (self.test)(value)
    }

    pub fn always_true() -> Self {
        Self::new(|_| Ok(true))
    }

    pub fn always_false() -> Self {
        Self::new(|_| Ok(false))
    }

    pub fn negate(self) -> Self {
        Self::new(move |value| self.try_test(value).map(|result| !result))
    }

    /// Logical AND; `other` is not evaluated when `self` is false or fails.
    pub fn and(self, other: Self) -> Self {
        Self::new(move |value| Ok(self.try_test(value)? && other.try_test(value)?))
    }

    /// Logical OR; `other` is not evaluated when `self` is true or fails.
    pub fn or(self, other: Self) -> Self {
        Self::new(move |value| Ok(self.try_test(value)? || other.try_test(value)?))
    }

    /// Logical XOR; `other` is evaluated whenever `self` succeeds.
    pub fn xor(self, other: Self) -> Self {
        Self::new(move |value| {
            let left = self.try_test(value)?;
            let right = other.try_test(value)?;
            Ok(left ^ right)
        })
    }

    pub fn map_err<E2, F>(self, map: F) -> ThrowablePredicate<T, E2>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        ThrowablePredicate::new(move |value| self.try_test(value).map_err(&map))
    }

    /// Replaces the failure type by [`NestedError`].
    pub fn wrap_err(self) -> ThrowablePredicate<T, NestedError>
    where
        E: Into<BoxError>,
    {
        self.map_err(NestedError::new)
    }

    /// Non-throwing form that computes a substitute from the failure and the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdas::ThrowablePredicate;
    ///
    /// let positive = ThrowablePredicate::new(|s: &String| s.parse::<i32>().map(|n| n > 0))
    ///     .recover(|_err, _input| false);
    /// assert!(positive.test(&"12".to_string()));
    /// assert!(!positive.test(&"twelve".to_string()));
    /// ```
    pub fn recover<F>(self, recover: F) -> Predicate<T>
    where
        F: Fn(E, &T) -> bool + Send + Sync + 'static,
    {
        Predicate::new(move |value| match self.try_test(value) {
            Ok(result) => result,
            Err(error) => recover(error, value),
        })
    }

    /// Non-throwing form that unwinds with a [`NestedError`] wrapping the failure.
    ///
    /// # Panics
    ///
    /// The returned predicate panics with a `NestedError` payload when the
    /// wrapped closure fails. A failure that already is a `NestedError` is
    /// raised as-is.
    pub fn nest(self) -> Predicate<T>
    where
        E: Into<BoxError>,
    {
        Predicate::new(move |value| self.try_test(value).unwrap_or_else(|e| raise_nested(e)))
    }

    /// Non-throwing form that unwinds on failure.
    ///
    /// # Panics
    ///
    /// The returned predicate panics when the wrapped closure fails;
    /// [`catch_thrown`](super::catch_thrown) recovers the original `E`.
    pub fn sneaky_throw(self) -> Predicate<T>
    where
        E: Send,
    {
        Predicate::new(move |value| self.try_test(value).unwrap_or_else(|e| raise(e)))
    }

    /// Caches successful results keyed by the input. Failures are not cached.
    pub fn memoized(self) -> MemoizedThrowablePredicate<T, E>
    where
        T: Eq + Hash + Clone + Send + Sync,
    {
        self.memoized_with(MemoConfig::default())
    }

    pub fn memoized_with(self, config: MemoConfig) -> MemoizedThrowablePredicate<T, E>
    where
        T: Eq + Hash + Clone + Send + Sync,
    {
        MemoizedThrowablePredicate {
            predicate: self,
            cache: MemoCache::with_config(config),
        }
    }
}

impl<T: 'static, E: 'static> From<Predicate<T>> for ThrowablePredicate<T, E> {
    fn from(predicate: Predicate<T>) -> Self {
        Self::new(move |value| Ok(predicate.test(value)))
    }
}

pub struct MemoizedThrowablePredicate<T, E> {
    predicate: ThrowablePredicate<T, E>,
    cache: MemoCache<T, bool>,
}

impl<T, E> MemoizedThrowablePredicate<T, E>
where
    T: Eq + Hash + Clone + Send + Sync + 'static,
    E: 'static,
{
    pub fn try_test(&self, value: &T) -> Result<bool, E> {
        self.cache
            .get_or_try_insert_with(value.clone(), || self.predicate.try_test(value))
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn into_predicate(self) -> ThrowablePredicate<T, E> {
        ThrowablePredicate::new(move |value| self.try_test(value))
    }
}

/// A fallible boolean-valued function of two arguments.
pub struct ThrowableBiPredicate<T, U, E> {
    test: Box<dyn Fn(&T, &U) -> Result<bool, E> + Send + Sync>,
}

impl<T: 'static, U: 'static, E: 'static> ThrowableBiPredicate<T, U, E> {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T, &U) -> Result<bool, E> + Send + Sync + 'static,
    {
        Self {
            test: Box::new(test),
        }
    }

    pub fn try_test(&self, first: &T, second: &U) -> Result<bool, E> {
        (self.test)(first, second)
    }

    pub fn negate(self) -> Self {
        Self::new(move |first, second| self.try_test(first, second).map(|result| !result))
    }

    pub fn and(self, other: Self) -> Self {
        Self::new(move |first, second| {
            Ok(self.try_test(first, second)? && other.try_test(first, second)?)
        })
    }

    pub fn or(self, other: Self) -> Self {
        Self::new(move |first, second| {
            Ok(self.try_test(first, second)? || other.try_test(first, second)?)
        })
    }

    pub fn xor(self, other: Self) -> Self {
        Self::new(move |first, second| {
            let left = self.try_test(first, second)?;
            let right = other.try_test(first, second)?;
            Ok(left ^ right)
        })
    }

    pub fn map_err<E2, F>(self, map: F) -> ThrowableBiPredicate<T, U, E2>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        ThrowableBiPredicate::new(move |first, second| self.try_test(first, second).map_err(&map))
    }

    pub fn wrap_err(self) -> ThrowableBiPredicate<T, U, NestedError>
    where
        E: Into<BoxError>,
    {
        self.map_err(NestedError::new)
    }

    pub fn recover<F>(self, recover: F) -> BiPredicate<T, U>
    where
        F: Fn(E, &T, &U) -> bool + Send + Sync + 'static,
    {
        BiPredicate::new(move |first, second| match self.try_test(first, second) {
            Ok(result) => result,
            Err(error) => recover(error, first, second),
        })
    }

    /// # Panics
    ///
    /// The returned predicate panics with a [`NestedError`] payload on failure.
    pub fn nest(self) -> BiPredicate<T, U>
    where
        E: Into<BoxError>,
    {
        BiPredicate::new(move |first, second| {
            self.try_test(first, second)
                .unwrap_or_else(|e| raise_nested(e))
        })
    }

    /// # Panics
    ///
    /// The returned predicate unwinds on failure; [`catch_thrown`](super::catch_thrown)
    /// recovers the original `E`.
    pub fn sneaky_throw(self) -> BiPredicate<T, U>
    where
        E: Send,
    {
        BiPredicate::new(move |first, second| {
            self.try_test(first, second).unwrap_or_else(|e| raise(e))
        })
    }
}

impl<T: 'static, U: 'static, E: 'static> From<BiPredicate<T, U>> for ThrowableBiPredicate<T, U, E> {
    fn from(predicate: BiPredicate<T, U>) -> Self {
        Self::new(move |first, second| Ok(predicate.test(first, second)))
    }
}

/// A fallible boolean-valued function of three arguments.
pub struct ThrowableTriPredicate<T, U, V, E> {
    test: Box<dyn Fn(&T, &U, &V) -> Result<bool, E> + Send + Sync>,
}

impl<T: 'static, U: 'static, V: 'static, E: 'static> ThrowableTriPredicate<T, U, V, E> {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T, &U, &V) -> Result<bool, E> + Send + Sync + 'static,
    {
        Self {
            test: Box::new(test),
        }
    }

    pub fn try_test(&self, first: &T, second: &U, third: &V) -> Result<bool, E> {
        (self.test)(first, second, third)
    }

    pub fn negate(self) -> Self {
        Self::new(move |a, b, c| self.try_test(a, b, c).map(|result| !result))
    }

    pub fn and(self, other: Self) -> Self {
        Self::new(move |a, b, c| Ok(self.try_test(a, b, c)? && other.try_test(a, b, c)?))
    }

    pub fn or(self, other: Self) -> Self {
        Self::new(move |a, b, c| Ok(self.try_test(a, b, c)? || other.try_test(a, b, c)?))
    }

    pub fn xor(self, other: Self) -> Self {
        Self::new(move |a, b, c| {
            let left = self.try_test(a, b, c)?;
            let right = other.try_test(a, b, c)?;
            Ok(left ^ right)
        })
    }

    pub fn map_err<E2, F>(self, map: F) -> ThrowableTriPredicate<T, U, V, E2>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        ThrowableTriPredicate::new(move |a, b, c| self.try_test(a, b, c).map_err(&map))
    }

    pub fn wrap_err(self) -> ThrowableTriPredicate<T, U, V, NestedError>
    where
        E: Into<BoxError>,
    {
        self.map_err(NestedError::new)
    }

    pub fn recover<F>(self, recover: F) -> TriPredicate<T, U, V>
    where
        F: Fn(E, &T, &U, &V) -> bool + Send + Sync + 'static,
    {
        TriPredicate::new(move |a, b, c| match self.try_test(a, b, c) {
            Ok(result) => result,
            Err(error) => recover(error, a, b, c),
        })
    }

    /// # Panics
    ///
    /// The returned predicate panics with a [`NestedError`] payload on failure.
    pub fn nest(self) -> TriPredicate<T, U, V>
    where
        E: Into<BoxError>,
    {
        TriPredicate::new(move |a, b, c| self.try_test(a, b, c).unwrap_or_else(|e| raise_nested(e)))
    }

    /// # Panics
    ///
    /// The returned predicate unwinds on failure; [`catch_thrown`](super::catch_thrown)
    /// recovers the original `E`.
    pub fn sneaky_throw(self) -> TriPredicate<T, U, V>
    where
        E: Send,
    {
        TriPredicate::new(move |a, b, c| self.try_test(a, b, c).unwrap_or_else(|e| raise(e)))
    }
}

impl<T: 'static, U: 'static, V: 'static, E: 'static> From<TriPredicate<T, U, V>>
    for ThrowableTriPredicate<T, U, V, E>
{
    fn from(predicate: TriPredicate<T, U, V>) -> Self {
        Self::new(move |a, b, c| Ok(predicate.test(a, b, c)))
    }
}
