//! Functions that may fail with an error of type `E`.

use super::{raise, raise_nested};
use crate::config::MemoConfig;
use crate::error::{BoxError, NestedError};
use crate::functional::function::{BiFunction, Function, TriFunction};
use crate::functional::memoize::{CacheStats, MemoCache};
use std::hash::Hash;

/// A fallible function of one argument.
pub struct ThrowableFunction<T, R, E> {
    apply: Box<dyn Fn(&T) -> Result<R, E> + Send + Sync>,
}

impl<T: 'static, R: 'static, E: 'static> ThrowableFunction<T, R, E> {
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&T) -> Result<R, E> + Send + Sync + 'static,
    {
        Self {
            apply: Box::new(apply),
        }
    }

    pub fn try_apply(&self, value: &T) -> Result<R, E> {
        (self.apply)(value)
    }

    /// Applies `before` first; `self` is not applied when `before` fails.
    pub fn compose<V: 'static>(
        self,
        before: ThrowableFunction<V, T, E>,
    ) -> ThrowableFunction<V, R, E> {
        ThrowableFunction::new(move |value| self.try_apply(&before.try_apply(value)?))
    }

    /// Applies `after` to a successful result.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdas::ThrowableFunction;
    ///
    /// let parse = ThrowableFunction::new(|s: &String| s.trim().parse::<u32>());
    /// let halve = ThrowableFunction::new(|n: &u32| {
    ///     if n % 2 == 0 { Ok(n / 2) } else { "odd".parse::<u32>() }
    /// });
    /// let pipeline = parse.and_then(halve);
    /// assert_eq!(pipeline.try_apply(&" 8 ".to_string()), Ok(4));
    /// assert!(pipeline.try_apply(&"7".to_string()).is_err());
    /// ```
    pub fn and_then<V: 'static>(
        self,
        after: ThrowableFunction<R, V, E>,
    ) -> ThrowableFunction<T, V, E> {
        ThrowableFunction::new(move |value| after.try_apply(&self.try_apply(value)?))
    }

    pub fn map_err<E2, F>(self, map: F) -> ThrowableFunction<T, R, E2>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        ThrowableFunction::new(move |value| self.try_apply(value).map_err(&map))
    }

    pub fn wrap_err(self) -> ThrowableFunction<T, R, NestedError>
    where
        E: Into<BoxError>,
    {
        self.map_err(NestedError::new)
    }

    /// Non-throwing form that computes a substitute from the failure and the input.
    pub fn recover<F>(self, recover: F) -> Function<T, R>
    where
        F: Fn(E, &T) -> R + Send + Sync + 'static,
    {
        Function::new(move |value| match self.try_apply(value) {
            Ok(result) => result,
            Err(error) => recover(error, value),
        })
    }

    /// # Panics
    ///
    /// The returned function panics with a [`NestedError`] payload on failure.
    pub fn nest(self) -> Function<T, R>
    where
        E: Into<BoxError>,
    {
        Function::new(move |value| self.try_apply(value).unwrap_or_else(|e| raise_nested(e)))
    }

    /// # Panics
    ///
    /// The returned function unwinds on failure; [`catch_thrown`](super::catch_thrown)
    /// recovers the original `E`.
    pub fn sneaky_throw(self) -> Function<T, R>
    where
        E: Send,
    {
        Function::new(move |value| self.try_apply(value).unwrap_or_else(|e| raise(e)))
    }

    /// Caches successful results keyed by the input. Failures are not cached.
    pub fn memoized(self) -> MemoizedThrowableFunction<T, R, E>
    where
        T: Eq + Hash + Clone + Send + Sync,
        R: Clone + Send + Sync,
    {
        self.memoized_with(MemoConfig::default())
    }

    pub fn memoized_with(self, config: MemoConfig) -> MemoizedThrowableFunction<T, R, E>
    where
        T: Eq + Hash + Clone + Send + Sync,
        R: Clone + Send + Sync,
    {
        MemoizedThrowableFunction {
            function: self,
            cache: MemoCache::with_config(config),
        }
    }
}

impl<T: 'static, R: 'static, E: 'static> From<Function<T, R>> for ThrowableFunction<T, R, E> {
    fn from(function: Function<T, R>) -> Self {
        Self::new(move |value| Ok(function.apply(value)))
    }
}

pub struct MemoizedThrowableFunction<T, R, E> {
    function: ThrowableFunction<T, R, E>,
    cache: MemoCache<T, R>,
}

impl<T, R, E> MemoizedThrowableFunction<T, R, E>
where
    T: Eq + Hash + Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
    E: 'static,
{
    pub fn try_apply(&self, value: &T) -> Result<R, E> {
        self.cache
            .get_or_try_insert_with(value.clone(), || self.function.try_apply(value))
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn into_function(self) -> ThrowableFunction<T, R, E> {
        ThrowableFunction::new(move |value| self.try_apply(value))
    }
}

/// A fallible function of two arguments.
pub struct ThrowableBiFunction<T, U, R, E> {
    apply: Box<dyn Fn(&T, &U) -> Result<R, E> + Send + Sync>,
}

impl<T: 'static, U: 'static, R: 'static, E: 'static> ThrowableBiFunction<T, U, R, E> {
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&T, &U) -> Result<R, E> + Send + Sync + 'static,
    {
        Self {
            apply: Box::new(apply),
        }
    }

    pub fn try_apply(&self, first: &T, second: &U) -> Result<R, E> {
        (self.apply)(first, second)
    }

    pub fn and_then<V: 'static>(
        self,
        after: ThrowableFunction<R, V, E>,
    ) -> ThrowableBiFunction<T, U, V, E> {
        ThrowableBiFunction::new(move |first, second| {
            after.try_apply(&self.try_apply(first, second)?)
        })
    }

    pub fn map_err<E2, F>(self, map: F) -> ThrowableBiFunction<T, U, R, E2>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        ThrowableBiFunction::new(move |first, second| self.try_apply(first, second).map_err(&map))
    }

    pub fn wrap_err(self) -> ThrowableBiFunction<T, U, R, NestedError>
    where
        E: Into<BoxError>,
    {
        self.map_err(NestedError::new)
    }

    pub fn recover<F>(self, recover: F) -> BiFunction<T, U, R>
    where
        F: Fn(E, &T, &U) -> R + Send + Sync + 'static,
    {
        BiFunction::new(move |first, second| match self.try_apply(first, second) {
            Ok(result) => result,
            Err(error) => recover(error, first, second),
        })
    }

    /// # Panics
    ///
    /// The returned function panics with a [`NestedError`] payload on failure.
    pub fn nest(self) -> BiFunction<T, U, R>
    where
        E: Into<BoxError>,
    {
        BiFunction::new(move |first, second| {
            self.try_apply(first, second)
                .unwrap_or_else(|e| raise_nested(e))
        })
    }

    /// # Panics
    ///
    /// The returned function unwinds on failure; [`catch_thrown`](super::catch_thrown)
    /// recovers the original `E`.
    pub fn sneaky_throw(self) -> BiFunction<T, U, R>
    where
        E: Send,
    {
        BiFunction::new(move |first, second| {
            self.try_apply(first, second).unwrap_or_else(|e| raise(e))
        })
    }
}

impl<T: 'static, U: 'static, R: 'static, E: 'static> From<BiFunction<T, U, R>>
    for ThrowableBiFunction<T, U, R, E>
{
    fn from(function: BiFunction<T, U, R>) -> Self {
        Self::new(move |first, second| Ok(function.apply(first, second)))
    }
}

/// A fallible function of three arguments.
pub struct ThrowableTriFunction<T, U, V, R, E> {
    apply: Box<dyn Fn(&T, &U, &V) -> Result<R, E> + Send + Sync>,
}

impl<T, U, V, R, E> ThrowableTriFunction<T, U, V, R, E>
where
    T: 'static,
    U: 'static,
    V: 'static,
    R: 'static,
    E: 'static,
{
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&T, &U, &V) -> Result<R, E> + Send + Sync + 'static,
    {
        Self {
            apply: Box::new(apply),
        }
    }

    pub fn try_apply(&self, first: &T, second: &U, third: &V) -> Result<R, E> {
        (self.apply)(first, second, third)
    }

    pub fn and_then<W: 'static>(
        self,
        after: ThrowableFunction<R, W, E>,
    ) -> ThrowableTriFunction<T, U, V, W, E> {
        ThrowableTriFunction::new(move |a, b, c| after.try_apply(&self.try_apply(a, b, c)?))
    }

    pub fn map_err<E2, F>(self, map: F) -> ThrowableTriFunction<T, U, V, R, E2>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        ThrowableTriFunction::new(move |a, b, c| self.try_apply(a, b, c).map_err(&map))
    }

    pub fn wrap_err(self) -> ThrowableTriFunction<T, U, V, R, NestedError>
    where
        E: Into<BoxError>,
    {
        self.map_err(NestedError::new)
    }

    pub fn recover<F>(self, recover: F) -> TriFunction<T, U, V, R>
    where
        F: Fn(E, &T, &U, &V) -> R + Send + Sync + 'static,
    {
        TriFunction::new(move |a, b, c| match self.try_apply(a, b, c) {
            Ok(result) => result,
            Err(error) => recover(error, a, b, c),
        })
    }

    /// # Panics
    ///
    /// The returned function panics with a [`NestedError`] payload on failure.
    pub fn nest(self) -> TriFunction<T, U, V, R>
    where
        E: Into<BoxError>,
    {
        TriFunction::new(move |a, b, c| self.try_apply(a, b, c).unwrap_or_else(|e| raise_nested(e)))
    }

    /// # Panics
    ///
    /// The returned function unwinds on failure; [`catch_thrown`](super::catch_thrown)
    /// recovers the original `E`.
    pub fn sneaky_throw(self) -> TriFunction<T, U, V, R>
    where
        E: Send,
    {
        TriFunction::new(move |a, b, c| self.try_apply(a, b, c).unwrap_or_else(|e| raise(e)))
    }
}

impl<T: 'static, U: 'static, V: 'static, R: 'static, E: 'static> From<TriFunction<T, U, V, R>>
    for ThrowableTriFunction<T, U, V, R, E>
{
    fn from(function: TriFunction<T, U, V, R>) -> Self {
        Self::new(move |a, b, c| Ok(function.apply(a, b, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::throwable::{catch_nested, catch_thrown};
    use std::num::ParseIntError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn parse() -> ThrowableFunction<String, i64, ParseIntError> {
        ThrowableFunction::new(|s: &String| s.parse::<i64>())
    }

    #[test]
    fn test_and_then_and_compose_short_circuit_on_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let double = ThrowableFunction::new(move |n: &i64| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(n * 2)
        });

        let pipeline = parse().and_then(double);
        assert_eq!(pipeline.try_apply(&"21".to_string()), Ok(42));
        assert!(pipeline.try_apply(&"x".to_string()).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let trimmed = parse().compose(ThrowableFunction::new(|s: &&'static str| {
            Ok::<_, ParseIntError>(s.trim().to_string())
        }));
        assert_eq!(trimmed.try_apply(&" 5 "), Ok(5));
    }

    #[test]
    fn test_recover_nest_and_sneaky_throw() {
        let lenient = parse().recover(|_, input| input.len() as i64 * -1);
        assert_eq!(lenient.apply(&"12".to_string()), 12);
        assert_eq!(lenient.apply(&"abc".to_string()), -3);

        let nested = parse().nest();
        let error = catch_nested(|| nested.apply(&"nope".to_string())).expect_err("must unwind");
        assert!(error.is::<ParseIntError>());

        let sneaky = parse().sneaky_throw();
        let original: ParseIntError =
            catch_thrown(|| sneaky.apply(&"".to_string())).expect_err("must unwind");
        assert_eq!(original, "".parse::<i64>().unwrap_err());
    }

    #[test]
    fn test_wrap_err_keeps_cause() {
        let wrapped = parse().wrap_err();
        let error = wrapped.try_apply(&"1.5".to_string()).expect_err("not an integer");
        assert!(error.downcast_ref::<ParseIntError>().is_some());
    }

    #[test]
    fn test_memoized_throwable_function_retries_failures() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let memo = ThrowableFunction::new(move |s: &String| {
            counter.fetch_add(1, Ordering::SeqCst);
            s.parse::<i64>()
        })
        .memoized();

        assert_eq!(memo.try_apply(&"3".to_string()), Ok(3));
        assert_eq!(memo.try_apply(&"3".to_string()), Ok(3));
        assert!(memo.try_apply(&"q".to_string()).is_err());
        assert!(memo.try_apply(&"q".to_string()).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(memo.stats().entries, 1);
    }

    #[test]
    fn test_bi_and_tri_functions() {
        let divide = ThrowableBiFunction::new(|a: &i32, b: &i32| {
            a.checked_div(*b).ok_or("division by zero")
        });
        let describe =
            divide.and_then(ThrowableFunction::from(Function::new(|q: &i32| format!("q={q}"))));
        assert_eq!(describe.try_apply(&9, &3), Ok("q=3".to_string()));
        assert_eq!(describe.try_apply(&9, &0), Err("division by zero"));

        let safe =
            ThrowableBiFunction::new(|a: &i32, b: &i32| a.checked_div(*b).ok_or("division by zero"))
                .recover(|_, a, _| *a);
        assert_eq!(safe.apply(&9, &0), 9);

        let mul_add = ThrowableTriFunction::new(|a: &i32, b: &i32, c: &i32| {
            a.checked_mul(*b)
                .and_then(|p| p.checked_add(*c))
                .ok_or("overflow")
        })
        .map_err(|msg: &'static str| msg.len());
        assert_eq!(mul_add.try_apply(&2, &3, &4), Ok(10));
        assert_eq!(mul_add.try_apply(&i32::MAX, &2, &0), Err(8));

        let nested = ThrowableTriFunction::<i32, i32, i32, i32, ParseIntError>::from(
            TriFunction::new(|a: &i32, b: &i32, c: &i32| a + b + c),
        )
        .nest();
        assert_eq!(nested.apply(&1, &1, &1), 3);
    }
}
