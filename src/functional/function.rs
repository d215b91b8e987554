//! Composable Functions
//!
//! Value-producing functional interfaces of arity one, two and three. Inputs
//! are borrowed; each stage of a composition borrows the previous stage's
//! output.

use crate::config::MemoConfig;
use crate::functional::consumer::Consumer;
use crate::functional::memoize::{CacheStats, MemoCache};
use crate::functional::predicate::Predicate;
use std::hash::Hash;

/// A function of one argument.
pub struct Function<T, R> {
    apply: Box<dyn Fn(&T) -> R + Send + Sync>,
}

impl<T: 'static, R: 'static> Function<T, R> {
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        Self {
            apply: Box::new(apply),
        }
    }

    pub fn apply(&self, value: &T) -> R {
        (self.apply)(value)
    }

    /// Applies `before` first, then `self` to its result.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdas::Function;
    ///
    /// let double = Function::new(|x: &i32| x * 2);
    /// let plus_one = Function::new(|x: &i32| x + 1);
    /// assert_eq!(double.compose(plus_one).apply(&3), 8);
    /// ```
    pub fn compose<V: 'static>(self, before: Function<V, T>) -> Function<V, R> {
        Function::new(move |value| self.apply(&before.apply(value)))
    }

    /// Applies `self` first, then `after` to its result.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdas::Function;
    ///
    /// let double = Function::new(|x: &i32| x * 2);
    /// let plus_one = Function::new(|x: &i32| x + 1);
    /// assert_eq!(double.and_then(plus_one).apply(&3), 7);
    /// ```
    pub fn and_then<V: 'static>(self, after: Function<R, V>) -> Function<T, V> {
        Function::new(move |value| after.apply(&self.apply(value)))
    }

    /// Tests the result of `self` with `predicate`.
    pub fn and_then_test(self, predicate: Predicate<R>) -> Predicate<T> {
        Predicate::new(move |value| predicate.test(&self.apply(value)))
    }

    /// Feeds the result of `self` to `consumer`.
    pub fn and_then_accept(self, consumer: Consumer<R>) -> Consumer<T> {
        Consumer::new(move |value| consumer.accept(&self.apply(value)))
    }

    /// Ignores the input and returns a clone of `value`.
    pub fn constant(value: R) -> Self
    where
        R: Clone + Send + Sync,
    {
        Self::new(move |_| value.clone())
    }

    /// Caches results keyed by the input itself.
    pub fn memoized(self) -> MemoizedFunction<T, R, T>
    where
        T: Eq + Hash + Clone + Send + Sync,
        R: Clone + Send + Sync,
    {
        self.memoized_with(MemoConfig::default())
    }

    pub fn memoized_with(self, config: MemoConfig) -> MemoizedFunction<T, R, T>
    where
        T: Eq + Hash + Clone + Send + Sync,
        R: Clone + Send + Sync,
    {
        MemoizedFunction::new(self, |value: &T| value.clone(), config)
    }

    /// Caches results keyed by `key(input)`.
    pub fn memoized_by<K, F>(self, key: F) -> MemoizedFunction<T, R, K>
    where
        K: Eq + Hash + Send + Sync + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
        R: Clone + Send + Sync,
    {
        MemoizedFunction::new(self, key, MemoConfig::default())
    }
}

impl<T: Clone + 'static> Function<T, T> {
    /// Returns a clone of its input.
    pub fn identity() -> Self {
        Self::new(|value: &T| value.clone())
    }
}

/// A [`Function`] whose results are cached per key.
pub struct MemoizedFunction<T, R, K> {
    function: Function<T, R>,
    key: Box<dyn Fn(&T) -> K + Send + Sync>,
    cache: MemoCache<K, R>,
}

impl<T, R, K> MemoizedFunction<T, R, K>
where
    T: 'static,
    R: Clone + Send + Sync + 'static,
    K: Eq + Hash + Send + Sync + 'static,
{
    fn new<F>(function: Function<T, R>, key: F, config: MemoConfig) -> Self
    where
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self {
            function,
            key: Box::new(key),
            cache: MemoCache::with_config(config),
        }
    }

    pub fn apply(&self, value: &T) -> R {
        let key = (self.key)(value);
        self.cache
            .get_or_insert_with(key, || self.function.apply(value))
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn into_function(self) -> Function<T, R> {
        Function::new(move |value| self.apply(value))
    }
}

/// A function of two arguments.
pub struct BiFunction<T, U, R> {
    apply: Box<dyn Fn(&T, &U) -> R + Send + Sync>,
}

impl<T: 'static, U: 'static, R: 'static> BiFunction<T, U, R> {
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&T, &U) -> R + Send + Sync + 'static,
    {
        Self {
            apply: Box::new(apply),
        }
    }

    pub fn apply(&self, first: &T, second: &U) -> R {
        (self.apply)(first, second)
    }

    pub fn and_then<V: 'static>(self, after: Function<R, V>) -> BiFunction<T, U, V> {
        BiFunction::new(move |first, second| after.apply(&self.apply(first, second)))
    }

    /// Caches results keyed by the pair of inputs.
    pub fn memoized(self) -> MemoizedBiFunction<T, U, R>
    where
        T: Eq + Hash + Clone + Send + Sync,
        U: Eq + Hash + Clone + Send + Sync,
        R: Clone + Send + Sync,
    {
        MemoizedBiFunction {
            function: self,
            cache: MemoCache::new(),
        }
    }
}

pub struct MemoizedBiFunction<T, U, R> {
    function: BiFunction<T, U, R>,
    cache: MemoCache<(T, U), R>,
}

impl<T, U, R> MemoizedBiFunction<T, U, R>
where
    T: Eq + Hash + Clone + Send + Sync + 'static,
    U: Eq + Hash + Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
{
    pub fn apply(&self, first: &T, second: &U) -> R {
        self.cache
            .get_or_insert_with((first.clone(), second.clone()), || {
                self.function.apply(first, second)
            })
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn into_function(self) -> BiFunction<T, U, R> {
        BiFunction::new(move |first, second| self.apply(first, second))
    }
}

/// A function of three arguments.
pub struct TriFunction<T, U, V, R> {
    apply: Box<dyn Fn(&T, &U, &V) -> R + Send + Sync>,
}

impl<T: 'static, U: 'static, V: 'static, R: 'static> TriFunction<T, U, V, R> {
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&T, &U, &V) -> R + Send + Sync + 'static,
    {
        Self {
            apply: Box::new(apply),
        }
    }

    pub fn apply(&self, first: &T, second: &U, third: &V) -> R {
        (self.apply)(first, second, third)
    }

    pub fn and_then<W: 'static>(self, after: Function<R, W>) -> TriFunction<T, U, V, W> {
        TriFunction::new(move |a, b, c| after.apply(&self.apply(a, b, c)))
    }
}
