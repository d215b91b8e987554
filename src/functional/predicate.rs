//! Composable Predicates
//!
//! Boolean-valued functional interfaces of arity one, two and three, together
//! with the Boolean combinators (`and`, `or`, `xor`, `negate`) and memoizing
//! wrappers.
//!
//! `and` and `or` short-circuit exactly like `&&` and `||`; `xor` always
//! evaluates both sides.

use crate::config::MemoConfig;
use crate::functional::function::Function;
use crate::functional::memoize::{CacheStats, MemoCache};
use std::hash::Hash;

/// A boolean-valued function of one argument.
pub struct Predicate<T> {
    test: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: 'static> Predicate<T> {
    /// Wraps a closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdas::Predicate;
    ///
    /// let positive = Predicate::new(|x: &i32| *x > 0);
    /// assert!(positive.test(&3));
    /// assert!(!positive.test(&-3));
    /// ```
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Box::new(test),
        }
    }

    pub fn test(&self, value: &T) -> bool {
        (self.test)(value)
    }

    pub fn always_true() -> Self {
        Self::new(|_| true)
    }

    pub fn always_false() -> Self {
        Self::new(|_| false)
    }

    /// Same as `predicate.negate()`.
    pub fn not(predicate: Self) -> Self {
        predicate.negate()
    }

    pub fn negate(self) -> Self {
        Self::new(move |value| !self.test(value))
    }

    /// Logical AND; `other` is not evaluated when `self` is false.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdas::Predicate;
    ///
    /// let never = Predicate::<i32>::always_true().and(Predicate::always_false());
    /// assert!(!never.test(&5));
    /// ```
    pub fn and(self, other: Self) -> Self {
        Self::new(move |value| self.test(value) && other.test(value))
    }

    /// Logical OR; `other` is not evaluated when `self` is true.
    pub fn or(self, other: Self) -> Self {
        Self::new(move |value| self.test(value) || other.test(value))
    }

    /// Logical XOR; both sides are always evaluated.
    pub fn xor(self, other: Self) -> Self {
        Self::new(move |value| {
            let left = self.test(value);
            let right = other.test(value);
            left ^ right
        })
    }

    /// True when every predicate holds, stopping at the first that does not.
    /// An empty list is true.
    pub fn all(predicates: Vec<Self>) -> Self {
        Self::new(move |value| predicates.iter().all(|p| p.test(value)))
    }

    /// True when at least one predicate holds, stopping at the first that does.
    /// An empty list is false.
    pub fn any(predicates: Vec<Self>) -> Self {
        Self::new(move |value| predicates.iter().any(|p| p.test(value)))
    }

    /// Tests the result of `before` applied to the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdas::{Function, Predicate};
    ///
    /// let long = Predicate::new(|len: &usize| *len > 3)
    ///     .compose(Function::new(|s: &String| s.len()));
    /// assert!(long.test(&"hello".to_string()));
    /// ```
    pub fn compose<V: 'static>(self, before: Function<V, T>) -> Predicate<V> {
        Predicate::new(move |value| self.test(&before.apply(value)))
    }

    /// Caches results keyed by the input itself.
    pub fn memoized(self) -> MemoizedPredicate<T, T>
    where
        T: Eq + Hash + Clone + Send + Sync,
    {
        self.memoized_with(MemoConfig::default())
    }

    pub fn memoized_with(self, config: MemoConfig) -> MemoizedPredicate<T, T>
    where
        T: Eq + Hash + Clone + Send + Sync,
    {
        MemoizedPredicate::new(self, |value: &T| value.clone(), config)
    }

    /// Caches results keyed by `key(input)`.
    ///
    /// Use this for inputs that are not `Hash`, such as floating point values.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdas::Predicate;
    ///
    /// let finite = Predicate::new(|x: &f64| x.is_finite()).memoized_by(|x: &f64| x.to_bits());
    /// assert!(finite.test(&1.5));
    /// assert!(!finite.test(&f64::NAN));
    /// ```
    pub fn memoized_by<K, F>(self, key: F) -> MemoizedPredicate<T, K>
    where
        K: Eq + Hash + Send + Sync + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        MemoizedPredicate::new(self, key, MemoConfig::default())
    }
}

impl<T: PartialEq + Send + Sync + 'static> Predicate<T> {
    /// Holds for inputs equal to `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdas::Predicate;
    ///
    /// let five = Predicate::is_equal(5);
    /// assert!(five.test(&5));
    /// assert!(!five.test(&6));
    /// ```
    pub fn is_equal(target: T) -> Self {
        Self::new(move |value| *value == target)
    }
}

/// A [`Predicate`] whose results are cached per key.
///
/// Each distinct key is evaluated at most once, also under concurrent callers.
pub struct MemoizedPredicate<T, K> {
    predicate: Predicate<T>,
    key: Box<dyn Fn(&T) -> K + Send + Sync>,
    cache: MemoCache<K, bool>,
}

impl<T: 'static, K: Eq + Hash + Send + Sync + 'static> MemoizedPredicate<T, K> {
    fn new<F>(predicate: Predicate<T>, key: F, config: MemoConfig) -> Self
    where
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self {
            predicate,
            key: Box::new(key),
            cache: MemoCache::with_config(config),
        }
    }

    pub fn test(&self, value: &T) -> bool {
        let key = (self.key)(value);
        self.cache
            .get_or_insert_with(key, || self.predicate.test(value))
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear(&self) {
        self.cache.clear();
    }

    /// Erases the caching wrapper into a plain [`Predicate`] that keeps the cache.
    pub fn into_predicate(self) -> Predicate<T> {
        Predicate::new(move |value| self.test(value))
    }
}

/// A boolean-valued function of two arguments.
pub struct BiPredicate<T, U> {
    test: Box<dyn Fn(&T, &U) -> bool + Send + Sync>,
}

impl<T: 'static, U: 'static> BiPredicate<T, U> {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T, &U) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Box::new(test),
        }
    }

    pub fn test(&self, first: &T, second: &U) -> bool {
        (self.test)(first, second)
    }

    pub fn always_true() -> Self {
        Self::new(|_, _| true)
    }

    pub fn always_false() -> Self {
        Self::new(|_, _| false)
    }

    pub fn not(predicate: Self) -> Self {
        predicate.negate()
    }

    pub fn negate(self) -> Self {
        Self::new(move |first, second| !self.test(first, second))
    }

    pub fn and(self, other: Self) -> Self {
        Self::new(move |first, second| self.test(first, second) && other.test(first, second))
    }

    pub fn or(self, other: Self) -> Self {
        Self::new(move |first, second| self.test(first, second) || other.test(first, second))
    }

    pub fn xor(self, other: Self) -> Self {
        Self::new(move |first, second| {
            let left = self.test(first, second);
            let right = other.test(first, second);
            left ^ right
        })
    }

    /// Caches results keyed by the pair of inputs.
    pub fn memoized(self) -> MemoizedBiPredicate<T, U>
    where
        T: Eq + Hash + Clone + Send + Sync,
        U: Eq + Hash + Clone + Send + Sync,
    {
        MemoizedBiPredicate {
            predicate: self,
            cache: MemoCache::new(),
        }
    }
}

impl<T: PartialEq + Send + Sync + 'static> BiPredicate<T, T> {
    /// Holds when both arguments are equal.
    pub fn equal() -> Self {
        Self::new(|first, second| first == second)
    }
}

pub struct MemoizedBiPredicate<T, U> {
    predicate: BiPredicate<T, U>,
    cache: MemoCache<(T, U), bool>,
}

impl<T, U> MemoizedBiPredicate<T, U>
where
    T: Eq + Hash + Clone + Send + Sync + 'static,
    U: Eq + Hash + Clone + Send + Sync + 'static,
{
    pub fn test(&self, first: &T, second: &U) -> bool {
        self.cache
            .get_or_insert_with((first.clone(), second.clone()), || {
                self.predicate.test(first, second)
            })
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn into_predicate(self) -> BiPredicate<T, U> {
        BiPredicate::new(move |first, second| self.test(first, second))
    }
}

/// A boolean-valued function of three arguments.
pub struct TriPredicate<T, U, V> {
    test: Box<dyn Fn(&T, &U, &V) -> bool + Send + Sync>,
}

impl<T: 'static, U: 'static, V: 'static> TriPredicate<T, U, V> {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T, &U, &V) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Box::new(test),
        }
    }

    pub fn test(&self, first: &T, second: &U, third: &V) -> bool {
        (self.test)(first, second, third)
    }

    pub fn always_true() -> Self {
        Self::new(|_, _, _| true)
    }

    pub fn always_false() -> Self {
        Self::new(|_, _, _| false)
    }

    pub fn not(predicate: Self) -> Self {
        predicate.negate()
    }

    pub fn negate(self) -> Self {
        Self::new(move |a, b, c| !self.test(a, b, c))
    }

    pub fn and(self, other: Self) -> Self {
        Self::new(move |a, b, c| self.test(a, b, c) && other.test(a, b, c))
    }

    pub fn or(self, other: Self) -> Self {
        Self::new(move |a, b, c| self.test(a, b, c) || other.test(a, b, c))
    }

    pub fn xor(self, other: Self) -> Self {
        Self::new(move |a, b, c| {
            let left = self.test(a, b, c);
            let right = other.test(a, b, c);
            left ^ right
        })
    }

    /// Caches results keyed by the triple of inputs.
    pub fn memoized(self) -> MemoizedTriPredicate<T, U, V>
    where
        T: Eq + Hash + Clone + Send + Sync,
        U: Eq + Hash + Clone + Send + Sync,
        V: Eq + Hash + Clone + Send + Sync,
    {
        MemoizedTriPredicate {
            predicate: self,
            cache: MemoCache::new(),
        }
    }
}

pub struct MemoizedTriPredicate<T, U, V> {
    predicate: TriPredicate<T, U, V>,
    cache: MemoCache<(T, U, V), bool>,
}

impl<T, U, V> MemoizedTriPredicate<T, U, V>
where
    T: Eq + Hash + Clone + Send + Sync + 'static,
    U: Eq + Hash + Clone + Send + Sync + 'static,
    V: Eq + Hash + Clone + Send + Sync + 'static,
{
    pub fn test(&self, first: &T, second: &U, third: &V) -> bool {
        self.cache.get_or_insert_with(
            (first.clone(), second.clone(), third.clone()),
            || self.predicate.test(first, second, third),
        )
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn into_predicate(self) -> TriPredicate<T, U, V> {
        TriPredicate::new(move |a, b, c| self.test(a, b, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting(result: bool, calls: &Arc<AtomicUsize>) -> Predicate<i32> {
        let calls = Arc::clone(calls);
        Predicate::new(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            result
        })
    }

    #[test]
    fn test_negate_inverts_result() {
        let even = Predicate::new(|x: &i32| x % 2 == 0);
        let odd = Predicate::new(|x: &i32| x % 2 == 0).negate();
        for x in -3..=3 {
            assert_eq!(odd.test(&x), !even.test(&x));
        }
    }

    #[test]
    fn test_not_is_negate() {
        let odd = Predicate::not(Predicate::new(|x: &i32| x % 2 == 0));
        assert!(odd.test(&3));
        assert!(!odd.test(&4));
    }

    #[test]
    fn test_and_skips_right_side_when_left_is_false() {
        let calls = Arc::new(AtomicUsize::new(0));
        let combined = Predicate::always_false().and(counting(true, &calls));

        assert!(!combined.test(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_and_evaluates_right_side_when_left_is_true() {
        let calls = Arc::new(AtomicUsize::new(0));
        let combined = Predicate::always_true().and(counting(false, &calls));

        assert!(!combined.test(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_or_skips_right_side_when_left_is_true() {
        let calls = Arc::new(AtomicUsize::new(0));
        let combined = Predicate::always_true().or(counting(false, &calls));

        assert!(combined.test(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_xor_always_evaluates_both_sides() {
        let left_calls = Arc::new(AtomicUsize::new(0));
        let right_calls = Arc::new(AtomicUsize::new(0));
        let combined = counting(true, &left_calls).xor(counting(true, &right_calls));

        assert!(!combined.test(&1));
        assert_eq!(left_calls.load(Ordering::SeqCst), 1);
        assert_eq!(right_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_constant_predicates_compose_as_expected() {
        let combined = Predicate::<i32>::always_true().and(Predicate::always_false());
        assert!(!combined.test(&5));

        let five = Predicate::is_equal(5);
        assert!(five.test(&5));
        assert!(!five.test(&6));
    }

    #[test]
    fn test_all_and_any_handle_empty_lists() {
        assert!(Predicate::<i32>::all(vec![]).test(&0));
        assert!(!Predicate::<i32>::any(vec![]).test(&0));
    }

    #[test]
    fn test_all_stops_at_first_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let combined = Predicate::all(vec![
            Predicate::new(|x: &i32| *x > 0),
            Predicate::always_false(),
            counting(true, &calls),
        ]);

        assert!(!combined.test(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_any_stops_at_first_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let combined = Predicate::any(vec![
            Predicate::new(|x: &i32| *x > 0),
            counting(false, &calls),
        ]);

        assert!(combined.test(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!combined.test(&-1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_memoized_calls_underlying_once_per_input() {
        let calls = Arc::new(AtomicUsize::new(0));
        let memo = counting(true, &calls).memoized();

        assert!(memo.test(&1));
        assert!(memo.test(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(memo.test(&2));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(memo.stats().entries, 2);
    }

    #[test]
    fn test_clear_forces_recomputation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let memo = counting(true, &calls).memoized();

        memo.test(&1);
        memo.clear();
        memo.test(&1);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_memoized_by_uses_projected_key() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let memo = Predicate::new(move |x: &f64| {
            counter.fetch_add(1, Ordering::SeqCst);
            *x > 0.0
        })
        .memoized_by(|x: &f64| x.to_bits());

        assert!(memo.test(&0.5));
        assert!(memo.test(&0.5));
        assert!(!memo.test(&-0.5));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_into_predicate_keeps_the_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let plain = counting(false, &calls).memoized().into_predicate().negate();

        assert!(plain.test(&3));
        assert!(plain.test(&3));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_bi_predicate_combinators() {
        let less = BiPredicate::new(|a: &i32, b: &i32| a < b);
        let equal = BiPredicate::<i32, i32>::equal();
        let at_most = less.or(equal);

        assert!(at_most.test(&1, &2));
        assert!(at_most.test(&2, &2));
        assert!(!at_most.test(&3, &2));

        let differ = BiPredicate::<i32, i32>::equal().negate();
        assert!(differ.test(&1, &2));

        let either = BiPredicate::new(|a: &i32, _: &i32| *a > 0)
            .xor(BiPredicate::new(|_: &i32, b: &i32| *b > 0));
        assert!(either.test(&1, &-1));
        assert!(!either.test(&1, &1));
    }

    #[test]
    fn test_bi_predicate_memoizes_on_pairs() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let memo = BiPredicate::new(move |a: &String, b: &u8| {
            counter.fetch_add(1, Ordering::SeqCst);
            a.len() == *b as usize
        })
        .memoized();

        assert!(memo.test(&"abc".to_string(), &3));
        assert!(memo.test(&"abc".to_string(), &3));
        assert!(!memo.test(&"abc".to_string(), &4));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_tri_predicate_combinators_and_memoization() {
        let between = TriPredicate::new(|lo: &i32, x: &i32, hi: &i32| lo <= x && x <= hi);
        let outside = TriPredicate::not(TriPredicate::new(|lo: &i32, x: &i32, hi: &i32| {
            lo <= x && x <= hi
        }));

        assert!(between.test(&0, &5, &10));
        assert!(outside.test(&0, &11, &10));

        let memo = between.and(TriPredicate::always_true()).memoized();
        assert!(memo.test(&0, &5, &10));
        assert!(memo.test(&0, &5, &10));
        assert_eq!(memo.stats().misses, 1);
        assert_eq!(memo.stats().hits, 1);
    }
}
