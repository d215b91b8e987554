//! Operators: functions whose arguments and result share one type.

use crate::functional::function::{BiFunction, Function, TriFunction};
use std::cmp::Ordering;

pub type UnaryOperator<T> = Function<T, T>;
pub type BinaryOperator<T> = BiFunction<T, T, T>;
pub type TernaryOperator<T> = TriFunction<T, T, T, T>;

impl<T: Clone + 'static> BiFunction<T, T, T> {
    /// Returns the lesser argument according to `comparator`; the first one on ties.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdas::BinaryOperator;
    ///
    /// let shorter = BinaryOperator::min_by(|a: &String, b: &String| a.len().cmp(&b.len()));
    /// assert_eq!(shorter.apply(&"abc".to_string(), &"xy".to_string()), "xy");
    /// assert_eq!(shorter.apply(&"ab".to_string(), &"xy".to_string()), "ab");
    /// ```
    pub fn min_by<C>(comparator: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::new(move |first, second| {
            if comparator(first, second) == Ordering::Greater {
                second.clone()
            } else {
                first.clone()
            }
        })
    }

    /// Returns the greater argument according to `comparator`; the first one on ties.
    pub fn max_by<C>(comparator: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::new(move |first, second| {
            if comparator(first, second) == Ordering::Less {
                second.clone()
            } else {
                first.clone()
            }
        })
    }
}

impl<T: Ord + Clone + 'static> BiFunction<T, T, T> {
    pub fn minimum() -> Self {
        Self::min_by(|first: &T, second: &T| first.cmp(second))
    }

    pub fn maximum() -> Self {
        Self::max_by(|first: &T, second: &T| first.cmp(second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unary_operator_identity_and_chaining() {
        let inc: UnaryOperator<i64> = UnaryOperator::new(|x: &i64| x + 1);
        let chained = UnaryOperator::identity().and_then(inc);
        assert_eq!(chained.apply(&41), 42);
    }

    #[test]
    fn test_min_and_max_by_prefer_first_on_ties() {
        let min = BinaryOperator::min_by(|a: &(char, u8), b: &(char, u8)| a.1.cmp(&b.1));
        let max = BinaryOperator::max_by(|a: &(char, u8), b: &(char, u8)| a.1.cmp(&b.1));

        assert_eq!(min.apply(&('a', 1), &('b', 1)).0, 'a');
        assert_eq!(max.apply(&('a', 1), &('b', 1)).0, 'a');
        assert_eq!(min.apply(&('a', 2), &('b', 1)).0, 'b');
        assert_eq!(max.apply(&('a', 1), &('b', 2)).0, 'b');
    }

    #[test]
    fn test_minimum_and_maximum_use_natural_order() {
        assert_eq!(BinaryOperator::<char>::minimum().apply(&'q', &'c'), 'c');
        assert_eq!(BinaryOperator::<i16>::maximum().apply(&-4, &9), 9);
    }

    #[test]
    fn test_ternary_operator_applies_all_arguments() {
        let clamp: TernaryOperator<i32> =
            TernaryOperator::new(|lo: &i32, x: &i32, hi: &i32| (*x).max(*lo).min(*hi));
        assert_eq!(clamp.apply(&0, &15, &10), 10);
        assert_eq!(clamp.apply(&0, &-3, &10), 0);
    }
}
