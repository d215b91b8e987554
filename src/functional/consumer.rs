//! Side-effecting functional interfaces of arity one, two and three.

use crate::functional::function::Function;

/// An operation on one argument that returns nothing.
pub struct Consumer<T> {
    accept: Box<dyn Fn(&T) + Send + Sync>,
}

impl<T: 'static> Consumer<T> {
    pub fn new<F>(accept: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self {
            accept: Box::new(accept),
        }
    }

    pub fn accept(&self, value: &T) {
        (self.accept)(value)
    }

    pub fn no_op() -> Self {
        Self::new(|_| {})
    }

    /// Runs `self`, then `next`, on the same input.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdas::Consumer;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let log = Arc::new(Mutex::new(Vec::new()));
    /// let (a, b) = (Arc::clone(&log), Arc::clone(&log));
    /// let both = Consumer::new(move |x: &i32| a.lock().unwrap().push(*x))
    ///     .and_then(Consumer::new(move |x: &i32| b.lock().unwrap().push(x * 10)));
    /// both.accept(&2);
    /// assert_eq!(*log.lock().unwrap(), vec![2, 20]);
    /// ```
    pub fn and_then(self, next: Self) -> Self {
        Self::new(move |value| {
            self.accept(value);
            next.accept(value);
        })
    }

    /// Accepts the result of `before` applied to the input.
    pub fn compose<V: 'static>(self, before: Function<V, T>) -> Consumer<V> {
        Consumer::new(move |value| self.accept(&before.apply(value)))
    }
}

/// An operation on two arguments that returns nothing.
pub struct BiConsumer<T, U> {
    accept: Box<dyn Fn(&T, &U) + Send + Sync>,
}

impl<T: 'static, U: 'static> BiConsumer<T, U> {
    pub fn new<F>(accept: F) -> Self
    where
        F: Fn(&T, &U) + Send + Sync + 'static,
    {
        Self {
            accept: Box::new(accept),
        }
    }

    pub fn accept(&self, first: &T, second: &U) {
        (self.accept)(first, second)
    }

    pub fn no_op() -> Self {
        Self::new(|_, _| {})
    }

    pub fn and_then(self, next: Self) -> Self {
        Self::new(move |first, second| {
            self.accept(first, second);
            next.accept(first, second);
        })
    }
}

/// An operation on three arguments that returns nothing.
pub struct TriConsumer<T, U, V> {
    accept: Box<dyn Fn(&T, &U, &V) + Send + Sync>,
}

impl<T: 'static, U: 'static, V: 'static> TriConsumer<T, U, V> {
    pub fn new<F>(accept: F) -> Self
    where
        F: Fn(&T, &U, &V) + Send + Sync + 'static,
    {
        Self {
            accept: Box::new(accept),
        }
    }

    pub fn accept(&self, first: &T, second: &U, third: &V) {
        (self.accept)(first, second, third)
    }

    pub fn no_op() -> Self {
        Self::new(|_, _, _| {})
    }

    pub fn and_then(self, next: Self) -> Self {
        Self::new(move |a, b, c| {
            self.accept(a, b, c);
            next.accept(a, b, c);
        })
    }
}
