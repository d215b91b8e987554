//! Side-effecting operations that may fail with an error of type `E`.

use super::{raise, raise_nested};
use crate::error::{BoxError, NestedError};
use crate::functional::consumer::{BiConsumer, Consumer};

pub struct ThrowableConsumer<T, E> {
    accept: Box<dyn Fn(&T) -> Result<(), E> + Send + Sync>,
}

impl<T: 'static, E: 'static> ThrowableConsumer<T, E> {
    pub fn new<F>(accept: F) -> Self
    where
        F: Fn(&T) -> Result<(), E> + Send + Sync + 'static,
    {
        Self {
            accept: Box::new(accept),
        }
    }

    pub fn try_accept(&self, value: &T) -> Result<(), E> {
        (self.accept)(value)
    }

    /// Runs `self`, then `next`; `next` is skipped when `self` fails.
    pub fn and_then(self, next: Self) -> Self {
        Self::new(move |value| {
            self.try_accept(value)?;
            next.try_accept(value)
        })
    }

    pub fn map_err<E2, F>(self, map: F) -> ThrowableConsumer<T, E2>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        ThrowableConsumer::new(move |value| self.try_accept(value).map_err(&map))
    }

    pub fn wrap_err(self) -> ThrowableConsumer<T, NestedError>
    where
        E: Into<BoxError>,
    {
        self.map_err(NestedError::new)
    }

    /// Non-throwing form that hands each failure, with its input, to `recover`.
    pub fn recover<F>(self, recover: F) -> Consumer<T>
    where
        F: Fn(E, &T) + Send + Sync + 'static,
    {
        Consumer::new(move |value| {
            if let Err(error) = self.try_accept(value) {
                recover(error, value);
            }
        })
    }

    /// # Panics
    ///
    /// The returned consumer panics with a [`NestedError`] payload on failure.
    pub fn nest(self) -> Consumer<T>
    where
        E: Into<BoxError>,
    {
        Consumer::new(move |value| {
            if let Err(error) = self.try_accept(value) {
                raise_nested(error);
            }
        })
    }

    /// # Panics
    ///
    /// The returned consumer unwinds on failure; [`catch_thrown`](super::catch_thrown)
    /// recovers the original `E`.
    pub fn sneaky_throw(self) -> Consumer<T>
    where
        E: Send,
    {
        Consumer::new(move |value| {
            if let Err(error) = self.try_accept(value) {
                raise(error);
            }
        })
    }
}

impl<T: 'static, E: 'static> From<Consumer<T>> for ThrowableConsumer<T, E> {
    fn from(consumer: Consumer<T>) -> Self {
        Self::new(move |value| {
            consumer.accept(value);
            Ok(())
        })
    }
}

pub struct ThrowableBiConsumer<T, U, E> {
    accept: Box<dyn Fn(&T, &U) -> Result<(), E> + Send + Sync>,
}

impl<T: 'static, U: 'static, E: 'static> ThrowableBiConsumer<T, U, E> {
    pub fn new<F>(accept: F) -> Self
    where
        F: Fn(&T, &U) -> Result<(), E> + Send + Sync + 'static,
    {
        Self {
            accept: Box::new(accept),
        }
    }

    pub fn try_accept(&self, first: &T, second: &U) -> Result<(), E> {
        (self.accept)(first, second)
    }

    pub fn and_then(self, next: Self) -> Self {
        Self::new(move |first, second| {
            self.try_accept(first, second)?;
            next.try_accept(first, second)
        })
    }

    pub fn map_err<E2, F>(self, map: F) -> ThrowableBiConsumer<T, U, E2>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        ThrowableBiConsumer::new(move |first, second| self.try_accept(first, second).map_err(&map))
    }

    pub fn wrap_err(self) -> ThrowableBiConsumer<T, U, NestedError>
    where
        E: Into<BoxError>,
    {
        self.map_err(NestedError::new)
    }

    pub fn recover<F>(self, recover: F) -> BiConsumer<T, U>
    where
        F: Fn(E, &T, &U) + Send + Sync + 'static,
    {
        BiConsumer::new(move |first, second| {
            if let Err(error) = self.try_accept(first, second) {
                recover(error, first, second);
            }
        })
    }

    /// # Panics
    ///
    /// The returned consumer panics with a [`NestedError`] payload on failure.
    pub fn nest(self) -> BiConsumer<T, U>
    where
        E: Into<BoxError>,
    {
        BiConsumer::new(move |first, second| {
            if let Err(error) = self.try_accept(first, second) {
                raise_nested(error);
            }
        })
    }

    /// # Panics
    ///
    /// The returned consumer unwinds on failure; [`catch_thrown`](super::catch_thrown)
    /// recovers the original `E`.
    pub fn sneaky_throw(self) -> BiConsumer<T, U>
    where
        E: Send,
    {
        BiConsumer::new(move |first, second| {
            if let Err(error) = self.try_accept(first, second) {
                raise(error);
            }
        })
    }
}

impl<T: 'static, U: 'static, E: 'static> From<BiConsumer<T, U>> for ThrowableBiConsumer<T, U, E> {
    fn from(consumer: BiConsumer<T, U>) -> Self {
        Self::new(move |first, second| {
            consumer.accept(first, second);
            Ok(())
        })
    }
}
