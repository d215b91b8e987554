//! Value producers that may fail with an error of type `E`.

use super::{raise, raise_nested};
use crate::error::{BoxError, NestedError};
use crate::functional::function::Function;
use crate::functional::supplier::Supplier;
use once_cell::sync::OnceCell;

pub struct ThrowableSupplier<T, E> {
    get: Box<dyn Fn() -> Result<T, E> + Send + Sync>,
}

impl<T: 'static, E: 'static> ThrowableSupplier<T, E> {
    pub fn new<F>(get: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        Self { get: Box::new(get) }
    }

    pub fn try_get(&self) -> Result<T, E> {
        (self.get)()
    }

    pub fn map<R: 'static>(self, mapper: Function<T, R>) -> ThrowableSupplier<R, E> {
        ThrowableSupplier::new(move || self.try_get().map(|value| mapper.apply(&value)))
    }

    pub fn map_err<E2, F>(self, map: F) -> ThrowableSupplier<T, E2>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        ThrowableSupplier::new(move || self.try_get().map_err(&map))
    }

    pub fn wrap_err(self) -> ThrowableSupplier<T, NestedError>
    where
        E: Into<BoxError>,
    {
        self.map_err(NestedError::new)
    }

    /// Non-throwing form that computes a substitute from the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdas::ThrowableSupplier;
    ///
    /// let port = ThrowableSupplier::new(|| "http".parse::<u16>()).recover(|_| 8080);
    /// assert_eq!(port.get(), 8080);
    /// ```
    pub fn recover<F>(self, recover: F) -> Supplier<T>
    where
        F: Fn(E) -> T + Send + Sync + 'static,
    {
        Supplier::new(move || self.try_get().unwrap_or_else(&recover))
    }

    /// # Panics
    ///
    /// The returned supplier panics with a [`NestedError`] payload on failure.
    pub fn nest(self) -> Supplier<T>
    where
        E: Into<BoxError>,
    {
        Supplier::new(move || self.try_get().unwrap_or_else(|e| raise_nested(e)))
    }

    /// # Panics
    ///
    /// The returned supplier unwinds on failure; [`catch_thrown`](super::catch_thrown)
    /// recovers the original `E`.
    pub fn sneaky_throw(self) -> Supplier<T>
    where
        E: Send,
    {
        Supplier::new(move || self.try_get().unwrap_or_else(|e| raise(e)))
    }

    /// Computes on the first successful `try_get` and returns clones afterwards.
    ///
    /// A failed attempt stores nothing; the next call tries again.
    pub fn memoized(self) -> MemoizedThrowableSupplier<T, E>
    where
        T: Clone + Send + Sync,
    {
        MemoizedThrowableSupplier {
            supplier: self,
            cell: OnceCell::new(),
        }
    }
}

impl<T: 'static, E: 'static> From<Supplier<T>> for ThrowableSupplier<T, E> {
    fn from(supplier: Supplier<T>) -> Self {
        Self::new(move || Ok(supplier.get()))
    }
}

pub struct MemoizedThrowableSupplier<T, E> {
    supplier: ThrowableSupplier<T, E>,
    cell: OnceCell<T>,
}

impl<T: Clone + Send + Sync + 'static, E: 'static> MemoizedThrowableSupplier<T, E> {
    pub fn try_get(&self) -> Result<T, E> {
        self.cell
            .get_or_try_init(|| self.supplier.try_get())
            .cloned()
    }

    pub fn is_computed(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn into_supplier(self) -> ThrowableSupplier<T, E> {
        ThrowableSupplier::new(move || self.try_get())
    }
}
