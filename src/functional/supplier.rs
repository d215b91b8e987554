//! Argument-less value producers and their lazily computed, cached form.

use crate::functional::function::Function;
use once_cell::sync::OnceCell;

/// Produces a value on every call.
pub struct Supplier<T> {
    get: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T: 'static> Supplier<T> {
    pub fn new<F>(get: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self { get: Box::new(get) }
    }

    pub fn get(&self) -> T {
        (self.get)()
    }

    pub fn constant(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::new(move || value.clone())
    }

    pub fn map<R: 'static>(self, mapper: Function<T, R>) -> Supplier<R> {
        Supplier::new(move || mapper.apply(&self.get()))
    }

    /// Computes on the first `get` and returns clones of that value afterwards.
    ///
    /// Concurrent first calls block until the single computation finishes.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdas::Supplier;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// let calls = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&calls);
    /// let lazy = Supplier::new(move || counter.fetch_add(1, Ordering::SeqCst) + 100).memoized();
    /// assert_eq!(lazy.get(), 100);
    /// assert_eq!(lazy.get(), 100);
    /// assert_eq!(calls.load(Ordering::SeqCst), 1);
    /// ```
    pub fn memoized(self) -> MemoizedSupplier<T>
    where
        T: Clone + Send + Sync,
    {
        MemoizedSupplier {
            supplier: self,
            cell: OnceCell::new(),
        }
    }
}

pub struct MemoizedSupplier<T> {
    supplier: Supplier<T>,
    cell: OnceCell<T>,
}

impl<T: Clone + Send + Sync + 'static> MemoizedSupplier<T> {
    pub fn get(&self) -> T {
        self.cell.get_or_init(|| self.supplier.get()).clone()
    }

    pub fn is_computed(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn into_supplier(self) -> Supplier<T> {
        Supplier::new(move || self.get())
    }
}
