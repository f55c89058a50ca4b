//! Composition operators that derive new Futures from existing ones.
//!
//! Every operator registers callbacks on its input and returns a fresh
//! Future. The derived Future never refers back to its input.
//!
//! Only [`Future::then_or_else`], [`Future::catch`], [`Future::finally`] and
//! [`Future::join`] wire a rejection path. On a rejected input, a derived
//! Future without one stays pending forever.

use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use super::handle::Future;
use crate::panic::panic_message;

impl<A: 'static, E: 'static> Future<A, E> {
    /// Derives a Future fulfilled with `on_fulfilled(&value)`.
    ///
    /// The handler borrows the value, so `A` need not be `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::future::Future;
    ///
    /// let future: Future<String> = Future::resolve("hello".to_string());
    /// assert_eq!(future.then_ref(String::len).value(), Some(5));
    /// ```
    pub fn then_ref<B, F>(&self, on_fulfilled: F) -> Future<B, E>
    where
        F: FnOnce(&A) -> B + 'static,
        B: 'static,
    {
        let (derived, resolver, _) = Future::pending();
        self.subscribe(
            Some(Box::new(move |value: &Rc<A>| {
                resolver.resolve(on_fulfilled(value));
            })),
            None,
        );
        derived
    }

    /// Derives a Future fulfilled with `on_fulfilled(value)`.
    ///
    /// If `self` is rejected the derived Future stays pending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::future::{Future, FutureError};
    ///
    /// let (future, resolver, _) = Future::<i32>::pending();
    /// let doubled = future.then(|x| x * 2);
    /// resolver.resolve(21);
    /// assert_eq!(doubled.value(), Some(42));
    ///
    /// let rejected: Future<i32> = Future::reject(FutureError::failed("no"));
    /// assert!(rejected.then(|x| x * 2).is_pending());
    /// ```
    pub fn then<B, F>(&self, on_fulfilled: F) -> Future<B, E>
    where
        A: Clone,
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.then_ref(move |value: &A| on_fulfilled(value.clone()))
    }

    /// Derives a Future that is *fulfilled* on either path: with
    /// `on_fulfilled(value)` or with `on_rejected(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::future::{Future, FutureError};
    ///
    /// let rejected: Future<i32> = Future::reject(FutureError::failed("no"));
    /// let handled = rejected.then_or_else(|x| x.to_string(), |error| format!("failed: {error}"));
    /// assert_eq!(handled.value(), Some("failed: no".to_string()));
    /// ```
    pub fn then_or_else<B, F, G>(&self, on_fulfilled: F, on_rejected: G) -> Future<B, E>
    where
        A: Clone,
        E: Clone,
        F: FnOnce(A) -> B + 'static,
        G: FnOnce(E) -> B + 'static,
        B: 'static,
    {
        let (derived, resolver, _) = Future::pending();
        let recovering_resolver = resolver.clone();
        self.subscribe(
            Some(Box::new(move |value: &Rc<A>| {
                resolver.resolve(on_fulfilled(A::clone(value)));
            })),
            Some(Box::new(move |error: &Rc<E>| {
                recovering_resolver.resolve(on_rejected(E::clone(error)));
            })),
        );
        derived
    }

    /// Derives a Future fulfilled with `on_rejected(error)` when `self` is
    /// rejected. If `self` is fulfilled the derived Future stays pending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::future::{Future, FutureError};
    ///
    /// let (future, _, rejecter) = Future::<i32>::pending();
    /// let recovered = future.catch(|_| "recovered");
    /// rejecter.reject(FutureError::failed("boom"));
    /// assert_eq!(recovered.value(), Some("recovered"));
    /// ```
    pub fn catch<B, G>(&self, on_rejected: G) -> Future<B, E>
    where
        E: Clone,
        G: FnOnce(E) -> B + 'static,
        B: 'static,
    {
        let (derived, resolver, _) = Future::pending();
        self.subscribe(
            None,
            Some(Box::new(move |error: &Rc<E>| {
                resolver.resolve(on_rejected(E::clone(error)));
            })),
        );
        derived
    }

    /// Runs `handler` once `self` settles, then forwards the outcome
    /// unchanged.
    ///
    /// A panic inside `handler` is caught and discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use promissory::future::{Future, FutureError};
    ///
    /// let cleaned_up = Rc::new(Cell::new(false));
    /// let flag = Rc::clone(&cleaned_up);
    ///
    /// let future: Future<i32> = Future::reject(FutureError::failed("no"));
    /// let forwarded = future.finally(move || flag.set(true));
    ///
    /// assert!(cleaned_up.get());
    /// assert_eq!(forwarded.error(), Some(FutureError::failed("no")));
    /// ```
    pub fn finally<H>(&self, handler: H) -> Self
    where
        H: FnOnce() + 'static,
    {
        let (derived, resolver, rejecter) = Self::pending();
        let handler = Rc::new(Cell::new(Some(handler)));
        let rejection_handler = Rc::clone(&handler);
        self.subscribe(
            Some(Box::new(move |value: &Rc<A>| {
                run_finally_handler(&handler);
                resolver.resolve_shared(Rc::clone(value));
            })),
            Some(Box::new(move |error: &Rc<E>| {
                run_finally_handler(&rejection_handler);
                rejecter.reject_shared(Rc::clone(error));
            })),
        );
        derived
    }

    /// Sequences a Future-returning function: `self.then(function).join()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::future::{Future, FutureError};
    ///
    /// fn halve(value: i32) -> Future<i32> {
    ///     if value % 2 == 0 {
    ///         Future::resolve(value / 2)
    ///     } else {
    ///         Future::reject(FutureError::failed("odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Future::resolve(8).bind(halve).bind(halve).value(), Some(2));
    /// assert!(Future::resolve(6).bind(halve).bind(halve).is_rejected());
    /// ```
    pub fn bind<B, F>(&self, function: F) -> Future<B, E>
    where
        A: Clone,
        F: FnOnce(A) -> Future<B, E> + 'static,
        B: 'static,
    {
        self.then(function).join()
    }
}

impl<A: 'static, E: 'static> Future<Future<A, E>, E> {
    /// Flattens a Future of a Future.
    ///
    /// An outer rejection rejects the result. Otherwise the result follows
    /// the inner Future's outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::future::{Future, FutureError};
    ///
    /// let nested: Future<Future<i32>> = Future::resolve(Future::resolve(7));
    /// assert_eq!(nested.join().value(), Some(7));
    ///
    /// let failed: Future<Future<i32>> = Future::resolve(Future::reject(FutureError::EmptyList));
    /// assert_eq!(failed.join().error(), Some(FutureError::EmptyList));
    /// ```
    pub fn join(&self) -> Future<A, E> {
        let (derived, resolver, rejecter) = Future::pending();
        let outer_rejecter = rejecter.clone();
        self.subscribe(
            Some(Box::new(move |inner: &Rc<Future<A, E>>| {
                inner.subscribe(
                    Some(Box::new(move |value: &Rc<A>| {
                        resolver.resolve_shared(Rc::clone(value));
                    })),
                    Some(Box::new(move |error: &Rc<E>| {
                        rejecter.reject_shared(Rc::clone(error));
                    })),
                );
            })),
            Some(Box::new(move |error: &Rc<E>| {
                outer_rejecter.reject_shared(Rc::clone(error));
            })),
        );
        derived
    }
}

fn run_finally_handler<H: FnOnce()>(handler: &Cell<Option<H>>) {
    let Some(handler) = handler.take() else {
        return;
    };
    if let Err(payload) = catch_unwind(AssertUnwindSafe(handler)) {
        tracing::debug!(
            panic_message = panic_message(payload.as_ref()),
            "finally handler panicked, forwarding the outcome"
        );
    }
}
