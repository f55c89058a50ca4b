//! The `Future` handle and its settlement capabilities.

use std::cell::RefCell;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use static_assertions::assert_not_impl_any;

use super::error::{FutureError, UnrecognizedError};
use super::state::{self, Callback, FutureState, SharedState};
use crate::panic::panic_message;

/// A single-assignment value that is either pending or settled once, with a
/// value (`Fulfilled`) or an error (`Rejected`).
///
/// Cloning a `Future` clones the handle: every clone observes the same
/// settlement. Continuations registered with [`then`](Self::then) and the
/// other operators run synchronously, in registration order, inside the call
/// that settles the Future, or immediately when it is already settled.
///
/// A `Future` is single-threaded (`!Send`, `!Sync`).
///
/// # Callbacks
///
/// Callbacks on a Future that is never settled are kept until every handle
/// and capability is dropped. A continuation that registers on the same
/// Future while it is settling runs after every callback registered before
/// it. A continuation that panics unwinds out of the settling call, and the
/// callbacks queued after it never run: their derived Futures stay pending.
///
/// # Examples
///
/// ```rust
/// use promissory::future::Future;
///
/// let future: Future<i32> = Future::new(|resolver, _rejecter| {
///     resolver.resolve(5);
///     Ok(())
/// });
/// let doubled = future.then(|x| x * 2);
/// assert_eq!(doubled.value(), Some(10));
/// ```
pub struct Future<A, E = FutureError> {
    state: SharedState<A, E>,
}

/// The capability to fulfill a pending [`Future`].
///
/// Resolving an already settled Future does nothing.
pub struct Resolver<A, E = FutureError> {
    state: SharedState<A, E>,
}

/// The capability to reject a pending [`Future`].
///
/// Rejecting an already settled Future does nothing.
pub struct Rejecter<A, E = FutureError> {
    state: SharedState<A, E>,
}

assert_not_impl_any!(Future<i32>: Send, Sync);
assert_not_impl_any!(Resolver<i32>: Send, Sync);
assert_not_impl_any!(Rejecter<i32>: Send, Sync);

impl<A, E> Future<A, E> {
    /// Creates a Future and runs `executor` synchronously with its
    /// capabilities.
    ///
    /// The Future is returned whether or not the executor settled it. When
    /// the executor fails the Future is rejected:
    ///
    /// - `Err(error)` rejects with exactly `error`,
    /// - a panic rejects with `E::from(UnrecognizedError)`.
    ///
    /// A failure after the executor already settled the Future changes nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::future::{Future, FutureError};
    ///
    /// let failed: Future<i32> = Future::new(|_, _| Err(FutureError::failed("boom")));
    /// assert_eq!(failed.error(), Some(FutureError::failed("boom")));
    ///
    /// let panicked: Future<i32> = Future::new(|_, _| panic!("unexpected"));
    /// assert!(matches!(panicked.error(), Some(FutureError::Unrecognized(_))));
    /// ```
    pub fn new<X>(executor: X) -> Self
    where
        X: FnOnce(Resolver<A, E>, Rejecter<A, E>) -> Result<(), E>,
        E: From<UnrecognizedError>,
    {
        let (future, resolver, rejecter) = Self::pending();
        let failure_rejecter = rejecter.clone();

        match catch_unwind(AssertUnwindSafe(|| executor(resolver, rejecter))) {
            Ok(Ok(())) => {}
            Ok(Err(error)) => failure_rejecter.reject(error),
            Err(payload) => {
                let error = UnrecognizedError::new(panic_message(payload.as_ref()));
                tracing::debug!(
                    panic_message = error.panic_message(),
                    "executor panicked, rejecting with an unrecognized error"
                );
                failure_rejecter.reject(E::from(error));
            }
        }
        future
    }

    /// Creates an already fulfilled Future.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::future::Future;
    ///
    /// let future: Future<&str> = Future::resolve("ready");
    /// assert!(future.is_fulfilled());
    /// ```
    pub fn resolve(value: A) -> Self {
        Self::settled_with(FutureState::fulfilled(Rc::new(value)))
    }

    /// Creates an already rejected Future.
    pub fn reject(error: E) -> Self {
        Self::settled_with(FutureState::rejected(Rc::new(error)))
    }

    /// Creates a pending Future together with its capabilities.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::future::Future;
    ///
    /// let (future, resolver, _rejecter) = Future::<i32>::pending();
    /// assert!(future.is_pending());
    ///
    /// resolver.resolve(1);
    /// assert_eq!(future.value(), Some(1));
    /// ```
    #[must_use]
    pub fn pending() -> (Self, Resolver<A, E>, Rejecter<A, E>) {
        let state = Rc::new(RefCell::new(FutureState::pending()));
        let resolver = Resolver {
            state: Rc::clone(&state),
        };
        let rejecter = Rejecter {
            state: Rc::clone(&state),
        };
        (Self { state }, resolver, rejecter)
    }

    fn settled_with(state: FutureState<A, E>) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Returns `true` while the Future is not settled.
    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_pending()
    }

    /// Returns `true` if the Future was fulfilled.
    pub fn is_fulfilled(&self) -> bool {
        matches!(&*self.state.borrow(), FutureState::Fulfilled { .. })
    }

    /// Returns `true` if the Future was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(&*self.state.borrow(), FutureState::Rejected { .. })
    }

    /// Returns `true` once the Future is fulfilled or rejected.
    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }

    /// Returns a clone of the fulfilled value, or `None`.
    pub fn value(&self) -> Option<A>
    where
        A: Clone,
    {
        match &*self.state.borrow() {
            FutureState::Fulfilled { value, .. } => Some(A::clone(value)),
            _ => None,
        }
    }

    /// Returns a clone of the rejection error, or `None`.
    pub fn error(&self) -> Option<E>
    where
        E: Clone,
    {
        match &*self.state.borrow() {
            FutureState::Rejected { error, .. } => Some(E::clone(error)),
            _ => None,
        }
    }

    /// Returns the settled outcome, or `None` while pending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::future::{Future, FutureError};
    ///
    /// assert_eq!(Future::<i32>::resolve(1).outcome(), Some(Ok(1)));
    /// assert_eq!(
    ///     Future::<i32>::reject(FutureError::EmptyList).outcome(),
    ///     Some(Err(FutureError::EmptyList))
    /// );
    /// assert_eq!(Future::<i32>::pending().0.outcome(), None);
    /// ```
    pub fn outcome(&self) -> Option<Result<A, E>>
    where
        A: Clone,
        E: Clone,
    {
        match &*self.state.borrow() {
            FutureState::Pending { .. } => None,
            FutureState::Fulfilled { value, .. } => Some(Ok(A::clone(value))),
            FutureState::Rejected { error, .. } => Some(Err(E::clone(error))),
        }
    }

    pub(crate) fn subscribe(
        &self,
        on_fulfilled: Option<Callback<A>>,
        on_rejected: Option<Callback<E>>,
    ) {
        state::subscribe(&self.state, on_fulfilled, on_rejected);
    }
}

impl<A, E> Resolver<A, E> {
    /// Fulfills the Future with `value` and runs its fulfillment callbacks.
    pub fn resolve(&self, value: A) {
        state::fulfill(&self.state, Rc::new(value));
    }

    pub(crate) fn resolve_shared(&self, value: Rc<A>) {
        state::fulfill(&self.state, value);
    }
}

impl<A, E> Rejecter<A, E> {
    /// Rejects the Future with `error` and runs its rejection callbacks.
    pub fn reject(&self, error: E) {
        state::reject(&self.state, Rc::new(error));
    }

    pub(crate) fn reject_shared(&self, error: Rc<E>) {
        state::reject(&self.state, error);
    }
}

impl<A, E> Clone for Future<A, E> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<A, E> Clone for Resolver<A, E> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<A, E> Clone for Rejecter<A, E> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<A: fmt::Debug, E: fmt::Debug> fmt::Debug for Future<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            FutureState::Pending { .. } => {
                formatter.debug_tuple("Future").field(&"<pending>").finish()
            }
            FutureState::Fulfilled { value, .. } => formatter
                .debug_tuple("Future")
                .field(&format_args!("Fulfilled({value:?})"))
                .finish(),
            FutureState::Rejected { error, .. } => formatter
                .debug_tuple("Future")
                .field(&format_args!("Rejected({error:?})"))
                .finish(),
        }
    }
}

impl<A, E> fmt::Debug for Resolver<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Resolver").finish_non_exhaustive()
    }
}

impl<A, E> fmt::Debug for Rejecter<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Rejecter").finish_non_exhaustive()
    }
}
