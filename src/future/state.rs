//! The settlement state machine behind every `Future`.
//!
//! A state starts `Pending` with two callback queues and transitions at most
//! once. Every transition takes the queues out of the cell and releases the
//! borrow before a single callback runs, so callbacks may freely register on
//! or settle the same state again.
//!
//! A settled state keeps a `late` queue while its callbacks are still
//! running. Registrations made from inside those callbacks are appended to it
//! and run after every earlier callback, which keeps registration order
//! across re-entrant calls.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

/// A continuation waiting for a settled value or error.
pub(crate) type Callback<T> = Box<dyn FnOnce(&Rc<T>)>;

/// Inline capacity of each callback queue.
///
/// Most Futures carry a single continuation per path.
pub(crate) const CALLBACK_INLINE_CAPACITY: usize = 1;

/// Ordered callbacks waiting for one settlement path.
pub(crate) type CallbackQueue<T> = SmallVec<[Callback<T>; CALLBACK_INLINE_CAPACITY]>;

/// The state shared by a `Future` and its capabilities.
pub(crate) type SharedState<A, E> = Rc<RefCell<FutureState<A, E>>>;

/// Internal state of a `Future`.
pub(crate) enum FutureState<A, E> {
    /// Not settled yet. Holds the continuations in registration order.
    Pending {
        on_fulfilled: CallbackQueue<A>,
        on_rejected: CallbackQueue<E>,
    },
    /// Settled with a value. `late` is `Some` while the settlement is still
    /// running its callbacks.
    Fulfilled {
        value: Rc<A>,
        late: Option<CallbackQueue<A>>,
    },
    /// Settled with an error. `late` as for `Fulfilled`.
    Rejected {
        error: Rc<E>,
        late: Option<CallbackQueue<E>>,
    },
}

impl<A, E> FutureState<A, E> {
    pub(crate) fn pending() -> Self {
        Self::Pending {
            on_fulfilled: SmallVec::new(),
            on_rejected: SmallVec::new(),
        }
    }

    /// A state created already fulfilled, with no callbacks to run.
    pub(crate) const fn fulfilled(value: Rc<A>) -> Self {
        Self::Fulfilled { value, late: None }
    }

    /// A state created already rejected, with no callbacks to run.
    pub(crate) const fn rejected(error: Rc<E>) -> Self {
        Self::Rejected { error, late: None }
    }

    pub(crate) const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    fn take_late_fulfilled(&mut self) -> CallbackQueue<A> {
        match self {
            Self::Fulfilled { late, .. } => take_late_batch(late),
            _ => SmallVec::new(),
        }
    }

    fn take_late_rejected(&mut self) -> CallbackQueue<E> {
        match self {
            Self::Rejected { late, .. } => take_late_batch(late),
            _ => SmallVec::new(),
        }
    }

    fn finish_draining(&mut self) {
        match self {
            Self::Fulfilled { late, .. } => *late = None,
            Self::Rejected { late, .. } => *late = None,
            Self::Pending { .. } => {}
        }
    }
}

/// Takes the callbacks registered since the last batch. An empty batch ends
/// the drain: the queue is closed and later registrations run immediately.
fn take_late_batch<T>(late: &mut Option<CallbackQueue<T>>) -> CallbackQueue<T> {
    let batch = late.as_mut().map(std::mem::take).unwrap_or_default();
    if batch.is_empty() {
        *late = None;
    }
    batch
}

/// Closes the late queue even when a callback unwinds.
///
/// Callbacks not yet run are dropped with it, and their derived Futures stay
/// pending.
struct DrainGuard<'a, A, E> {
    state: &'a RefCell<FutureState<A, E>>,
}

impl<A, E> Drop for DrainGuard<'_, A, E> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_borrow_mut() {
            state.finish_draining();
        }
    }
}

/// Moves a pending state to `settled` and hands back its callback queues.
///
/// Returns `None`, leaving the state untouched, when it was already settled.
fn transition<A, E>(
    state: &RefCell<FutureState<A, E>>,
    settled: FutureState<A, E>,
) -> Option<(CallbackQueue<A>, CallbackQueue<E>)> {
    let previous = {
        let mut guard = state.borrow_mut();
        if !guard.is_pending() {
            return None;
        }
        std::mem::replace(&mut *guard, settled)
    };

    let FutureState::Pending {
        on_fulfilled,
        on_rejected,
    } = previous
    else {
        unreachable!("state was checked to be pending under the same borrow")
    };
    Some((on_fulfilled, on_rejected))
}

/// Runs `batch`, then every batch registered late, until none is left.
fn drain<T, A, E>(
    state: &RefCell<FutureState<A, E>>,
    mut batch: CallbackQueue<T>,
    payload: &Rc<T>,
    take_late: fn(&mut FutureState<A, E>) -> CallbackQueue<T>,
) {
    let _guard = DrainGuard { state };
    loop {
        for callback in batch {
            callback(payload);
        }
        batch = take_late(&mut state.borrow_mut());
        if batch.is_empty() {
            return;
        }
    }
}

/// Fulfills a pending state and runs its fulfillment callbacks in order.
///
/// A panicking callback unwinds out of this call. The callbacks after it
/// never run.
pub(crate) fn fulfill<A, E>(state: &RefCell<FutureState<A, E>>, value: Rc<A>) {
    let settled = FutureState::Fulfilled {
        value: Rc::clone(&value),
        late: Some(SmallVec::new()),
    };
    let Some((on_fulfilled, on_rejected)) = transition(state, settled) else {
        tracing::debug!("ignoring resolve of an already settled future");
        return;
    };
    drop(on_rejected);

    tracing::trace!(callbacks = on_fulfilled.len(), "future fulfilled");
    drain(state, on_fulfilled, &value, FutureState::take_late_fulfilled);
}

/// Rejects a pending state and runs its rejection callbacks in order.
pub(crate) fn reject<A, E>(state: &RefCell<FutureState<A, E>>, error: Rc<E>) {
    let settled = FutureState::Rejected {
        error: Rc::clone(&error),
        late: Some(SmallVec::new()),
    };
    let Some((on_fulfilled, on_rejected)) = transition(state, settled) else {
        tracing::debug!("ignoring reject of an already settled future");
        return;
    };
    drop(on_fulfilled);

    tracing::trace!(callbacks = on_rejected.len(), "future rejected");
    drain(state, on_rejected, &error, FutureState::take_late_rejected);
}

/// Registers continuations on a state.
///
/// While pending, or while the settlement is still running callbacks, the
/// callbacks are queued. Otherwise the one matching the settled outcome runs
/// immediately and the other is dropped.
pub(crate) fn subscribe<A, E>(
    state: &RefCell<FutureState<A, E>>,
    on_fulfilled: Option<Callback<A>>,
    on_rejected: Option<Callback<E>>,
) {
    let outcome = {
        let mut guard = state.borrow_mut();
        match &mut *guard {
            FutureState::Pending {
                on_fulfilled: fulfilled_queue,
                on_rejected: rejected_queue,
            } => {
                fulfilled_queue.extend(on_fulfilled);
                rejected_queue.extend(on_rejected);
                return;
            }
            FutureState::Fulfilled {
                late: Some(queue), ..
            } => {
                queue.extend(on_fulfilled);
                return;
            }
            FutureState::Rejected {
                late: Some(queue), ..
            } => {
                queue.extend(on_rejected);
                return;
            }
            FutureState::Fulfilled { value, late: None } => Ok(Rc::clone(value)),
            FutureState::Rejected { error, late: None } => Err(Rc::clone(error)),
        }
    };

    match outcome {
        Ok(value) => {
            if let Some(callback) = on_fulfilled {
                callback(&value);
            }
        }
        Err(error) => {
            if let Some(callback) = on_rejected {
                callback(&error);
            }
        }
    }
}
