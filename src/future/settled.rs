//! Awaiting a `Future` from `async` code.
//!
//! [`Settled`] bridges the callback-driven [`Future`] to
//! [`std::future::Future`]. It never drives settlement itself: a task
//! awaiting a Future that nobody settles stays pending.

use std::cell::RefCell;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

use futures::future::FusedFuture;

use super::handle::Future;

/// A [`std::future::Future`] that completes with the outcome of a
/// [`Future`].
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use promissory::future::Future;
///
/// let future: Future<i32> = Future::resolve(3);
/// assert_eq!(block_on(future.settled()), Ok(3));
/// ```
#[must_use = "futures do nothing unless polled"]
pub struct Settled<A, E> {
    future: Future<A, E>,
    waker: Rc<RefCell<Option<Waker>>>,
    subscribed: bool,
    terminated: bool,
}

impl<A, E> Future<A, E> {
    /// Returns an awaitable view of this Future's outcome.
    pub fn settled(&self) -> Settled<A, E> {
        Settled {
            future: self.clone(),
            waker: Rc::new(RefCell::new(None)),
            subscribed: false,
            terminated: false,
        }
    }
}

impl<A: Clone + 'static, E: Clone + 'static> std::future::Future for Settled<A, E> {
    type Output = Result<A, E>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(outcome) = self.future.outcome() {
            self.terminated = true;
            return Poll::Ready(outcome);
        }

        *self.waker.borrow_mut() = Some(context.waker().clone());
        if !self.subscribed {
            self.subscribed = true;
            let on_fulfilled = Rc::clone(&self.waker);
            let on_rejected = Rc::clone(&self.waker);
            self.future.subscribe(
                Some(Box::new(move |_: &Rc<A>| wake(&on_fulfilled))),
                Some(Box::new(move |_: &Rc<E>| wake(&on_rejected))),
            );
        }
        Poll::Pending
    }
}

impl<A: Clone + 'static, E: Clone + 'static> FusedFuture for Settled<A, E> {
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl<A: Clone + 'static, E: Clone + 'static> std::future::IntoFuture for Future<A, E> {
    type Output = Result<A, E>;
    type IntoFuture = Settled<A, E>;

    fn into_future(self) -> Self::IntoFuture {
        self.settled()
    }
}

fn wake(slot: &RefCell<Option<Waker>>) {
    let waker = slot.borrow_mut().take();
    if let Some(waker) = waker {
        waker.wake();
    }
}
