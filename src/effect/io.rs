//! IO - deferred side effects.
//!
//! An `IO<A>` describes a computation producing an `A`. Nothing runs until
//! [`IO::perform`] is called, and each `IO` can be performed once.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use promissory::effect::IO;
//!
//! let executed = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&executed);
//!
//! let io = IO::new(move || {
//!     flag.set(true);
//!     10
//! })
//! .fmap(|x| x * 2)
//! .flat_map(|x| IO::pure(x + 1));
//!
//! assert!(!executed.get());
//! assert_eq!(io.perform(), 21);
//! assert!(executed.get());
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::panic::panic_message;

/// A deferred computation producing a value of type `A`.
///
/// `IO` offers `fmap`, `apply`, `map2`, `join` and `flat_map` as inherent
/// methods: a one-shot action cannot be mapped by reference, so it does not
/// implement `Functor`.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    action: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> IO<A> {
    /// Creates an IO action from a closure. The closure does not run yet.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            action: Box::new(action),
        }
    }

    /// Wraps a pure value in an IO action.
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Runs the action and returns its value.
    pub fn perform(self) -> A {
        (self.action)()
    }

    /// Maps a function over the eventual value.
    #[must_use]
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.perform()))
    }

    /// Runs `self`, then the action returned by `function`.
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || function(self.perform()).perform())
    }

    /// Alias for [`IO::flat_map`].
    #[must_use]
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Runs `self` then `other` and combines their values.
    #[must_use]
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        IO::new(move || {
            let first = self.perform();
            let second = other.perform();
            function(first, second)
        })
    }

    /// Runs `self` then `other` and pairs their values.
    #[must_use]
    pub fn product<B: 'static>(self, other: IO<B>) -> IO<(A, B)> {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the function produced by `self` to the value produced by
    /// `value`. The function action runs first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::effect::IO;
    ///
    /// let function = IO::pure(|x: i32| x + 1);
    /// assert_eq!(function.apply(IO::pure(41)).perform(), 42);
    /// ```
    #[must_use]
    pub fn apply<B, Output>(self, value: IO<B>) -> IO<Output>
    where
        A: FnOnce(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        IO::new(move || {
            let function = self.perform();
            function(value.perform())
        })
    }

    /// Runs the action and turns a panic into a recovery value.
    ///
    /// `handler` receives the panic message, or `"Unknown panic"` when the
    /// payload is not a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::effect::IO;
    ///
    /// let panicking: IO<String> = IO::new(|| panic!("oops"));
    /// let recovered = panicking.catch(|message| format!("recovered from {message}"));
    /// assert_eq!(recovered.perform(), "recovered from oops");
    /// ```
    #[must_use]
    pub fn catch<F>(self, handler: F) -> Self
    where
        F: FnOnce(String) -> A + 'static,
    {
        Self::new(move || match catch_unwind(AssertUnwindSafe(|| self.perform())) {
            Ok(value) => value,
            Err(payload) => handler(
                panic_message(payload.as_ref()).unwrap_or_else(|| "Unknown panic".to_string()),
            ),
        })
    }
}

impl<A: 'static> IO<IO<A>> {
    /// Flattens a nested action: runs the outer action, then the inner one.
    #[must_use]
    pub fn join(self) -> IO<A> {
        self.flat_map(|inner| inner)
    }
}

impl<A> std::fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("IO").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str, value: i32) -> IO<i32> {
        let log = Rc::clone(log);
        IO::new(move || {
            log.borrow_mut().push(name);
            value
        })
    }

    #[rstest]
    fn pure_and_perform() {
        assert_eq!(IO::pure(42).perform(), 42);
    }

    #[rstest]
    fn actions_are_deferred() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let io = recording(&log, "run", 1).fmap(|x| x + 1);
        assert!(log.borrow().is_empty());
        assert_eq!(io.perform(), 2);
        assert_eq!(*log.borrow(), vec!["run"]);
    }

    #[rstest]
    fn map2_runs_left_then_right() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let io = recording(&log, "left", 1).map2(recording(&log, "right", 2), |a, b| a * 10 + b);
        assert_eq!(io.perform(), 12);
        assert_eq!(*log.borrow(), vec!["left", "right"]);
    }

    #[rstest]
    fn apply_runs_the_function_action_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let function_log = Rc::clone(&log);
        let function = IO::new(move || {
            function_log.borrow_mut().push("function");
            |x: i32| x * 3
        });

        let io = function.apply(recording(&log, "value", 5));

        assert_eq!(io.perform(), 15);
        assert_eq!(*log.borrow(), vec!["function", "value"]);
    }

    #[rstest]
    fn join_runs_outer_then_inner() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let inner_log = Rc::clone(&log);
        let outer_log = Rc::clone(&log);
        let nested = IO::new(move || {
            outer_log.borrow_mut().push("outer");
            recording(&inner_log, "inner", 7)
        });

        assert_eq!(nested.join().perform(), 7);
        assert_eq!(*log.borrow(), vec!["outer", "inner"]);
    }

    #[rstest]
    fn catch_passes_through_success() {
        assert_eq!(IO::pure(1).catch(|_| 0).perform(), 1);
    }

    #[rstest]
    fn catch_reports_unknown_payloads() {
        let io: IO<String> = IO::new(|| std::panic::panic_any(3_u32));
        assert_eq!(io.catch(|message| message).perform(), "Unknown panic");
    }

    #[rstest]
    fn product_pairs_values() {
        assert_eq!(IO::pure('a').product(IO::pure(1)).perform(), ('a', 1));
    }
}
