//! Writer - values paired with an accumulated log.
//!
//! `Writer<W, A>` carries a result of type `A` and an output of type `W`.
//! Sequencing two Writers combines their outputs with `Semigroup::combine`,
//! earlier output first.
//!
//! # Examples
//!
//! ```rust
//! use promissory::effect::Writer;
//!
//! fn log(message: &str) -> Writer<Vec<String>, ()> {
//!     Writer::tell(vec![message.to_string()])
//! }
//!
//! let computation = log("step 1")
//!     .then(log("step 2"))
//!     .then(Writer::new(42, Vec::new()));
//!
//! let (result, logs) = computation.run();
//! assert_eq!(result, 42);
//! assert_eq!(logs, vec!["step 1", "step 2"]);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::typeclass::{Applicative, Functor, Monad, Monoid, TypeConstructor};

/// A result paired with accumulated output.
///
/// The type class instances require `W: Monoid + Clone`: `pure` starts from
/// `Monoid::empty`, and `fmap_ref` keeps the original output.
///
/// # Examples
///
/// ```rust
/// use promissory::effect::Writer;
/// use promissory::typeclass::Monad;
///
/// let writer: Writer<String, i32> = Writer::new(10, "first;".to_string());
/// let chained = writer.flat_map(|value| Writer::new(value * 2, "second;".to_string()));
/// assert_eq!(chained.run(), (20, "first;second;".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Writer<W, A> {
    result: A,
    output: W,
}

impl<W, A> Writer<W, A> {
    /// Creates a Writer with the given result and output.
    pub const fn new(result: A, output: W) -> Self {
        Self { result, output }
    }

    /// Returns the result and the output.
    pub fn run(&self) -> (A, W)
    where
        A: Clone,
        W: Clone,
    {
        (self.result.clone(), self.output.clone())
    }

    /// Returns only the result.
    pub fn eval(&self) -> A
    where
        A: Clone,
    {
        self.result.clone()
    }

    /// Returns only the output.
    pub fn exec(&self) -> W
    where
        W: Clone,
    {
        self.output.clone()
    }

    /// Consumes the Writer, returning the result and the output.
    pub fn into_parts(self) -> (A, W) {
        (self.result, self.output)
    }
}

impl<W: Monoid, A> Writer<W, A> {
    /// Sequences two Writers, keeping the result of `next` and both outputs.
    #[must_use]
    pub fn then<B>(self, next: Writer<W, B>) -> Writer<W, B> {
        Writer {
            result: next.result,
            output: self.output.combine(next.output),
        }
    }
}

impl<W> Writer<W, ()> {
    /// Creates a Writer that only records output.
    pub const fn tell(output: W) -> Self {
        Self { result: (), output }
    }
}

impl<W: Monoid, A> Writer<W, Writer<W, A>> {
    /// Flattens a nested Writer: outer output, then inner output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::effect::Writer;
    ///
    /// let nested = Writer::new(Writer::new(1, vec!["inner"]), vec!["outer"]);
    /// assert_eq!(nested.join().run(), (1, vec!["outer", "inner"]));
    /// ```
    #[must_use]
    pub fn join(self) -> Writer<W, A> {
        Writer {
            result: self.result.result,
            output: self.output.combine(self.result.output),
        }
    }
}

// =============================================================================
// Type Class Instances
// =============================================================================

impl<W, A> TypeConstructor for Writer<W, A> {
    type Inner = A;
    type WithType<B> = Writer<W, B>;
}

impl<W: Monoid + Clone, A> Functor for Writer<W, A> {
    fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer {
            result: function(self.result),
            output: self.output,
        }
    }

    fn fmap_ref<B, F>(&self, function: F) -> Writer<W, B>
    where
        F: FnOnce(&A) -> B,
    {
        Writer {
            result: function(&self.result),
            output: self.output.clone(),
        }
    }
}

impl<W: Monoid + Clone, A> Applicative for Writer<W, A> {
    fn pure<B>(value: B) -> Writer<W, B> {
        Writer {
            result: value,
            output: W::empty(),
        }
    }

    fn map2<B, C, F>(self, other: Writer<W, B>, function: F) -> Writer<W, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Writer {
            result: function(self.result, other.result),
            output: self.output.combine(other.output),
        }
    }

    /// The value's output comes before the function's output.
    fn apply<B, Output>(self, other: Writer<W, B>) -> Writer<W, Output>
    where
        A: FnOnce(B) -> Output,
    {
        Writer {
            result: (self.result)(other.result),
            output: other.output.combine(self.output),
        }
    }
}

impl<W: Monoid + Clone, A> Monad for Writer<W, A> {
    fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        let next = function(self.result);
        Writer {
            result: next.result,
            output: self.output.combine(next.output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Log = Vec<&'static str>;

    #[rstest]
    fn pure_has_empty_output() {
        let writer: Writer<Log, i32> = <Writer<Log, ()>>::pure(5);
        assert_eq!(writer.run(), (5, vec![]));
    }

    #[rstest]
    fn tell_records_output() {
        assert_eq!(Writer::tell(vec!["hello"]).exec(), vec!["hello"]);
    }

    #[rstest]
    fn fmap_keeps_output() {
        let writer = Writer::new(2, vec!["a"]).fmap(|x| x * 3);
        assert_eq!(writer.run(), (6, vec!["a"]));
    }

    #[rstest]
    fn fmap_ref_keeps_the_original() {
        let writer = Writer::new("text".to_string(), vec!["a"]);
        let length = writer.fmap_ref(String::len);
        assert_eq!(length.run(), (4, vec!["a"]));
        assert_eq!(writer.eval(), "text");
    }

    #[rstest]
    fn map2_combines_left_then_right() {
        let writer = Writer::new(1, vec!["left"]).map2(Writer::new(2, vec!["right"]), |a, b| a + b);
        assert_eq!(writer.run(), (3, vec!["left", "right"]));
    }

    #[rstest]
    fn apply_puts_value_output_first() {
        let function: Writer<Log, fn(i32) -> i32> = Writer::new(|x| x + 1, vec!["function"]);
        let applied = function.apply(Writer::new(1, vec!["value"]));
        assert_eq!(applied.run(), (2, vec!["value", "function"]));
    }

    #[rstest]
    fn flat_map_and_then_accumulate() {
        let writer = Writer::new(1, vec!["one"])
            .flat_map(|x| Writer::new(x + 1, vec!["two"]))
            .and_then(|x| Writer::new(x * 10, vec!["three"]));
        assert_eq!(writer.run(), (20, vec!["one", "two", "three"]));
    }

    #[rstest]
    fn into_parts_moves_out() {
        let (result, output) = Writer::new(String::from("r"), String::from("o")).into_parts();
        assert_eq!((result.as_str(), output.as_str()), ("r", "o"));
    }
}
