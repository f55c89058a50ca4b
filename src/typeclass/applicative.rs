//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with the ability to:
//!
//! - Lift pure values into the context (`pure`)
//! - Combine independent values in the context (`map2`, `product`)
//! - Apply a function held in the context to a value held in the context (`apply`)
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use promissory::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//!
//! assert_eq!(Some(1).product(Some("hello")), Some((1, "hello")));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// Values taken from a *second* container (`other` in `map2` and `apply`)
/// must be `Clone + 'static`: a settled `Future` keeps its value and hands
/// each continuation its own copy.
///
/// # Examples
///
/// ```rust
/// use promissory::typeclass::Applicative;
///
/// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
/// assert_eq!(function.apply(Some(5)), Some(6));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: 'static;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side never produces a value, neither does the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C + 'static,
        B: Clone + 'static,
        C: 'static;

    /// Combines two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("hello")), Some((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: Clone + 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the function inside `self` to the value inside `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(5)), Some(6));
    /// assert_eq!(None::<fn(i32) -> i32>.apply(Some(5)), None);
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
        B: Clone + 'static,
        Output: 'static;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

/// Applicative operations for `Vec`, the list of non-deterministic results.
///
/// Combining two Vecs produces every combination, so the elements must be
/// `Clone` and the functions `FnMut`.
///
/// # Examples
///
/// ```rust
/// use promissory::typeclass::ApplicativeVec;
///
/// let functions: Vec<fn(i32) -> i32> = vec![|x: i32| x + 1, |x: i32| x * 10];
/// assert_eq!(functions.apply(vec![1, 2]), vec![2, 10, 3, 20]);
/// ```
pub trait ApplicativeVec: Sized {
    /// The inner type of the Vec.
    type VecInner;

    /// Lifts a pure value into a singleton Vec.
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    /// Combines two Vecs using a binary function (cartesian product).
    fn map2<B: Clone, C, F>(self, other: Vec<B>, function: F) -> Vec<C>
    where
        Self::VecInner: Clone,
        F: FnMut(Self::VecInner, B) -> C;

    /// Creates the cartesian product of two Vecs as tuples.
    fn product<B: Clone>(self, other: Vec<B>) -> Vec<(Self::VecInner, B)>
    where
        Self::VecInner: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies every function in `self` to every value in `values`.
    ///
    /// Values drive the outer loop: for each value, every function is
    /// applied in order.
    fn apply<B: Clone, Output>(self, values: Vec<B>) -> Vec<Output>
    where
        Self::VecInner: FnMut(B) -> Output;
}

impl<A> ApplicativeVec for Vec<A> {
    type VecInner = A;

    #[inline]
    fn map2<B: Clone, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        A: Clone,
        F: FnMut(A, B) -> C,
    {
        let mut result = Vec::with_capacity(self.len().saturating_mul(other.len()));
        for a in &self {
            for b in &other {
                result.push(function(a.clone(), b.clone()));
            }
        }
        result
    }

    #[inline]
    fn apply<B: Clone, Output>(mut self, values: Vec<B>) -> Vec<Output>
    where
        A: FnMut(B) -> Output,
    {
        let mut result = Vec::with_capacity(self.len().saturating_mul(values.len()));
        for value in values {
            for function in &mut self {
                result.push(function(value.clone()));
            }
        }
        result
    }
}
