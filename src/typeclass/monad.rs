//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with the ability to sequence computations
//! where each step depends on the result of the previous one.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use promissory::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use promissory::typeclass::Monad;
///
/// let x = Some(5);
/// let y = x.flat_map(|n| if n > 0 { Some(n * 2) } else { None });
/// assert_eq!(y, Some(10));
/// ```
pub trait Monad: Applicative {
    /// Applies a function that returns a monad to the inner value, then
    /// flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).flat_map(|n| Some(n * 2)), Some(10));
    /// assert_eq!(Some(5).flat_map(|n| if n > 10 { Some(n) } else { None }), None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Alias for `flat_map`, matching `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

/// Monad operations for `Vec`.
///
/// Every element is fed to the function and the resulting Vecs are
/// concatenated in order.
///
/// # Examples
///
/// ```rust
/// use promissory::typeclass::MonadVec;
///
/// let result: Vec<i32> = vec![1, 2, 3].flat_map(|x| vec![x, x * 10]);
/// assert_eq!(result, vec![1, 10, 2, 20, 3, 30]);
/// ```
pub trait MonadVec: Sized {
    /// The inner type of the Vec.
    type VecInner;

    /// Applies a function to each element and concatenates the results.
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>;

    /// Alias for `flat_map`.
    fn and_then<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>,
    {
        self.flat_map(function)
    }

    /// Concatenates a Vec of Vecs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::typeclass::MonadVec;
    ///
    /// let nested = vec![vec![1, 2], vec![], vec![3]];
    /// assert_eq!(nested.flatten(), vec![1, 2, 3]);
    /// ```
    fn flatten<B>(self) -> Vec<B>
    where
        Self::VecInner: IntoIterator<Item = B>;
}

impl<A> MonadVec for Vec<A> {
    type VecInner = A;

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }

    #[inline]
    fn flatten<B>(self) -> Vec<B>
    where
        A: IntoIterator<Item = B>,
    {
        self.into_iter().flatten().collect()
    }
}
