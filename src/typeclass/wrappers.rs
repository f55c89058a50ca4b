//! Numeric wrapper types selecting an algebraic operation.
//!
//! The same number can be combined by addition ([`Sum`], identity 0) or by
//! multiplication ([`Product`], identity 1). Wrapping it picks the
//! `Semigroup`/`Monoid` instance, which is handy as a `Writer` log.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Sum Wrapper
// =============================================================================

/// The additive semigroup/monoid.
///
/// # Examples
///
/// ```rust
/// use promissory::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
/// assert_eq!(Sum::<i32>::empty(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::typeclass::Sum;
    ///
    /// assert_eq!(Sum::new(42).into_inner(), 42);
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Product Wrapper
// =============================================================================

/// The multiplicative semigroup/monoid.
///
/// `Default` is not derived: the identity is 1, not `A::default()`.
///
/// # Examples
///
/// ```rust
/// use promissory::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product::new(3).combine(Product::new(5)), Product::new(15));
/// assert_eq!(Product::<i32>::empty(), Product::new(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_accessors() {
        let sum = Sum::new(7);
        assert_eq!(*sum.as_inner(), 7);
        assert_eq!(sum.into_inner(), 7);
        assert_eq!(Sum::from(3), Sum(3));
        assert_eq!(Sum::<i64>::default(), Sum(0));
    }

    #[rstest]
    fn product_accessors() {
        let product = Product::new(2.5);
        assert_eq!(*product.as_inner(), 2.5);
        assert_eq!(Product::from(4).into_inner(), 4);
    }

    #[rstest]
    fn wrappers_order_like_their_contents() {
        assert!(Sum::new(1) < Sum::new(2));
        assert!(Product::new(3) > Product::new(2));
    }
}
