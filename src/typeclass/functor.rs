//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to its inner value(s) while its
//! shape is preserved. For a [`Future`](crate::future::Future) the "shape"
//! includes time: the mapped Future settles once the original one does.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use promissory::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! let transformed: Option<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let none_value: Option<i32> = None;
//! let transformed: Option<String> = none_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, None);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// The function bounds carry `'static` because deferred containers (`IO`,
/// `Future`) store the function until a value is available.
///
/// # Examples
///
/// ```rust
/// use promissory::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// let y: Option<i32> = x.fmap(|n| n * 2);
    /// assert_eq!(y, Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the inner type does not implement `Clone` or the functor
    /// should stay available.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::typeclass::Functor;
    ///
    /// let x: Option<String> = Some("hello".to_string());
    /// let y: Option<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Some(5));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.replace("replaced"), Some("replaced"));
    ///
    /// let y: Option<i32> = None;
    /// assert_eq!(y.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(move |_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissory::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.void(), Some(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// Mapping for containers with multiple elements.
///
/// `Functor::fmap` takes a `FnOnce`, which can only be called once. A `Vec`
/// needs to call its function for every element, so it maps through
/// `fmap_mut` instead.
///
/// # Examples
///
/// ```rust
/// use promissory::typeclass::FunctorMut;
///
/// let numbers = vec![1, 2, 3];
/// let doubled: Vec<i32> = numbers.fmap_mut(|n| n * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies a mutable function to each element in the functor.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a mutable function to references of each element.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> FunctorMut for Vec<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(5), Some("5".to_string()))]
    #[case(None, None)]
    fn option_fmap(#[case] input: Option<i32>, #[case] expected: Option<String>) {
        assert_eq!(input.fmap(|n| n.to_string()), expected);
    }

    #[rstest]
    fn option_fmap_ref_keeps_original() {
        let x: Option<String> = Some("hello".to_string());
        let y: Option<usize> = x.fmap_ref(|s| s.len());
        assert_eq!(y, Some(5));
        assert_eq!(x, Some("hello".to_string()));
    }

    #[rstest]
    fn option_replace_and_void() {
        assert_eq!(Some(5).replace("replaced"), Some("replaced"));
        assert_eq!(None::<i32>.replace("replaced"), None);
        assert_eq!(Some(5).void(), Some(()));
    }

    #[rstest]
    fn option_identity_law() {
        let some_value: Option<i32> = Some(42);
        assert_eq!(some_value.fmap(|x| x), some_value);

        let none_value: Option<i32> = None;
        assert_eq!(none_value.fmap(|x| x), none_value);
    }

    #[rstest]
    fn option_composition_law() {
        let function1 = |n: i32| n + 1;
        let function2 = |n: i32| n * 2;

        let left = Some(5).fmap(function1).fmap(function2);
        let right = Some(5).fmap(move |x| function2(function1(x)));

        assert_eq!(left, right);
        assert_eq!(left, Some(12));
    }

    #[rstest]
    fn vec_fmap_mut_transforms_all_elements() {
        let doubled: Vec<i32> = vec![1, 2, 3].fmap_mut(|n| n * 2);
        assert_eq!(doubled, vec![2, 4, 6]);
    }

    #[rstest]
    fn vec_fmap_mut_empty() {
        let empty: Vec<i32> = vec![];
        let result: Vec<String> = empty.fmap_mut(|n| n.to_string());
        assert!(result.is_empty());
    }

    #[rstest]
    fn vec_fmap_ref_mut_keeps_original() {
        let strings = vec!["hello".to_string(), "world!".to_string()];
        let lengths: Vec<usize> = strings.fmap_ref_mut(|s| s.len());
        assert_eq!(lengths, vec![5, 6]);
        assert_eq!(strings.len(), 2);
    }
}
