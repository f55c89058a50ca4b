//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! The type classes in this crate talk about "the same container holding a
//! different type": `fmap` turns a `Future<A, E>` into a `Future<B, E>`, and
//! `Writer<W, A>` into `Writer<W, B>`. Rust has no syntax for the bare
//! constructor `Future<_, E>`, so [`TypeConstructor`] names it through a GAT
//! instead.
//!
//! Every parameter other than the inner one is fixed by the implementation:
//! the error type of a `Future` and the log type of a `Writer` survive every
//! re-application.
//!
//! # Example
//!
//! ```rust
//! use promissory::typeclass::TypeConstructor;
//!
//! type Lengths = <Vec<String> as TypeConstructor>::WithType<usize>;
//!
//! let words = vec!["one".to_string(), "three".to_string()];
//! let lengths: Lengths = words.iter().map(String::len).collect();
//! assert_eq!(lengths, vec![3, 5]);
//! ```

/// A type constructor applied to its inner type.
///
/// # Associated Types
///
/// - `Inner`: the type the constructor is currently applied to. `i32` for
///   `Option<i32>`, `A` for `Future<A, E>`.
/// - `WithType<B>`: the same constructor applied to `B`, with every other
///   parameter unchanged. `Future<B, E>` for `Future<A, E>`.
///
/// # Laws
///
/// - `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
/// - `<F::WithType<B> as TypeConstructor>::Inner` is `B`, which the bound on
///   `WithType` enforces.
///
/// # Example
///
/// ```rust
/// use promissory::future::{Future, FutureError};
/// use promissory::typeclass::TypeConstructor;
///
/// fn takes_text_future(_: <Future<i32> as TypeConstructor>::WithType<String>) {}
///
/// let text: Future<String, FutureError> = Future::resolve("ready".to_string());
/// takes_text_future(text);
/// ```
pub trait TypeConstructor {
    /// The type this constructor is applied to.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// Bounded by `TypeConstructor<Inner = B>` so re-applications chain.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
