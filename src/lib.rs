//! # promissory
//!
//! Functional programming type classes for Rust, together with a
//! single-assignment, callback-driven [`Future`](future::Future).
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup, Monoid
//! - **Future**: a promise-like container that is settled exactly once and
//!   propagates its settlement to every registered continuation
//! - **Effects**: `IO` for deferred computations, `Writer` for values paired
//!   with an accumulated log
//! - **Natural Transformations**: conversions between `Option`, `Vec` and
//!   `Future`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `future`: The single-assignment `Future` and natural transformations
//! - `effect`: `IO` and `Writer`
//! - `async`: Awaiting a `Future` from `async` code
//! - `serde`: Serialization for wrappers, `Writer` and error types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use promissory::prelude::*;
//!
//! let (future, resolver, _rejecter) = Future::<i32>::pending();
//! let doubled = future.then(|value| value * 2);
//! assert!(doubled.is_pending());
//!
//! resolver.resolve(21);
//! assert_eq!(doubled.value(), Some(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use promissory::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "future")]
    pub use crate::future::*;

    #[cfg(feature = "future")]
    pub use crate::natural::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "future")]
pub mod future;

#[cfg(feature = "future")]
pub mod natural;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(any(feature = "future", feature = "effect"))]
mod panic;
