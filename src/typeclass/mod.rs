//! Type class traits for functional programming abstractions.
//!
//! This module provides the type classes (traits) every container in this
//! crate implements:
//!
//! - [`Functor`]: Mapping over container values
//! - [`FunctorMut`]: Mapping with mutable functions for multi-element containers
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! `Vec` models the list monad through [`FunctorMut`], [`ApplicativeVec`] and
//! [`MonadVec`], because its functions must run once per element.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate HKT
//! behavior, which is what lets `Functor` and `Monad` talk about
//! "the same container holding a different type".
//!
//! ## Shared Values
//!
//! A settled [`Future`](crate::future::Future) hands the same value to every
//! continuation registered on it, so the type classes require
//! `Clone + 'static` where a continuation receives a value of a *second*
//! container (`map2`, `apply`). `Option` and `Vec` simply ignore the extra
//! bound.
//!
//! # Examples
//!
//! ```rust
//! use promissory::typeclass::{Applicative, Functor, Monad, Monoid, Semigroup, Sum};
//!
//! let value: Option<i32> = <Option<()>>::pure(20);
//! let result = value.fmap(|n| n + 1).flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(42));
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! assert_eq!(String::from("ab").combine(String::from("cd")), "abcd");
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::{Applicative, ApplicativeVec};
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monad::{Monad, MonadVec};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
