//! A single-assignment, callback-driven Future.
//!
//! A [`Future`] starts pending and is settled exactly once, either fulfilled
//! with a value or rejected with an error. Settlement is always triggered
//! from outside, through the [`Resolver`] and [`Rejecter`] capabilities
//! handed out at construction. Continuations registered before settlement
//! are queued and run in registration order. Continuations registered
//! afterwards run immediately.
//!
//! # Construction
//!
//! - [`Future::new`]: runs an executor with both capabilities
//! - [`Future::pending`]: returns the capabilities to the caller
//! - [`Future::resolve`] / [`Future::reject`]: already settled Futures
//!
//! # Composition
//!
//! | Operator | Fulfilled input | Rejected input |
//! |----------|-----------------|----------------|
//! | `then` / `fmap` | fulfilled with `f(value)` | stays pending |
//! | `then_or_else` | fulfilled with `f(value)` | fulfilled with `g(error)` |
//! | `catch` | stays pending | fulfilled with `g(error)` |
//! | `finally` | runs handler, forwards value | runs handler, forwards error |
//! | `join` / `bind` | follows the inner Future | rejected |
//!
//! # Examples
//!
//! ```rust
//! use promissory::future::{Future, FutureError};
//!
//! let (future, _resolver, rejecter) = Future::<i32>::pending();
//! let recovered = future.catch(|_| "recovered");
//!
//! rejecter.reject(FutureError::failed("boom"));
//! assert_eq!(recovered.value(), Some("recovered"));
//! ```
//!
//! With the `async` feature, a Future can be awaited; see `Settled`.

mod combinators;
mod error;
mod handle;
mod instances;
#[cfg(feature = "async")]
mod settled;
mod state;

pub use error::{FutureError, UnrecognizedError};
pub use handle::{Future, Rejecter, Resolver};
#[cfg(feature = "async")]
pub use settled::Settled;
