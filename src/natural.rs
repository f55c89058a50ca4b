//! Natural transformations between `Option`, `Vec` and `Future`.
//!
//! Each function changes the container while leaving the value alone. A
//! conversion out of a `Future` inspects it once: a pending Future converts
//! like a rejected one.
//!
//! # Examples
//!
//! ```rust
//! use promissory::future::{Future, FutureError};
//! use promissory::natural::{future_to_option, option_to_future, vec_to_option};
//!
//! let future: Future<i32> = option_to_future(vec_to_option(vec![1, 2, 3]));
//! assert_eq!(future_to_option(&future), Some(1));
//!
//! let missing: Future<i32> = option_to_future(None);
//! assert_eq!(missing.error(), Some(FutureError::MissingValue));
//! ```

use crate::future::{Future, FutureError};

/// `Some(value)` becomes a fulfilled Future; `None` is rejected with
/// [`FutureError::MissingValue`].
pub fn option_to_future<A>(option: Option<A>) -> Future<A> {
    match option {
        Some(value) => Future::resolve(value),
        None => Future::reject(FutureError::MissingValue),
    }
}

/// A fulfilled Future becomes `Some(value)`; pending or rejected becomes `None`.
pub fn future_to_option<A: Clone, E>(future: &Future<A, E>) -> Option<A> {
    future.value()
}

/// `Some(value)` becomes `vec![value]`; `None` becomes an empty Vec.
pub fn option_to_vec<A>(option: Option<A>) -> Vec<A> {
    option.into_iter().collect()
}

/// Takes the head of the Vec.
pub fn vec_to_option<A>(list: Vec<A>) -> Option<A> {
    list.into_iter().next()
}

/// A fulfilled Future becomes a singleton; pending or rejected becomes empty.
pub fn future_to_vec<A: Clone, E>(future: &Future<A, E>) -> Vec<A> {
    option_to_vec(future_to_option(future))
}

/// The head of the Vec becomes a fulfilled Future; an empty Vec is rejected
/// with [`FutureError::EmptyList`].
///
/// # Examples
///
/// ```rust
/// use promissory::future::FutureError;
/// use promissory::natural::vec_to_future;
///
/// assert_eq!(vec_to_future(vec!["a", "b"]).value(), Some("a"));
/// assert_eq!(vec_to_future(Vec::<&str>::new()).error(), Some(FutureError::EmptyList));
/// ```
pub fn vec_to_future<A>(list: Vec<A>) -> Future<A> {
    match vec_to_option(list) {
        Some(head) => Future::resolve(head),
        None => Future::reject(FutureError::EmptyList),
    }
}
