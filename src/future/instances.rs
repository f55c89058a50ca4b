//! Type class instances for `Future`.
//!
//! `fmap` is [`Future::then`], `pure` is [`Future::resolve`] and `flat_map`
//! is [`Future::bind`]. `apply` waits on the value Future first, then on the
//! Future holding the function.

use std::rc::Rc;

use super::handle::Future;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

impl<A, E> TypeConstructor for Future<A, E> {
    type Inner = A;
    type WithType<B> = Future<B, E>;
}

impl<A: Clone + 'static, E: 'static> Functor for Future<A, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Future<B, E>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.then(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Future<B, E>
    where
        F: FnOnce(&A) -> B + 'static,
        B: 'static,
    {
        self.then_ref(function)
    }
}

impl<A: Clone + 'static, E: 'static> Applicative for Future<A, E> {
    #[inline]
    fn pure<B>(value: B) -> Future<B, E>
    where
        B: 'static,
    {
        Future::resolve(value)
    }

    fn map2<B, C, F>(self, other: Future<B, E>, function: F) -> Future<C, E>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: Clone + 'static,
        C: 'static,
    {
        self.bind(move |first| other.then(move |second| function(first, second)))
    }

    fn apply<B, Output>(self, other: Future<B, E>) -> Future<Output, E>
    where
        A: FnOnce(B) -> Output,
        B: Clone + 'static,
        Output: 'static,
    {
        let (derived, resolver, _) = Future::pending();
        other.subscribe(
            Some(Box::new(move |value: &Rc<B>| {
                let value = B::clone(value);
                self.subscribe(
                    Some(Box::new(move |function: &Rc<A>| {
                        resolver.resolve(A::clone(function)(value));
                    })),
                    None,
                );
            })),
            None,
        );
        derived
    }
}

impl<A: Clone + 'static, E: 'static> Monad for Future<A, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Future<B, E>
    where
        F: FnOnce(A) -> Future<B, E> + 'static,
        B: 'static,
    {
        self.bind(function)
    }
}
