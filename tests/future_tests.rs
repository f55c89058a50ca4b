#![cfg(feature = "future")]
//! Behavioural tests for `Future`: settlement, ordering, failure handling
//! and resource release.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use promissory::future::{Future, FutureError, Rejecter, Resolver, UnrecognizedError};
use proptest::prelude::*;
use rstest::rstest;

type Events = Rc<RefCell<Vec<String>>>;

fn events() -> Events {
    Rc::new(RefCell::new(Vec::new()))
}

fn record(events: &Events, label: &'static str) -> impl FnOnce(&i32) + 'static {
    let events = Rc::clone(events);
    move |value| events.borrow_mut().push(format!("{label}:{value}"))
}

// =============================================================================
// Settle-once
// =============================================================================

#[rstest]
fn only_the_first_resolution_counts() {
    let (future, resolver, rejecter) = Future::<i32>::pending();
    let log = events();
    future.then_ref(record(&log, "seen"));

    resolver.resolve(1);
    resolver.resolve(2);
    rejecter.reject(FutureError::failed("late"));

    assert_eq!(future.outcome(), Some(Ok(1)));
    assert_eq!(*log.borrow(), vec!["seen:1"]);
}

#[rstest]
fn only_the_first_rejection_counts() {
    let (future, resolver, rejecter) = Future::<i32>::pending();
    let caught = Rc::new(Cell::new(0));
    let counter = Rc::clone(&caught);
    future.catch(move |_| counter.set(counter.get() + 1));

    rejecter.reject(FutureError::failed("first"));
    rejecter.reject(FutureError::failed("second"));
    resolver.resolve(3);

    assert_eq!(future.error(), Some(FutureError::failed("first")));
    assert_eq!(caught.get(), 1);
}

#[rstest]
fn executor_capabilities_settle_once() {
    let future: Future<i32> = Future::new(|resolver, rejecter| {
        resolver.resolve(1);
        rejecter.reject(FutureError::failed("ignored"));
        resolver.resolve(2);
        Ok(())
    });
    assert_eq!(future.outcome(), Some(Ok(1)));
}

fn settle(
    resolver: &Resolver<i32>,
    rejecter: &Rejecter<i32>,
    step: &Result<i32, String>,
) {
    match step {
        Ok(value) => resolver.resolve(*value),
        Err(message) => rejecter.reject(FutureError::failed(message.clone())),
    }
}

proptest! {
    #[test]
    fn prop_first_settlement_wins(
        script in proptest::collection::vec(
            prop_oneof![
                any::<i32>().prop_map(Ok::<i32, String>),
                "[a-z]{1,8}".prop_map(Err::<i32, String>),
            ],
            1..8,
        ),
    ) {
        let (future, resolver, rejecter) = Future::<i32>::pending();
        let fulfilled = Rc::new(Cell::new(0));
        let rejected = Rc::new(Cell::new(0));
        let fulfilled_counter = Rc::clone(&fulfilled);
        let rejected_counter = Rc::clone(&rejected);
        future.then_or_else(
            move |_| fulfilled_counter.set(fulfilled_counter.get() + 1),
            move |_| rejected_counter.set(rejected_counter.get() + 1),
        );

        for step in &script {
            settle(&resolver, &rejecter, step);
        }

        let expected = script[0].clone().map_err(FutureError::failed);
        prop_assert_eq!(future.outcome(), Some(expected.clone()));
        prop_assert_eq!(fulfilled.get() + rejected.get(), 1);
        prop_assert_eq!(fulfilled.get() == 1, expected.is_ok());
    }
}

// =============================================================================
// Callback ordering
// =============================================================================

#[rstest]
fn handlers_run_in_registration_order() {
    let (future, resolver, _) = Future::<i32>::pending();
    let log = events();
    for label in ["h1", "h2", "h3"] {
        future.then_ref(record(&log, label));
    }

    resolver.resolve(7);

    assert_eq!(*log.borrow(), vec!["h1:7", "h2:7", "h3:7"]);
}

#[rstest]
fn rejection_handlers_run_in_registration_order() {
    let (future, _, rejecter) = Future::<i32>::pending();
    let log = events();
    for label in ["first", "second"] {
        let log = Rc::clone(&log);
        future.catch(move |error| log.borrow_mut().push(format!("{label}:{error}")));
    }

    rejecter.reject(FutureError::failed("x"));

    assert_eq!(*log.borrow(), vec!["first:x", "second:x"]);
}

#[rstest]
fn settlement_runs_callbacks_synchronously() {
    let (future, resolver, _) = Future::<i32>::pending();
    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);
    future.then_ref(move |_| flag.set(true));

    assert!(!ran.get());
    resolver.resolve(0);
    assert!(ran.get());
}

#[rstest]
fn handler_resolving_the_same_future_is_a_no_op() {
    let (future, resolver, _) = Future::<i32>::pending();
    let reentrant = resolver.clone();
    let log = events();
    future.then_ref(move |value| reentrant.resolve(value + 100));
    future.then_ref(record(&log, "after"));

    resolver.resolve(1);

    assert_eq!(future.value(), Some(1));
    assert_eq!(*log.borrow(), vec!["after:1"]);
}

#[rstest]
fn handler_registered_during_settlement_runs_after_queued_handlers() {
    let (future, resolver, _) = Future::<i32>::pending();
    let log = events();
    let same_future = future.clone();
    let first_log = Rc::clone(&log);
    future.then_ref(move |value| {
        first_log.borrow_mut().push(format!("h1:{value}"));
        same_future.then_ref(record(&first_log, "h3"));
    });
    future.then_ref(record(&log, "h2"));

    resolver.resolve(4);

    assert_eq!(*log.borrow(), vec!["h1:4", "h2:4", "h3:4"]);

    future.then_ref(record(&log, "h4"));
    assert_eq!(log.borrow().last().map(String::as_str), Some("h4:4"));
}

#[rstest]
fn rejection_handler_registered_during_settlement_keeps_order() {
    let (future, _, rejecter) = Future::<i32>::pending();
    let log = events();
    let same_future = future.clone();
    let first_log = Rc::clone(&log);
    future.catch(move |_| {
        first_log.borrow_mut().push("c1".to_string());
        let late_log = Rc::clone(&first_log);
        same_future.catch(move |_| late_log.borrow_mut().push("c3".to_string()));
    });
    let second_log = Rc::clone(&log);
    future.catch(move |_| second_log.borrow_mut().push("c2".to_string()));

    rejecter.reject(FutureError::EmptyList);

    assert_eq!(*log.borrow(), vec!["c1", "c2", "c3"]);
}

// =============================================================================
// Immediate vs deferred equivalence
// =============================================================================

#[rstest]
#[case::fulfilled(Ok(5))]
#[case::rejected(Err(FutureError::failed("bad")))]
fn immediate_and_deferred_registration_agree(#[case] outcome: Result<i32, FutureError>) {
    let observe = |future: &Future<i32>| {
        future.then_or_else(|value| format!("value {value}"), |error| format!("error {error}"))
    };

    let (deferred, resolver, rejecter) = Future::<i32>::pending();
    let before = observe(&deferred);
    match outcome.clone() {
        Ok(value) => resolver.resolve(value),
        Err(error) => rejecter.reject(error),
    }
    let after = observe(&deferred);

    let immediate = match outcome {
        Ok(value) => Future::resolve(value),
        Err(error) => Future::reject(error),
    };
    let settled_first = observe(&immediate);

    assert_eq!(before.value(), after.value());
    assert_eq!(before.value(), settled_first.value());
    assert!(before.is_fulfilled());
}

// =============================================================================
// Executor failure normalization
// =============================================================================

#[rstest]
fn executor_error_rejects_with_the_same_error() {
    let future: Future<i32> = Future::new(|_, _| Err(FutureError::failed("thrown")));
    assert_eq!(future.error(), Some(FutureError::failed("thrown")));
}

#[rstest]
fn executor_panic_rejects_with_unrecognized_error() {
    let future: Future<i32> = Future::new(|_, _| panic!("not an error value"));
    let Some(FutureError::Unrecognized(error)) = future.error() else {
        panic!("expected an unrecognized error, got {future:?}");
    };
    assert_eq!(error.to_string(), "Unrecognized error");
    assert_eq!(error.panic_message(), Some("not an error value"));
}

#[rstest]
fn executor_panic_with_opaque_payload() {
    let future: Future<i32> = Future::new(|_, _| std::panic::panic_any(12_i64));
    assert_eq!(
        future.error(),
        Some(FutureError::Unrecognized(UnrecognizedError::new(None)))
    );
}

#[rstest]
fn executor_panic_is_recoverable_with_catch() {
    let future: Future<i32> = Future::new(|_, _| panic!("boom"));
    let recovered = future.catch(|error| error.to_string());
    assert_eq!(recovered.value(), Some("Unrecognized error".to_string()));
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn executor_resolution_is_visible_synchronously() {
    let future: Future<i32> = Future::new(|resolver, _| {
        resolver.resolve(5);
        Ok(())
    });
    let doubled = future.then(|x| x * 2);
    assert_eq!(doubled.value(), Some(10));
}

#[rstest]
fn catch_recovers_from_rejection() {
    let (future, _, rejecter) = Future::<i32>::pending();
    let recovered = future.catch(|_| "recovered");
    rejecter.reject(FutureError::failed("boom"));
    assert_eq!(recovered.value(), Some("recovered"));
}

#[rstest]
fn join_scenarios() {
    let nested: Future<Future<i32>> = Future::resolve(Future::resolve(7));
    assert_eq!(nested.join().value(), Some(7));

    let inner_rejected: Future<Future<i32>> =
        Future::resolve(Future::reject(FutureError::failed("E")));
    assert_eq!(inner_rejected.join().error(), Some(FutureError::failed("E")));

    let outer_rejected: Future<Future<i32>> = Future::reject(FutureError::failed("E"));
    assert_eq!(outer_rejected.join().error(), Some(FutureError::failed("E")));
}

#[rstest]
fn then_without_rejection_handler_stalls() {
    let (future, _, rejecter) = Future::<i32>::pending();
    let mapped = future.then(|x| x + 1);
    let bound = future.bind(|x| Future::resolve(x + 1));
    rejecter.reject(FutureError::failed("stop"));

    assert!(mapped.is_pending());
    assert!(bound.is_pending());
}

#[rstest]
fn terminal_catch_observes_an_upstream_failure() {
    let (future, _, rejecter) = Future::<i32>::pending();
    let handled = future
        .bind(|x| Future::resolve(x * 2))
        .then_or_else(Ok, |error| Err(error.to_string()));

    let upstream = future.catch(|error| error.to_string());
    rejecter.reject(FutureError::failed("upstream"));

    assert!(handled.is_pending());
    assert_eq!(upstream.value(), Some("upstream".to_string()));
}

// =============================================================================
// finally
// =============================================================================

#[rstest]
fn finally_runs_once_and_forwards_rejection() {
    let (future, _, rejecter) = Future::<i32>::pending();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let forwarded = future.finally(move || counter.set(counter.get() + 1));

    rejecter.reject(FutureError::MissingValue);

    assert_eq!(calls.get(), 1);
    assert_eq!(forwarded.error(), Some(FutureError::MissingValue));
}

#[rstest]
fn finally_handler_panic_is_swallowed() {
    let (future, resolver, _) = Future::<i32>::pending();
    let forwarded = future.finally(|| panic!("cleanup"));
    resolver.resolve(9);
    assert_eq!(forwarded.value(), Some(9));
}

// =============================================================================
// Resource release
// =============================================================================

#[rstest]
fn callbacks_are_released_after_fulfillment() {
    let (future, resolver, _) = Future::<i32>::pending();
    let captured = Rc::new(());

    let on_value = Rc::clone(&captured);
    let _mapped = future.then(move |x| {
        let _keep = &on_value;
        x
    });
    let on_error = Rc::clone(&captured);
    let _caught = future.catch(move |_| {
        let _keep = &on_error;
        0
    });
    assert_eq!(Rc::strong_count(&captured), 3);

    resolver.resolve(1);

    assert_eq!(Rc::strong_count(&captured), 1);
}

#[rstest]
fn callbacks_are_released_after_rejection() {
    let (future, _, rejecter) = Future::<i32>::pending();
    let captured = Rc::new(());
    let held = Rc::clone(&captured);
    let _mapped = future.then(move |x| {
        let _keep = &held;
        x
    });
    assert_eq!(Rc::strong_count(&captured), 2);

    rejecter.reject(FutureError::EmptyList);

    assert_eq!(Rc::strong_count(&captured), 1);
}

#[rstest]
fn dropping_every_handle_releases_pending_callbacks() {
    let captured = Rc::new(());
    {
        let (future, _resolver, _rejecter) = Future::<i32>::pending();
        let held = Rc::clone(&captured);
        let _mapped = future.then(move |x| {
            let _keep = &held;
            x
        });
        assert_eq!(Rc::strong_count(&captured), 2);
    }
    assert_eq!(Rc::strong_count(&captured), 1);
}

#[rstest]
fn derived_future_does_not_keep_its_source_alive() {
    let (future, resolver, _) = Future::<Rc<()>>::pending();
    let payload = Rc::new(());
    let derived = future.then(|_| ());
    resolver.resolve(Rc::clone(&payload));
    drop(future);
    drop(resolver);

    assert_eq!(derived.value(), Some(()));
    assert_eq!(Rc::strong_count(&payload), 1);
}
