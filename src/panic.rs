//! Panic payload inspection for code paths that catch panics.

use std::any::Any;

/// Extracts the message of a panic payload raised by `panic!`.
///
/// Returns `None` when the payload is neither `&str` nor `String`.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
}
