//! Panic hook that prints thrown errors.
//!
//! A throw that no recovery scope receives, or any throw made with catching
//! disabled, goes through the panic hook with a non-string payload. The
//! default hook only prints `Box<dyn Any>` for those.

use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::panic;
use std::thread;

use tracing::error;

use crate::throw::Thrown;
use crate::Error;

/// Text of the thrown error carried by `payload`, tagged or bare.
pub(crate) fn thrown_message(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(thrown) = payload.downcast_ref::<Thrown>() {
        return Some(thrown.error().to_string());
    }
    payload.downcast_ref::<Error>().map(|e| e.to_string())
}

/// Install a panic hook that prints the error text of an unrecovered throw.
///
/// Panics that were not thrown are handed to the hook that was installed
/// before this call, so chaining after a custom hook keeps its behavior for
/// everything else. Intended for binaries, usually next to
/// [`set_catching`](crate::set_catching) while debugging.
///
/// ```
/// thrower::install_panic_hook();
///
/// let payload = std::thread::spawn(|| -> () { thrower::throw_msg("config missing") })
///     .join()
///     .unwrap_err();
/// // stderr: thread '<unnamed>' panicked at <file>:<line>:<column>:
/// //         thrown error: config missing
/// assert!(thrower::is_thrown(&*payload));
/// ```
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let Some(message) = thrown_message(info.payload()) else {
            return previous(info);
        };

        let location = info.location().map(|l| l.to_string()).unwrap_or_default();
        let current = thread::current();
        let name = current.name().unwrap_or("<unnamed>");
        error!(%location, %message, "unrecovered thrown error");

        eprintln!("thread '{}' panicked at {}:\nthrown error: {}", name, location, message);
        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            eprintln!("stack backtrace:\n{}", backtrace);
        } else {
            eprintln!("note: run with `RUST_BACKTRACE=1` environment variable to display a backtrace");
        }
    }));
}
