//! Recovery side: intercept our own throws, re-raise everything else.
//!
//! A recovery scope is a `catch_unwind` around the frame's body. Whatever
//! payload arrives is either a [`Thrown`] marker, which stops here and becomes
//! an ordinary returned error, or something else, which is resumed with the
//! very same box so the next frame up sees exactly what was raised.
//!
//! Each thread counts the recovery scopes on its stack. A throw made with no
//! scope to receive it goes through the panic hook like any other uncaught
//! panic.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use tracing::trace;

use crate::mode;
use crate::throw::Thrown;
use crate::Error;

type Payload = Box<dyn Any + Send + 'static>;

thread_local! {
    static SCOPES: Cell<usize> = Cell::new(0);
}

/// Marks one recovery scope as active on this thread until dropped.
struct ScopeGuard;

impl ScopeGuard {
    fn enter() -> Self {
        SCOPES.with(|n| n.set(n.get() + 1));
        ScopeGuard
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        SCOPES.with(|n| n.set(n.get() - 1));
    }
}

/// Whether a recovery scope is on this thread's stack.
pub(crate) fn in_scope() -> bool {
    SCOPES.with(|n| n.get() > 0)
}

/// `catch_unwind` with this thread's scope count raised for its duration.
fn catch<T, F>(f: F) -> Result<T, Payload>
where
    F: FnOnce() -> T,
{
    let _scope = ScopeGuard::enter();
    panic::catch_unwind(AssertUnwindSafe(f))
}

/// Turn an intercepted payload into the thrown error, or keep unwinding.
fn intercept(payload: Payload) -> Error {
    if !mode::catching().is_catching() {
        trace!("catching disabled, letting panic pass");
        panic::resume_unwind(payload)
    }

    match payload.downcast::<Thrown>() {
        Ok(thrown) => {
            trace!(location = %thrown.location(), "recovered thrown error");
            thrown.into_error()
        }
        Err(foreign) => {
            trace!("not a thrown error, resuming unwind");
            panic::resume_unwind(foreign)
        }
    }
}

/// Run `f`, converting a [`throw`](crate::throw) inside it into `Err`.
///
/// Only throws are intercepted. Any other panic, including a throw made while
/// catching was disabled, continues unwinding past this call unchanged. A
/// throw is consumed by the innermost `recover` it reaches; callers further up
/// see a normal return.
///
/// ```
/// use thrower::{recover, throw_msg};
///
/// fn parse_port(s: &str) -> u16 {
///     s.parse().unwrap_or_else(|_| throw_msg(format!("bad port {s:?}")))
/// }
///
/// assert_eq!(recover(|| parse_port("8080")).unwrap(), 8080);
/// assert_eq!(recover(|| parse_port("http")).unwrap_err().to_string(), "bad port \"http\"");
/// ```
pub fn recover<T, F>(f: F) -> crate::Result<T>
where
    F: FnOnce() -> T,
{
    catch(f).map_err(intercept)
}

/// Run `f`, writing an intercepted thrown error into `out`.
///
/// Returns `Some` with `f`'s value when it returns normally, leaving `out`
/// untouched. Returns `None` when a throw was intercepted; the error is
/// written to `out`, or discarded if `out` is `None`. Foreign panics pass
/// through and `out` is not touched.
///
/// ```
/// use thrower::{recover_into, throw_msg, Error};
///
/// let mut err: Option<Error> = None;
/// let value: Option<u32> = recover_into(Some(&mut err), || throw_msg("nope"));
/// assert!(value.is_none());
/// assert_eq!(err.unwrap().to_string(), "nope");
///
/// // No slot: the error is silenced.
/// assert_eq!(recover_into(None, || -> u32 { throw_msg("ignored") }), None);
/// ```
pub fn recover_into<T, F>(out: Option<&mut Option<Error>>, f: F) -> Option<T>
where
    F: FnOnce() -> T,
{
    match catch(f) {
        Ok(value) => Some(value),
        Err(payload) => {
            let error = intercept(payload);
            if let Some(slot) = out {
                *slot = Some(error);
            }
            None
        }
    }
}

/// Run `f`, silencing a thrown error and returning `T::default()` instead.
pub fn recover_or_default<T, F>(f: F) -> T
where
    T: Default,
    F: FnOnce() -> T,
{
    recover_into(None, f).unwrap_or_default()
}

/// Whether an unwind payload carries an error raised by [`throw`](crate::throw).
///
/// For code that catches panics by other means, such as a thread join or a
/// task runtime, and wants to tell an escaped throw from a foreign panic.
/// Pass the payload itself (`&*boxed`), not a reference to its box.
///
/// ```
/// use thrower::{is_thrown, throw_msg};
///
/// let payload = std::thread::spawn(|| -> () { throw_msg("escaped") }).join().unwrap_err();
/// assert!(is_thrown(&*payload));
/// ```
pub fn is_thrown(payload: &(dyn Any + Send)) -> bool {
    payload.is::<Thrown>()
}
