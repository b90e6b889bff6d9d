//! Throw side: tag an error and start unwinding.

use core::fmt;
use core::panic::Location;
use std::panic;

use tracing::trace;

use crate::mode::{self, CatchState};
use crate::recover;
use crate::Error;

/// Unwind payload produced by [`throw`].
///
/// Recovery scopes recognize a throw by this type alone, never by the error
/// inside it. Constructed only in [`throw`], unwrapped only in `recover`.
pub(crate) struct Thrown {
    error: Error,
    location: &'static Location<'static>,
}

impl Thrown {
    #[inline]
    pub(crate) fn location(&self) -> &'static Location<'static> {
        self.location
    }

    #[inline]
    pub(crate) fn error(&self) -> &Error {
        &self.error
    }

    #[inline]
    pub(crate) fn into_error(self) -> Error {
        self.error
    }
}

impl fmt::Debug for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thrown")
            .field("error", &self.error)
            .field("location", &self.location)
            .finish()
    }
}

/// Throw `err`, to be caught by the nearest enclosing recovery scope
/// ([`recover`](crate::recover), [`recover_into`](crate::recover_into), or a
/// [`#[recover_error]`](crate::recover_error) function).
///
/// Never returns. With catching enabled, the error is tagged. If a recovery
/// scope is on this thread's stack, unwinding starts without running the
/// panic hook. If none is, nothing can recover the throw, so it is raised
/// with [`std::panic::panic_any`]: the hook reports this call site and the
/// thread unwinds to its boundary like any other uncaught panic.
///
/// With catching disabled (see [`set_catching`](crate::set_catching)), the
/// bare error is raised with `panic_any` and no recovery scope intercepts it.
///
/// The default hook cannot print a non-string payload; install
/// [`install_panic_hook`](crate::install_panic_hook) to have it show the
/// error text.
///
/// ```
/// use thrower::{recover, throw, Error};
///
/// let result: thrower::Result<()> = recover(|| throw(Error::msg("disk full")));
/// assert_eq!(result.unwrap_err().to_string(), "disk full");
/// ```
#[track_caller]
pub fn throw(err: impl Into<Error>) -> ! {
    let error = err.into();
    let location = Location::caller();

    match mode::catching() {
        CatchState::DontCatch => {
            trace!(%location, %error, "catching disabled, raising thrown error as a panic");
            panic::panic_any(error)
        }
        CatchState::Catch if recover::in_scope() => {
            trace!(%location, %error, "throwing");
            panic::resume_unwind(Box::new(Thrown { error, location }))
        }
        CatchState::Catch => {
            trace!(%location, %error, "no recovery scope on this thread, raising as a panic");
            panic::panic_any(Thrown { error, location })
        }
    }
}

/// Throw `err` if it is `Some`, otherwise do nothing.
///
/// ```
/// use thrower::{recover, throw_if_error, Error};
///
/// let none: Option<Error> = None;
/// assert_eq!(recover(|| { throw_if_error(none); 7 }).unwrap(), 7);
/// ```
#[track_caller]
#[inline]
pub fn throw_if_error<E: Into<Error>>(err: Option<E>) {
    if let Some(err) = err {
        throw(err)
    }
}

/// Throw an error carrying only `message`.
#[track_caller]
pub fn throw_msg(message: impl Into<String>) -> ! {
    throw(Error::msg(message))
}
