//! Process-wide catching switch.
//!
//! One flag for the whole process, with no per-thread override, so that a
//! debugging session's intent is visible to every thread. It is an atomic, but
//! a throw and the recovery scope that receives it sample it independently: a
//! concurrent [`set_catching`] between the two is an accepted race.

use std::sync::atomic::{AtomicU8, Ordering};

use tracing::debug;

/// Environment variable consulted the first time the switch is read.
///
/// `0`, `false`, `off`, `no` and `dont_catch` (any case) start the process
/// with catching disabled. Any other value, or no value, means [`CatchState::Catch`].
pub const CATCHING_ENV: &str = "THROWER_CATCHING";

const UNSET: u8 = 0;
const CATCH: u8 = 1;
const DONT_CATCH: u8 = 2;

static STATE: AtomicU8 = AtomicU8::new(UNSET);

/// Whether thrown errors are tagged and recovered.
///
/// Passed to [`set_catching`]. The default is `Catch` and never needs to be
/// set explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CatchState {
    /// Throws are tagged and recovered by the nearest recovery scope.
    #[default]
    Catch,
    /// Throws become plain panics and no recovery scope intercepts anything.
    DontCatch,
}

impl CatchState {
    /// `true` for [`CatchState::Catch`].
    #[inline]
    pub fn is_catching(self) -> bool {
        matches!(self, CatchState::Catch)
    }

    #[inline]
    fn to_raw(self) -> u8 {
        match self {
            CatchState::Catch => CATCH,
            CatchState::DontCatch => DONT_CATCH,
        }
    }

    #[inline]
    fn from_raw(raw: u8) -> Self {
        if raw == DONT_CATCH {
            CatchState::DontCatch
        } else {
            CatchState::Catch
        }
    }

    /// Parse a `THROWER_CATCHING` value.
    fn from_env_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "0" | "false" | "off" | "no" | "dont_catch" | "dontcatch" => CatchState::DontCatch,
            _ => CatchState::Catch,
        }
    }
}

fn configured() -> CatchState {
    match std::env::var(CATCHING_ENV) {
        Ok(value) => CatchState::from_env_value(&value),
        Err(_) => CatchState::Catch,
    }
}

/// Current catching state.
pub fn catching() -> CatchState {
    let raw = STATE.load(Ordering::SeqCst);
    if raw != UNSET {
        return CatchState::from_raw(raw);
    }

    let state = configured();
    // An explicit set_catching that raced us wins over the environment.
    match STATE.compare_exchange(UNSET, state.to_raw(), Ordering::SeqCst, Ordering::SeqCst) {
        Ok(_) => {
            if !state.is_catching() {
                debug!(env = CATCHING_ENV, "thrown error catching disabled by environment");
            }
            state
        }
        Err(current) => CatchState::from_raw(current),
    }
}

/// Turn thrown error catching on or off, returning the previous state.
///
/// With catching off, [`throw`](crate::throw) raises the bare error as an
/// ordinary panic and every recovery scope lets it pass, so the panic hook
/// reports the throw site. The default hook shows the location but not the
/// error text; [`install_panic_hook`](crate::install_panic_hook) prints both.
/// This is for debugging only; production code should never call it.
///
/// ```
/// use thrower::{set_catching, CatchState};
///
/// let previous = set_catching(CatchState::DontCatch);
/// // ... reproduce the failure ...
/// assert_eq!(set_catching(previous), CatchState::DontCatch);
/// ```
pub fn set_catching(state: CatchState) -> CatchState {
    let previous = match STATE.swap(state.to_raw(), Ordering::SeqCst) {
        UNSET => configured(),
        raw => CatchState::from_raw(raw),
    };
    debug!(?previous, current = ?state, "thrown error catching changed");
    previous
}

/// Sets the catching state and restores the previous one when dropped.
#[must_use = "the previous catching state is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct CatchingGuard {
    previous: CatchState,
}

impl CatchingGuard {
    /// Set `state` until the guard goes out of scope.
    pub fn set(state: CatchState) -> Self {
        Self {
            previous: set_catching(state),
        }
    }

    /// The state that will be restored on drop.
    pub fn previous(&self) -> CatchState {
        self.previous
    }
}

impl Drop for CatchingGuard {
    fn drop(&mut self) {
        set_catching(self.previous);
    }
}
