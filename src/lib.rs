//! thrower - throw errors through unwinding, recover only your own
//!
//! # Overview
//!
//! `thrower` lets a call chain throw an error value up the stack without
//! checking for it at every frame, then turns it back into an ordinary
//! `Result` at a boundary of your choosing. It rides on Rust's panic
//! unwinding, but it only ever recovers what it threw: an index out of
//! bounds, a `panic!`, or any other foreign unwind passes through every
//! recovery scope unchanged.
//!
//! # Quick Start
//!
//! ```
//! use thrower::{recover_error, throw_if_error, ThrowExt};
//!
//! fn read_port(raw: &str) -> u16 {
//!     raw.trim().parse::<u16>().or_throw()
//! }
//!
//! #[recover_error]
//! fn load(raw: &str) -> thrower::Result<u16> {
//!     let port = read_port(raw);
//!     throw_if_error((port == 0).then(|| thrower::Error::msg("port 0 is reserved")));
//!     Ok(port)
//! }
//!
//! assert_eq!(load("8080").unwrap(), 8080);
//! assert!(load("eighty").is_err());
//! assert_eq!(load("0").unwrap_err().to_string(), "port 0 is reserved");
//! ```
//!
//! # Operations
//!
//! ## Throwing
//!
//! | Item | Description |
//! |------|-------------|
//! | [`throw`] | Throw any `impl Into<Error>`; never returns |
//! | [`throw_if_error`] | Throw the error if `Some` |
//! | [`throw_msg`] / [`throw!`] | Throw a message |
//! | [`ensure!`] | Throw unless a condition holds |
//! | [`ThrowExt::or_throw`] | Unwrap a `Result` or throw its error |
//!
//! ## Recovering
//!
//! | Item | Description |
//! |------|-------------|
//! | [`recover`] | Run a closure, a throw becomes `Err` |
//! | [`recover_into`] | Write the thrown error into a slot, or discard it |
//! | [`recover_or_default`] | Silence a throw, return `T::default()` |
//! | [`#[recover_error]`](recover_error) | Make a whole function a recovery scope |
//! | [`is_thrown`] | Inspect a payload caught some other way |
//!
//! ## Debugging
//!
//! | Item | Description |
//! |------|-------------|
//! | [`set_catching`] | Turn catching off; throws become plain panics |
//! | [`CatchingGuard`] | Same, restored on drop |
//! | `THROWER_CATCHING=0` | Start the process with catching off |
//! | [`install_panic_hook`] | Print the error text of unrecovered throws |
//!
//! With catching off, a throw is an ordinary panic carrying the bare
//! [`Error`]: the panic hook prints where it was thrown, and no recovery
//! scope intercepts it. A throw with no recovery scope on its thread also
//! goes through the panic hook. The default hook prints only the location for
//! these payloads; [`install_panic_hook`] adds the error text.
//!
//! # Threads
//!
//! A throw only unwinds its own thread. A throw that escapes a thread or an
//! async task surfaces as that thread's panic, where [`is_thrown`] recognizes
//! it.
//!
//! # Panic strategy
//!
//! Recovery needs `panic = "unwind"`. Under `panic = "abort"` every throw
//! aborts the process.

// ============================================================
// Modules
// ============================================================

mod error;
mod ext;
mod hook;
mod macros;
mod mode;
mod recover;
mod throw;

// ============================================================
// Re-exports
// ============================================================

pub use error::Error;
pub use ext::{OptionThrowExt, ThrowExt};
pub use hook::install_panic_hook;
pub use mode::{catching, set_catching, CatchState, CatchingGuard, CATCHING_ENV};
pub use recover::{is_thrown, recover, recover_into, recover_or_default};
pub use throw::{throw, throw_if_error, throw_msg};

/// Make a function a recovery scope.
///
/// - `#[recover_error]` on `fn(..) -> Result<T, E>` with `E: From<thrower::Error>`:
///   a throw anywhere in the body returns `Err(E::from(err))`.
/// - `#[recover_error(discard)]` on `fn(..) -> T` with `T: Default`: a throw is
///   silenced and the function returns `T::default()`.
///
/// Panics that were not thrown pass through either form unchanged.
pub use thrower_macros::recover_error;

// ============================================================
// Type aliases
// ============================================================

/// Result type alias.
///
/// - `Result<T>` = `core::result::Result<T, thrower::Error>`
/// - `Result<T, MyError>` for functions whose error converts from `thrower::Error`
pub type Result<T, E = Error> = core::result::Result<T, E>;
