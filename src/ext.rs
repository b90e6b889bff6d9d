//! Extension traits for throwing from `Result` and `Option`.

use crate::throw::{throw, throw_msg};
use crate::Error;

/// Extension trait for throwing the error of a `Result`.
pub trait ThrowExt<T, E> {
    /// Unwrap the value or throw the error.
    fn or_throw(self) -> T;

    /// Unwrap the value or throw the error after mapping it.
    fn or_throw_with<E2, F>(self, f: F) -> T
    where
        E2: Into<Error>,
        F: FnOnce(E) -> E2;
}

impl<T, E: Into<Error>> ThrowExt<T, E> for Result<T, E> {
    #[track_caller]
    fn or_throw(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => throw(e),
        }
    }

    #[track_caller]
    fn or_throw_with<E2, F>(self, f: F) -> T
    where
        E2: Into<Error>,
        F: FnOnce(E) -> E2,
    {
        match self {
            Ok(v) => v,
            Err(e) => throw(f(e)),
        }
    }
}

/// Extension trait for throwing when an `Option` is empty.
pub trait OptionThrowExt<T> {
    /// Unwrap the value or throw an error carrying `msg`.
    fn or_throw_msg(self, msg: impl Into<String>) -> T;
}

impl<T> OptionThrowExt<T> for Option<T> {
    #[track_caller]
    fn or_throw_msg(self, msg: impl Into<String>) -> T {
        match self {
            Some(v) => v,
            None => throw_msg(msg),
        }
    }
}
