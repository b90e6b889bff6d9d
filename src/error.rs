//! Type-erased error value carried by a throw.

use core::fmt;
use std::error::Error as StdError;

/// Error value carried through [`throw`](crate::throw) and handed back by the
/// recovery functions.
///
/// This is a newtype around `Box<dyn Error + Send + Sync>`. It does NOT
/// implement `std::error::Error` itself, which keeps the blanket
/// `From<E: Error>` impl below from overlapping `From<T> for T`.
///
/// Moving an `Error` through a throw and a recovery never re-boxes the inner
/// value: the error you get back is the allocation you threw.
#[derive(Debug)]
pub struct Error(Box<dyn StdError + Send + Sync + 'static>);

impl Error {
    /// Create from any error type.
    #[inline]
    pub fn new<E: StdError + Send + Sync + 'static>(e: E) -> Self {
        Self(Box::new(e))
    }

    /// Create an error that only carries a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self(Box::new(MessageError(message.into())))
    }

    /// Create from an `anyhow::Error`, keeping its cause chain reachable
    /// through [`as_dyn_error`](Self::as_dyn_error).
    #[cfg(feature = "anyhow")]
    pub fn from_anyhow(e: anyhow::Error) -> Self {
        Self(e.into())
    }

    /// Borrow the inner error, for walking its `source()` chain or handing it
    /// to APIs that take `&dyn Error`.
    #[inline]
    pub fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self.0.as_ref()
    }

    /// Returns `true` if the inner error is of type `T`.
    #[inline]
    pub fn is<T: StdError + 'static>(&self) -> bool {
        self.0.is::<T>()
    }

    /// Try to downcast to a specific error type.
    #[inline]
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Try to downcast and consume the error.
    #[inline]
    pub fn downcast<T: StdError + 'static>(self) -> core::result::Result<T, Self> {
        match self.0.downcast::<T>() {
            Ok(e) => Ok(*e),
            Err(e) => Err(Self(e)),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// Enables `throw(io_err)` and `?` into `thrower::Result`.
impl<E: StdError + Send + Sync + 'static> From<E> for Error {
    fn from(e: E) -> Self {
        Error::new(e)
    }
}

/// Message-only error behind [`Error::msg`].
#[derive(Debug)]
struct MessageError(String);

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for MessageError {}
