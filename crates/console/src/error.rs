use core::fmt::Debug;

use displaydoc::Display;

/// A specialized result type for the console.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when writing to the console.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum Error {
    /// The scratch buffer is used by another caller.
    Busy,
    /// Unable to write a byte to the transport.
    Transport,
}

impl Error {
    /// Creates a new transport error.
    pub fn transport<E>(_: E) -> Self
    where
        E: Debug,
    {
        Self::Transport
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// The process-wide console transport has already been set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub struct SetStdoutError(());

impl SetStdoutError {
    pub(crate) fn new() -> Self {
        Self(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SetStdoutError {}
