use displaydoc::Display;

use crate::Usart;

/// A specialized result type for the serial ports.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when claiming a serial port.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum Error {
    /// {0} is already claimed by another port.
    AlreadyAllocated(Usart),
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
