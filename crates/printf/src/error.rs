use displaydoc::Display;

/// A specialized result type for the formatter.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while formatting into a bounded buffer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum Error {
    /// The output buffer or the format string is absent.
    NullArgument,
    /// The output does not fit into the buffer and was truncated after {written} bytes.
    BufferFull { written: usize },
    /// The arguments do not match the format directives, {written} bytes were produced.
    ArgumentMismatch { written: usize },
}

impl Error {
    /// Returns the number of bytes produced before the failure.
    ///
    /// These bytes are kept in the buffer and followed by the NUL terminator.
    pub fn written(self) -> usize {
        match self {
            Error::NullArgument => 0,
            Error::BufferFull { written } | Error::ArgumentMismatch { written } => written,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
