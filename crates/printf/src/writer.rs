use core::fmt;

use crate::{Error, Result};

/// A byte writer over a borrowed buffer which never writes past its end.
///
/// The last byte of the buffer is reserved for the NUL terminator, so a
/// writer over `N` bytes accepts at most `N - 1` bytes of content.
#[derive(Debug)]
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> BoundedWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the number of content bytes this writer can hold.
    pub fn capacity(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    /// Returns the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    pub fn remaining(&self) -> usize {
        self.capacity() - self.pos
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Appends a single byte.
    ///
    /// Fails with [`Error::BufferFull`] once the capacity is exhausted, the
    /// bytes already written stay untouched.
    pub fn push(&mut self, byte: u8) -> Result<()> {
        if self.pos >= self.capacity() {
            return Err(Error::BufferFull { written: self.pos });
        }

        self.buf[self.pos] = byte;
        self.pos += 1;
        Ok(())
    }

    /// Appends bytes one by one, stopping at the first byte that does not fit.
    pub fn extend<I>(&mut self, bytes: I) -> Result<()>
    where
        I: IntoIterator<Item = u8>,
    {
        bytes.into_iter().try_for_each(|byte| self.push(byte))
    }

    /// Writes the NUL terminator and returns the number of produced bytes.
    ///
    /// An empty buffer has no room even for the terminator and stays untouched.
    pub fn finish(self) -> usize {
        if let Some(terminator) = self.buf.get_mut(self.pos) {
            *terminator = 0;
        }
        self.pos
    }
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.extend(s.bytes()).map_err(|_| fmt::Error)
    }
}
