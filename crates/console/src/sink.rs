use core::{
    cell::RefCell,
    fmt::{self, Debug, Write as _},
};

use critical_section::Mutex;
use embedded_hal::serial;
use opencontrol_printf::{Arg, BoundedWriter};

use crate::{Error, Result, ScratchBuffer, FMT_BUF_LEN};

/// The blocking byte-output primitive.
///
/// An implementation returns only after the transport has accepted the byte.
/// There is no timeout, so a stalled transport stalls the caller.
pub trait EmitByte {
    fn emit_byte(&self, byte: u8) -> Result<()>;
}

impl<T: EmitByte + ?Sized> EmitByte for &T {
    fn emit_byte(&self, byte: u8) -> Result<()> {
        T::emit_byte(self, byte)
    }
}

/// Byte sink over an `embedded-hal` serial transmitter.
///
/// The transmitter is installed at runtime, bytes emitted before that are
/// silently dropped.
pub struct SerialSink<W> {
    tx: Mutex<RefCell<Option<W>>>,
}

impl<W> SerialSink<W> {
    pub const fn new() -> Self {
        Self {
            tx: Mutex::new(RefCell::new(None)),
        }
    }

    /// Installs a transmitter and returns the previous one.
    pub fn init(&self, tx: W) -> Option<W> {
        critical_section::with(|cs| self.tx.borrow_ref_mut(cs).replace(tx))
    }

    /// Takes the transmitter back.
    pub fn release(&self) -> Option<W> {
        critical_section::with(|cs| self.tx.borrow_ref_mut(cs).take())
    }
}

impl<W> Default for SerialSink<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> EmitByte for SerialSink<W>
where
    W: serial::Write<u8>,
    W::Error: Debug,
{
    fn emit_byte(&self, byte: u8) -> Result<()> {
        critical_section::with(|cs| match self.tx.borrow_ref_mut(cs).as_mut() {
            Some(tx) => nb::block!(tx.write(byte)).map_err(Error::transport),
            None => Ok(()),
        })
    }
}

/// A console bound to a byte sink and a scratch buffer.
pub struct Console<'a, S, const N: usize = FMT_BUF_LEN> {
    sink: S,
    scratch: &'a ScratchBuffer<N>,
}

impl<'a, S, const N: usize> Console<'a, S, N>
where
    S: EmitByte,
{
    pub fn new(sink: S, scratch: &'a ScratchBuffer<N>) -> Self {
        Self { sink, scratch }
    }

    /// Formats `fmt` into the scratch buffer and emits the produced bytes.
    ///
    /// Fails only with [`Error::Busy`]. Formatting and transport errors are
    /// logged: whatever the formatter produced is emitted and its length
    /// returned.
    pub fn write_line(&self, fmt: &[u8], args: &[Arg<'_>]) -> Result<usize> {
        let mut scratch = self.scratch.try_lock()?;

        let written = match opencontrol_printf::format(&mut scratch[..], fmt, args) {
            Ok(written) => written,
            Err(err) => {
                log::warn!("Console output is incomplete: {}", err);
                err.written()
            }
        };

        self.emit(&scratch[..written]);
        Ok(written)
    }

    /// Formats `core::fmt` arguments into the scratch buffer and emits them.
    ///
    /// Output that does not fit is truncated. Newlines are not translated.
    /// Like [`Console::write_line`], fails only with [`Error::Busy`].
    pub fn write_fmt(&self, args: fmt::Arguments<'_>) -> Result<usize> {
        let mut scratch = self.scratch.try_lock()?;

        let mut writer = BoundedWriter::new(&mut scratch[..]);
        // A truncated record is still worth printing.
        writer.write_fmt(args).ok();
        let written = writer.finish();

        self.emit(&scratch[..written]);
        Ok(written)
    }

    /// Emits raw bytes in order.
    ///
    /// A rejected byte does not stop the rest, the first failure is returned
    /// once every byte has been offered to the transport.
    pub fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        bytes.iter().fold(Ok(()), |res, &byte| {
            let emitted = self.sink.emit_byte(byte);
            res.and(emitted)
        })
    }

    fn emit(&self, bytes: &[u8]) {
        if let Err(err) = self.write_bytes(bytes) {
            log::warn!("Console transport dropped output: {}", err);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
