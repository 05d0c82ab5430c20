use core::cell::Cell;

use critical_section::Mutex;
use opencontrol_printf::Arg;

use crate::{Console, EmitByte, Result, ScratchBuffer, SetStdoutError, FMT_BUF_LEN};

type StaticSink = &'static (dyn EmitByte + Sync);

static SINK: Mutex<Cell<Option<StaticSink>>> = Mutex::new(Cell::new(None));
static SCRATCH: ScratchBuffer<FMT_BUF_LEN> = ScratchBuffer::new();

struct NopSink;

impl EmitByte for NopSink {
    fn emit_byte(&self, _byte: u8) -> Result<()> {
        Ok(())
    }
}

/// Sets the process-wide console transport.
///
/// This function may only be called once during the program lifecycle.
pub fn init(sink: StaticSink) -> core::result::Result<(), SetStdoutError> {
    critical_section::with(|cs| {
        let slot = SINK.borrow(cs);
        if slot.get().is_some() {
            return Err(SetStdoutError::new());
        }
        slot.set(Some(sink));
        Ok(())
    })
}

/// Returns the process-wide console.
///
/// Until [`init`] is called the console formats as usual and discards the
/// output.
pub fn console() -> Console<'static, StaticSink> {
    static NOP: NopSink = NopSink;

    let sink = critical_section::with(|cs| SINK.borrow(cs).get()).unwrap_or(&NOP);
    Console::new(sink, &SCRATCH)
}

/// Formats to the process-wide console.
///
/// Returns the number of bytes produced by the formatter, or zero if the
/// console is busy. Transport failures are logged and do not change the
/// result.
pub fn printk(fmt: &[u8], args: &[Arg<'_>]) -> usize {
    console().write_line(fmt, args).unwrap_or(0)
}
