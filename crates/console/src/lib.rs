#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! Serial console on top of the bounded formatter.
//!
//! Output is formatted into a scratch buffer and then pushed byte by byte to
//! a blocking transport. The scratch buffer can only be used by one caller at
//! a time, a concurrent caller gets [`Error::Busy`] instead of interleaved
//! output.

pub use opencontrol_printf as printf;

pub use crate::{
    error::{Error, Result, SetStdoutError},
    logger::init_logger,
    scratch::{ScratchBuffer, ScratchGuard},
    sink::{Console, EmitByte, SerialSink},
    stdout::{console, init, printk},
};

pub mod error;
pub mod logger;
pub mod scratch;
pub mod sink;
pub mod stdout;


/// Capacity of the process-wide console scratch buffer.
pub const FMT_BUF_LEN: usize = 128;

/// Prints to the process-wide console.
///
/// Returns the number of bytes produced by the formatter.
#[macro_export]
macro_rules! printk {
    ($fmt:expr) => {
        $crate::printk(::core::convert::AsRef::<[u8]>::as_ref($fmt), &[])
    };
    ($fmt:expr, $($arg:expr),+ $(,)?) => {
        $crate::printk(
            ::core::convert::AsRef::<[u8]>::as_ref($fmt),
            &$crate::printf::args![$($arg),+],
        )
    };
}
