#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! A constrained `printf` for the flight controller console.
//!
//! Only four conversions are understood: `%c`, `%s`, `%x`/`%X` and `%d`.
//! Output always goes to a caller supplied buffer through [`BoundedWriter`],
//! which refuses to write past the buffer end.

pub use crate::{
    arg::{Arg, Args},
    error::{Error, Result},
    format::{format, sprintf, vformat, MAX_STRING_LEN, SPRINTF_CAPACITY},
    writer::BoundedWriter,
};

pub mod arg;
pub mod error;
pub mod format;
pub mod writer;


/// Builds an argument array from heterogeneous values.
///
/// ```
/// use opencontrol_printf::{args, format};
///
/// let mut buf = [0_u8; 32];
/// let len = format(&mut buf, b"%s=%d", &args!["alt", -3]).unwrap();
/// assert_eq!(&buf[..len], b"alt=-3");
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        [$($crate::Arg::from($arg)),*]
    };
}
