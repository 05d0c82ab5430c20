use heapless::Vec;

use crate::{Arg, Args, BoundedWriter, Error, Result};

/// The maximum number of bytes copied by a single `%s` directive.
///
/// Prevents scanning an unterminated string forever.
pub const MAX_STRING_LEN: usize = 1024;
/// The buffer bound used by [`sprintf`].
pub const SPRINTF_CAPACITY: usize = 100;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
const HEX_PREFIX: &[u8; 2] = b"0x";
const HEX_NIBBLES: u32 = 8;
// The longest 32-bit magnitude, 4294967295, has ten digits.
const MAX_DECIMAL_DIGITS: usize = 10;

/// Interprets `fmt` against `args` and writes the result into `buf`.
///
/// Absent references correspond to null pointers and fail with
/// [`Error::NullArgument`] before anything is written. Otherwise the output
/// is always NUL terminated, even when formatting fails halfway, and the
/// returned count excludes the terminator.
pub fn vformat(buf: Option<&mut [u8]>, fmt: Option<&[u8]>, args: &[Arg<'_>]) -> Result<usize> {
    let (Some(buf), Some(fmt)) = (buf, fmt) else {
        return Err(Error::NullArgument);
    };

    let mut writer = BoundedWriter::new(buf);
    let res = interpret(&mut writer, fmt, &mut Args::new(args));
    let written = writer.finish();
    res.map(|_| written)
}

/// Formats into `buf`, see [`vformat`].
pub fn format(buf: &mut [u8], fmt: &[u8], args: &[Arg<'_>]) -> Result<usize> {
    vformat(Some(buf), Some(fmt), args)
}

/// Formats into at most [`SPRINTF_CAPACITY`] bytes of `buf`.
pub fn sprintf(buf: &mut [u8], fmt: &[u8], args: &[Arg<'_>]) -> Result<usize> {
    let len = buf.len().min(SPRINTF_CAPACITY);
    format(&mut buf[..len], fmt, args)
}

/// Scans the format string once from left to right.
///
/// A `%` with no directive byte after it, at the end of the string, is
/// printed as is.
fn interpret(out: &mut BoundedWriter<'_>, fmt: &[u8], args: &mut Args<'_, '_>) -> Result<()> {
    let fmt = until_nul(fmt);

    let mut pos = 0;
    while let Some(&byte) = fmt.get(pos) {
        if byte != b'%' {
            write_literal(out, byte)?;
            pos += 1;
            continue;
        }

        let Some(&directive) = fmt.get(pos + 1) else {
            out.push(b'%')?;
            break;
        };
        pos += 2;

        match directive {
            b'c' => {
                let word = next_word(out, args)?;
                out.push(word as u8)?;
            }
            b's' => {
                if let Some(s) = next_str(out, args)? {
                    write_str(out, s)?;
                }
            }
            b'x' | b'X' => {
                let word = next_word(out, args)?;
                write_hex(out, word)?;
            }
            b'd' => {
                let word = next_word(out, args)?;
                write_decimal(out, word as i32)?;
            }
            b'o' | b'O' => {}
            other => write_literal(out, other)?,
        }
    }

    Ok(())
}

fn write_literal(out: &mut BoundedWriter<'_>, byte: u8) -> Result<()> {
    if byte == b'\n' {
        out.push(b'\r')?;
    }
    out.push(byte)
}

fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&byte| byte == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

fn mismatch(out: &BoundedWriter<'_>) -> Error {
    Error::ArgumentMismatch { written: out.len() }
}

fn next_word(out: &BoundedWriter<'_>, args: &mut Args<'_, '_>) -> Result<u32> {
    args.next()
        .and_then(Arg::as_word)
        .ok_or_else(|| mismatch(out))
}

fn next_str<'a>(out: &BoundedWriter<'_>, args: &mut Args<'a, '_>) -> Result<Option<&'a [u8]>> {
    args.next()
        .and_then(Arg::as_str)
        .ok_or_else(|| mismatch(out))
}

fn write_str(out: &mut BoundedWriter<'_>, s: &[u8]) -> Result<()> {
    out.extend(
        s.iter()
            .take(MAX_STRING_LEN)
            .take_while(|&&byte| byte != 0)
            .copied(),
    )
}

fn write_hex(out: &mut BoundedWriter<'_>, value: u32) -> Result<()> {
    out.extend(HEX_PREFIX.iter().copied())?;
    (0..HEX_NIBBLES)
        .rev()
        .try_for_each(|nibble| out.push(DIGITS[((value >> (nibble * 4)) & 0x0F) as usize]))
}

fn write_decimal(out: &mut BoundedWriter<'_>, value: i32) -> Result<()> {
    if value < 0 {
        out.push(b'-')?;
    }

    let mut magnitude = value.unsigned_abs();
    let mut digits: Vec<u8, MAX_DECIMAL_DIGITS> = Vec::new();
    loop {
        // Cannot overflow, see `MAX_DECIMAL_DIGITS`.
        digits.push(DIGITS[(magnitude % 10) as usize]).ok();
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }

    out.extend(digits.iter().rev().copied())
}
