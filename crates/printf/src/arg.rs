use core::{ffi::CStr, iter::Copied, slice};

/// A single value of the argument list.
///
/// Directives consume arguments strictly from left to right. Integer
/// variants are reinterpreted as a 32-bit word by the numeric and character
/// directives, just like a variadic call would do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// A byte-sized integer, usually consumed by `%c`.
    Char(u8),
    /// A signed integer, usually consumed by `%d`.
    Int(i32),
    /// An unsigned integer, usually consumed by `%x`.
    Uint(u32),
    /// A possibly absent byte string consumed by `%s`.
    ///
    /// The string ends at its first NUL byte or at the end of the slice.
    Str(Option<&'a [u8]>),
}

impl<'a> Arg<'a> {
    /// Returns the argument as a raw 32-bit word, or `None` for strings.
    pub fn as_word(self) -> Option<u32> {
        match self {
            Arg::Char(value) => Some(u32::from(value)),
            Arg::Int(value) => Some(value as u32),
            Arg::Uint(value) => Some(value),
            Arg::Str(_) => None,
        }
    }

    /// Returns the string reference, or `None` for integers.
    pub fn as_str(self) -> Option<Option<&'a [u8]>> {
        match self {
            Arg::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl From<u8> for Arg<'_> {
    fn from(value: u8) -> Self {
        Self::Char(value)
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Self::Char(value as u8)
    }
}

impl From<i32> for Arg<'_> {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Arg<'_> {
    fn from(value: u32) -> Self {
        Self::Uint(value)
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Str(Some(value))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Self::Str(Some(value.as_slice()))
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(Some(value.as_bytes()))
    }
}

impl<'a> From<&'a CStr> for Arg<'a> {
    fn from(value: &'a CStr) -> Self {
        Self::Str(Some(value.to_bytes()))
    }
}

impl<'a> From<Option<&'a [u8]>> for Arg<'a> {
    fn from(value: Option<&'a [u8]>) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<Option<&'a str>> for Arg<'a> {
    fn from(value: Option<&'a str>) -> Self {
        Self::Str(value.map(str::as_bytes))
    }
}

/// Left to right cursor over an argument list.
#[derive(Debug, Clone)]
pub struct Args<'a, 'b> {
    inner: Copied<slice::Iter<'b, Arg<'a>>>,
}

impl<'a, 'b> Args<'a, 'b> {
    pub fn new(args: &'b [Arg<'a>]) -> Self {
        Self {
            inner: args.iter().copied(),
        }
    }

    /// Returns the number of arguments that have not been consumed yet.
    pub fn remaining(&self) -> usize {
        self.inner.len()
    }
}

impl<'a> Iterator for Args<'a, '_> {
    type Item = Arg<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Args<'_, '_> {}
