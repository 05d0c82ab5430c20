use core::sync::atomic::{AtomicU8, Ordering};

use crate::{Error, Result, Usart};

/// Keeps track of the USART instances in use.
///
/// Several serial ports share one USART through different pin mappings, only
/// one of them may own it at a time.
#[derive(Debug, Default)]
pub struct UsartAllocator {
    claimed: AtomicU8,
}

impl UsartAllocator {
    pub const fn new() -> Self {
        Self {
            claimed: AtomicU8::new(0),
        }
    }

    pub fn claim(&self, usart: Usart) -> Result<()> {
        let bit = usart.bit();
        if self.claimed.fetch_or(bit, Ordering::AcqRel) & bit != 0 {
            return Err(Error::AlreadyAllocated(usart));
        }
        Ok(())
    }

    pub fn release(&self, usart: Usart) {
        self.claimed.fetch_and(!usart.bit(), Ordering::AcqRel);
    }

    pub fn is_claimed(&self, usart: Usart) -> bool {
        self.claimed.load(Ordering::Acquire) & usart.bit() != 0
    }
}
