#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! Serial ports of the flight controller.
//!
//! The driver only sequences calls into the vendor peripheral library, which
//! is abstracted by [`UsartHal`]. A port implements the `embedded-hal` serial
//! `Write` trait and is suitable as the console transport.

pub use crate::{
    allocator::UsartAllocator,
    com::Com,
    config::{
        BaudRate, ComId, ComInfo, FlowControl, Parity, Pin, PinMode, PinSpeed, Port, Remap,
        StopBits, Usart, UsartConfig, WordLength,
    },
    error::{Error, Result},
    hal::{Event, Flag, UsartHal},
};

pub mod allocator;
pub mod com;
pub mod config;
pub mod error;
pub mod hal;

/// NVIC sub-priority of the USART interrupts.
pub const IRQ_SUB_PRIORITY: u8 = 0;
