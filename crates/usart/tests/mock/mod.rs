//! Vendor library stand-in which records every call.

use std::{cell::Cell, collections::VecDeque};

use opencontrol_usart::{Event, Flag, Pin, PinMode, Remap, Usart, UsartConfig, UsartHal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Remap(Remap),
    Pin(Pin, PinMode),
    Clock(Usart),
    Configure(Usart, UsartConfig),
    Irq(Usart, u8),
    Listen(Usart, Event),
    Enable(Usart),
    Write(Usart, u8),
    Read(Usart),
}

#[derive(Debug, Default)]
pub struct MockHal {
    pub calls: Vec<Call>,
    pub rx: VecDeque<u8>,
    /// How many times the transmission complete flag reads low before each byte.
    pub tx_busy_polls: usize,
    polls: Cell<usize>,
}

impl MockHal {
    pub fn with_busy_transmitter(tx_busy_polls: usize) -> Self {
        Self {
            tx_busy_polls,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Write(_, byte) => Some(*byte),
                _ => None,
            })
            .collect()
    }

    pub fn polls(&self) -> usize {
        self.polls.get()
    }
}

impl UsartHal for MockHal {
    fn remap_pins(&mut self, remap: Remap) {
        self.calls.push(Call::Remap(remap));
    }

    fn configure_pin(&mut self, pin: Pin, mode: PinMode) {
        self.calls.push(Call::Pin(pin, mode));
    }

    fn enable_clock(&mut self, usart: Usart) {
        self.calls.push(Call::Clock(usart));
    }

    fn configure(&mut self, usart: Usart, config: &UsartConfig) {
        self.calls.push(Call::Configure(usart, *config));
    }

    fn enable_irq(&mut self, usart: Usart, sub_priority: u8) {
        self.calls.push(Call::Irq(usart, sub_priority));
    }

    fn listen(&mut self, usart: Usart, event: Event) {
        self.calls.push(Call::Listen(usart, event));
    }

    fn enable(&mut self, usart: Usart) {
        self.calls.push(Call::Enable(usart));
    }

    fn is_set(&self, _usart: Usart, flag: Flag) -> bool {
        match flag {
            Flag::RxNotEmpty => !self.rx.is_empty(),
            Flag::TransmissionComplete => {
                if self.polls.get() < self.tx_busy_polls {
                    self.polls.set(self.polls.get() + 1);
                    false
                } else {
                    true
                }
            }
        }
    }

    fn write_data(&mut self, usart: Usart, byte: u8) {
        self.polls.set(0);
        self.calls.push(Call::Write(usart, byte));
    }

    fn read_data(&mut self, usart: Usart) -> u8 {
        self.calls.push(Call::Read(usart));
        self.rx.pop_front().unwrap_or_default()
    }
}

pub fn init_logger() {
    env_logger::builder().is_test(true).try_init().ok();
}
