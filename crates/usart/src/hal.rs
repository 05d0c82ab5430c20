use crate::{Pin, PinMode, Remap, Usart, UsartConfig};

/// Interrupt sources of a USART.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A byte has been received.
    RxNotEmpty,
    /// The transmit data register is empty.
    TxEmpty,
}

/// Status flags of a USART.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// The last transmission has completed.
    TransmissionComplete,
    /// A received byte is ready to be read.
    RxNotEmpty,
}

/// The vendor peripheral library calls the serial port driver relies on.
pub trait UsartHal {
    /// Enables an alternate pin mapping.
    fn remap_pins(&mut self, remap: Remap);
    fn configure_pin(&mut self, pin: Pin, mode: PinMode);
    /// Gates the peripheral clock of the USART on.
    fn enable_clock(&mut self, usart: Usart);
    /// Programs the frame format and the baud rate.
    fn configure(&mut self, usart: Usart, config: &UsartConfig);
    /// Enables the USART interrupt line in the NVIC.
    fn enable_irq(&mut self, usart: Usart, sub_priority: u8);
    fn listen(&mut self, usart: Usart, event: Event);
    fn enable(&mut self, usart: Usart);
    fn is_set(&self, usart: Usart, flag: Flag) -> bool;
    fn write_data(&mut self, usart: Usart, byte: u8);
    fn read_data(&mut self, usart: Usart) -> u8;
}
