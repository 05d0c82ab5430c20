use core::convert::Infallible;

use embedded_hal::serial;

use crate::{
    BaudRate, ComId, Event, Flag, PinMode, PinSpeed, Result, Usart, UsartAllocator, UsartConfig,
    UsartHal, IRQ_SUB_PRIORITY,
};

/// An initialized serial port.
#[derive(Debug)]
pub struct Com<H> {
    hal: H,
    id: ComId,
    config: UsartConfig,
}

impl<H: UsartHal> Com<H> {
    /// Configures pins, clock, frame format and the receive interrupt of the
    /// port, then enables its USART.
    pub fn init(mut hal: H, id: ComId, baud_rate: BaudRate) -> Self {
        let info = id.info();

        if let Some(remap) = info.remap {
            hal.remap_pins(remap);
        }
        hal.configure_pin(
            info.tx,
            PinMode::AlternatePushPull {
                speed: PinSpeed::Mhz50,
            },
        );
        hal.configure_pin(info.rx, PinMode::InputFloating);
        hal.enable_clock(info.usart);

        let config = UsartConfig::new(baud_rate);
        hal.configure(info.usart, &config);

        hal.enable_irq(info.usart, IRQ_SUB_PRIORITY);
        hal.listen(info.usart, Event::RxNotEmpty);
        hal.enable(info.usart);

        log::debug!(
            "{:?} is ready: {} at {} bps",
            id,
            info.usart,
            baud_rate.bps()
        );
        Self { hal, id, config }
    }

    /// Claims the port's USART and initializes the port.
    pub fn claim(
        allocator: &UsartAllocator,
        hal: H,
        id: ComId,
        baud_rate: BaudRate,
    ) -> Result<Self> {
        allocator.claim(id.info().usart)?;
        Ok(Self::init(hal, id, baud_rate))
    }

    /// Returns the port's USART to the allocator.
    pub fn free(self, allocator: &UsartAllocator) -> H {
        allocator.release(self.usart());
        self.hal
    }

    pub fn id(&self) -> ComId {
        self.id
    }

    pub fn usart(&self) -> Usart {
        self.id.info().usart
    }

    pub fn config(&self) -> &UsartConfig {
        &self.config
    }

    pub fn hal(&self) -> &H {
        &self.hal
    }

    pub fn set_baudrate(&mut self, baud_rate: BaudRate) {
        self.config.baud_rate = baud_rate;
        self.hal.configure(self.usart(), &self.config);
    }

    /// Waits for the previous transmission to complete and sends a byte.
    pub fn send_char(&mut self, byte: u8) -> u8 {
        nb::block!(self.try_send(byte)).unwrap_or_else(|never| match never {});
        byte
    }

    fn try_send(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        let usart = self.usart();
        if !self.hal.is_set(usart, Flag::TransmissionComplete) {
            return Err(nb::Error::WouldBlock);
        }

        self.hal.write_data(usart, byte);
        Ok(())
    }

    /// Sends bytes up to the first NUL.
    pub fn send_str(&mut self, bytes: &[u8]) -> usize {
        self.send_bytes(bytes, bytes.len())
    }

    /// Sends at most `len` bytes, stopping early at a NUL byte.
    ///
    /// Returns the number of bytes sent.
    pub fn send_bytes(&mut self, bytes: &[u8], len: usize) -> usize {
        bytes
            .iter()
            .take(len)
            .take_while(|&&byte| byte != 0)
            .map(|&byte| self.send_char(byte))
            .count()
    }

    pub fn listen(&mut self, event: Event) {
        self.hal.listen(self.usart(), event);
    }

    /// Handles the USART interrupt by echoing a received byte back.
    pub fn on_interrupt(&mut self) -> Option<u8> {
        let usart = self.usart();
        if !self.hal.is_set(usart, Flag::RxNotEmpty) {
            return None;
        }

        let byte = self.hal.read_data(usart);
        Some(self.send_char(byte))
    }
}

impl<H: UsartHal> serial::Write<u8> for Com<H> {
    type Error = Infallible;

    fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
        self.try_send(word)
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        if self.hal.is_set(self.usart(), Flag::TransmissionComplete) {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}
