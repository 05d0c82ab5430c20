use core::fmt;

/// USART peripheral instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Usart {
    Usart1,
    Usart2,
    Usart3,
}

impl Usart {
    pub(crate) fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Usart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Usart::Usart1 => "USART1",
            Usart::Usart2 => "USART2",
            Usart::Usart3 => "USART3",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    A,
    B,
    C,
    D,
}

/// A GPIO pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub port: Port,
    pub pin: u8,
}

impl Pin {
    pub const fn new(port: Port, pin: u8) -> Self {
        Self { port, pin }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinSpeed {
    Mhz2,
    Mhz10,
    Mhz50,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    AlternatePushPull { speed: PinSpeed },
    InputFloating,
}

/// Alternate pin mapping of a USART.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remap {
    Usart1,
    Usart2,
    Usart3Partial,
    Usart3Full,
}

/// Serial port identifiers, one per USART and pin mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComId {
    Com1 = 0,
    Com2 = 1,
    Com3 = 2,
    Com4 = 3,
    Com5 = 4,
    Com6 = 5,
    Com7 = 6,
}

impl ComId {
    pub const ALL: [ComId; 7] = [
        ComId::Com1,
        ComId::Com2,
        ComId::Com3,
        ComId::Com4,
        ComId::Com5,
        ComId::Com6,
        ComId::Com7,
    ];

    /// Returns the wiring of this port.
    pub fn info(self) -> &'static ComInfo {
        &COM_DEV[self as usize]
    }
}

/// Which USART and pins a serial port uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComInfo {
    pub usart: Usart,
    pub tx: Pin,
    pub rx: Pin,
    pub remap: Option<Remap>,
}

static COM_DEV: [ComInfo; 7] = [
    ComInfo {
        usart: Usart::Usart1,
        tx: Pin::new(Port::A, 9),
        rx: Pin::new(Port::A, 10),
        remap: None,
    },
    ComInfo {
        usart: Usart::Usart1,
        tx: Pin::new(Port::B, 6),
        rx: Pin::new(Port::B, 7),
        remap: Some(Remap::Usart1),
    },
    ComInfo {
        usart: Usart::Usart2,
        tx: Pin::new(Port::A, 2),
        rx: Pin::new(Port::A, 3),
        remap: None,
    },
    ComInfo {
        usart: Usart::Usart2,
        tx: Pin::new(Port::D, 5),
        rx: Pin::new(Port::D, 6),
        remap: Some(Remap::Usart2),
    },
    ComInfo {
        usart: Usart::Usart3,
        tx: Pin::new(Port::B, 10),
        rx: Pin::new(Port::B, 11),
        remap: None,
    },
    ComInfo {
        usart: Usart::Usart3,
        tx: Pin::new(Port::C, 10),
        rx: Pin::new(Port::C, 11),
        remap: Some(Remap::Usart3Partial),
    },
    ComInfo {
        usart: Usart::Usart3,
        tx: Pin::new(Port::D, 8),
        rx: Pin::new(Port::D, 9),
        remap: Some(Remap::Usart3Full),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaudRate {
    B4800 = 4800,
    B115200 = 115200,
}

impl BaudRate {
    pub fn bps(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordLength {
    Bits8,
    Bits9,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBits {
    One,
    Half,
    Two,
    OneAndHalf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    None,
    Even,
    Odd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowControl {
    None,
    Rts,
    Cts,
    RtsCts,
}

/// Frame format of a serial port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsartConfig {
    pub baud_rate: BaudRate,
    pub word_length: WordLength,
    pub stop_bits: StopBits,
    pub parity: Parity,
    pub flow_control: FlowControl,
    pub rx: bool,
    pub tx: bool,
}

impl UsartConfig {
    /// 8N1 frames without flow control, both directions enabled.
    pub const fn new(baud_rate: BaudRate) -> Self {
        Self {
            baud_rate,
            word_length: WordLength::Bits8,
            stop_bits: StopBits::One,
            parity: Parity::None,
            flow_control: FlowControl::None,
            rx: true,
            tx: true,
        }
    }
}

impl Default for UsartConfig {
    fn default() -> Self {
        Self::new(BaudRate::B115200)
    }
}
