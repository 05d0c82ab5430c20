use embedded_hal::serial::Write;
use opencontrol_usart::{
    BaudRate, Com, ComId, Error, Event, FlowControl, Parity, Pin, PinMode, PinSpeed, Port, Remap,
    StopBits, Usart, UsartAllocator, UsartConfig, WordLength,
};

use crate::mock::{init_logger, Call, MockHal};

mod mock;

const AF_50MHZ: PinMode = PinMode::AlternatePushPull {
    speed: PinSpeed::Mhz50,
};

fn init_com(id: ComId) -> Com<MockHal> {
    init_logger();
    Com::init(MockHal::default(), id, BaudRate::B115200)
}

#[test]
fn test_init_sequence() {
    let com = init_com(ComId::Com1);

    let config = UsartConfig::new(BaudRate::B115200);
    assert_eq!(
        com.hal().calls,
        [
            Call::Pin(Pin::new(Port::A, 9), AF_50MHZ),
            Call::Pin(Pin::new(Port::A, 10), PinMode::InputFloating),
            Call::Clock(Usart::Usart1),
            Call::Configure(Usart::Usart1, config),
            Call::Irq(Usart::Usart1, 0),
            Call::Listen(Usart::Usart1, Event::RxNotEmpty),
            Call::Enable(Usart::Usart1),
        ]
    );
    assert_eq!(com.id(), ComId::Com1);
    assert_eq!(com.config(), &config);
}

#[test]
fn test_init_remapped_port() {
    let com = init_com(ComId::Com6);

    assert_eq!(com.usart(), Usart::Usart3);
    assert_eq!(com.hal().calls[0], Call::Remap(Remap::Usart3Partial));
    assert_eq!(
        com.hal().calls[1],
        Call::Pin(Pin::new(Port::C, 10), AF_50MHZ)
    );
}

#[test]
fn test_port_table() {
    let expected = [
        (Usart::Usart1, (Port::A, 9), (Port::A, 10), None),
        (Usart::Usart1, (Port::B, 6), (Port::B, 7), Some(Remap::Usart1)),
        (Usart::Usart2, (Port::A, 2), (Port::A, 3), None),
        (Usart::Usart2, (Port::D, 5), (Port::D, 6), Some(Remap::Usart2)),
        (Usart::Usart3, (Port::B, 10), (Port::B, 11), None),
        (Usart::Usart3, (Port::C, 10), (Port::C, 11), Some(Remap::Usart3Partial)),
        (Usart::Usart3, (Port::D, 8), (Port::D, 9), Some(Remap::Usart3Full)),
    ];

    for (id, (usart, tx, rx, remap)) in ComId::ALL.into_iter().zip(expected) {
        let info = id.info();
        assert_eq!(info.usart, usart, "{id:?}");
        assert_eq!(info.tx, Pin::new(tx.0, tx.1), "{id:?}");
        assert_eq!(info.rx, Pin::new(rx.0, rx.1), "{id:?}");
        assert_eq!(info.remap, remap, "{id:?}");
    }
}

#[test]
fn test_default_frame_format() {
    let config = UsartConfig::default();

    assert_eq!(config.baud_rate.bps(), 115_200);
    assert_eq!(config.word_length, WordLength::Bits8);
    assert_eq!(config.stop_bits, StopBits::One);
    assert_eq!(config.parity, Parity::None);
    assert_eq!(config.flow_control, FlowControl::None);
    assert!(config.rx && config.tx);
    assert_eq!(BaudRate::B4800.bps(), 4800);
}

#[test]
fn test_set_baudrate() {
    let mut com = init_com(ComId::Com3);
    com.set_baudrate(BaudRate::B4800);

    assert_eq!(com.config().baud_rate, BaudRate::B4800);
    assert_eq!(
        com.hal().calls.last(),
        Some(&Call::Configure(
            Usart::Usart2,
            UsartConfig::new(BaudRate::B4800)
        ))
    );
}

#[test]
fn test_send_char_waits_for_transmission_complete() {
    init_logger();
    let mut com = Com::init(
        MockHal::with_busy_transmitter(5),
        ComId::Com1,
        BaudRate::B115200,
    );

    assert_eq!(com.send_char(b'A'), b'A');
    assert_eq!(com.hal().sent(), b"A");
    // The counter is reset by the write.
    assert_eq!(com.hal().polls(), 0);

    assert_eq!(com.write(b'B'), Err(nb::Error::WouldBlock));
    assert_eq!(com.hal().polls(), 1);
}

#[test]
fn test_send_bytes() {
    let mut com = init_com(ComId::Com1);

    assert_eq!(com.send_bytes(b"telemetry", 4), 4);
    assert_eq!(com.send_bytes(b"ab\0cd", 5), 2);
    assert_eq!(com.send_str(b"xyz"), 3);
    assert_eq!(com.send_bytes(b"", 10), 0);

    assert_eq!(com.hal().sent(), b"teleabxyz");
}

#[test]
fn test_interrupt_echoes_received_byte() {
    let mut com = init_com(ComId::Com5);
    assert_eq!(com.on_interrupt(), None);

    let mut hal = com.free(&UsartAllocator::new());
    hal.rx.extend(*b"ok");
    let mut com = Com::init(hal, ComId::Com5, BaudRate::B115200);

    assert_eq!(com.on_interrupt(), Some(b'o'));
    assert_eq!(com.on_interrupt(), Some(b'k'));
    assert_eq!(com.on_interrupt(), None);
    assert_eq!(com.hal().sent(), b"ok");
    assert!(com.hal().calls.contains(&Call::Read(Usart::Usart3)));
}

#[test]
fn test_flush_and_listen() {
    let mut com = init_com(ComId::Com2);

    assert_eq!(com.flush(), Ok(()));
    com.listen(Event::TxEmpty);
    assert_eq!(
        com.hal().calls.last(),
        Some(&Call::Listen(Usart::Usart1, Event::TxEmpty))
    );
}

#[test]
fn test_allocator_shares_usart_between_ports() {
    init_logger();
    let allocator = UsartAllocator::new();

    let com1 = Com::claim(
        &allocator,
        MockHal::default(),
        ComId::Com1,
        BaudRate::B115200,
    )
    .unwrap();
    assert!(allocator.is_claimed(Usart::Usart1));

    let err = Com::claim(
        &allocator,
        MockHal::default(),
        ComId::Com2,
        BaudRate::B4800,
    )
    .unwrap_err();
    assert_eq!(err, Error::AlreadyAllocated(Usart::Usart1));
    assert_eq!(err.to_string(), "USART1 is already claimed by another port.");

    let com3 = Com::claim(
        &allocator,
        MockHal::default(),
        ComId::Com3,
        BaudRate::B4800,
    )
    .unwrap();
    assert!(allocator.is_claimed(Usart::Usart2));
    assert!(!allocator.is_claimed(Usart::Usart3));

    com1.free(&allocator);
    assert!(!allocator.is_claimed(Usart::Usart1));
    assert!(Com::claim(
        &allocator,
        MockHal::default(),
        ComId::Com2,
        BaudRate::B4800
    )
    .is_ok());

    com3.free(&allocator);
    assert!(!allocator.is_claimed(Usart::Usart2));
}
