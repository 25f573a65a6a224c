//! DeviceSession behaviour: opening, closing, access checks and transfer framing.

mod common;

use board_io::{consts::cmd, DeviceSession, Error, Register};
use common::{assert_select_before_transfer, mock_session, Call};

#[test]
fn test_open_missing_device_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-device");
    match DeviceSession::open(&path) {
        Err(Error::DeviceUnavailable { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected DeviceUnavailable, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_select_on_plain_file_is_rejected() {
    // A regular file accepts read/write but not the select ioctl.
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut session = DeviceSession::open(file.path()).unwrap();
    match session.select_register(Register::RedLeds) {
        Err(Error::RegisterSelect { register, .. }) => assert_eq!(register, Register::RedLeds),
        other => panic!("expected RegisterSelect, got {:?}", other),
    }
}

#[test]
fn test_write_register_selects_then_writes() {
    let (mut session, port) = mock_session();
    let written = session
        .write_register(Register::GreenLeds, &[1, 2, 3, 4])
        .unwrap();
    assert_eq!(written, 4);
    assert_eq!(
        port.calls(),
        vec![Call::Select(cmd::WR_GREEN_LEDS), Call::Write(vec![1, 2, 3, 4])]
    );
}

#[test]
fn test_read_register_selects_then_reads() {
    let (mut session, port) = mock_session();
    port.queue_read([0xAA, 0x55, 0, 0]);
    let raw = session.read_register(Register::Switches).unwrap();
    assert_eq!(raw, [0xAA, 0x55, 0, 0]);
    let pairs = assert_select_before_transfer(&port.calls());
    assert_eq!(pairs, vec![(cmd::RD_SWITCHES, Call::Read)]);
}

#[test]
fn test_register_access_is_checked_before_io() {
    let (mut session, port) = mock_session();
    assert!(matches!(
        session.write_register(Register::Buttons, &[0; 4]),
        Err(Error::InvalidAccess {
            register: Register::Buttons
        })
    ));
    assert!(matches!(
        session.read_register(Register::SevenSegment),
        Err(Error::InvalidAccess { .. })
    ));
    assert!(port.calls().is_empty());
}

#[test]
fn test_rejected_select_skips_transfer() {
    let (mut session, port) = mock_session();
    port.state.borrow_mut().reject_select = true;
    let err = session
        .write_register(Register::RedLeds, &[0; 4])
        .unwrap_err();
    assert!(matches!(err, Error::RegisterSelect { .. }));
    assert_eq!(port.calls(), vec![Call::Select(cmd::WR_RED_LEDS)]);
}

#[test]
fn test_short_write_is_an_error() {
    let (mut session, port) = mock_session();
    port.state.borrow_mut().short_write = Some(2);
    match session.write_register(Register::SevenSegment, &[0; 4]) {
        Err(Error::ShortWrite { register, written }) => {
            assert_eq!(register, Register::SevenSegment);
            assert_eq!(written, 2);
        }
        other => panic!("expected ShortWrite, got {:?}", other),
    }
}

#[test]
fn test_short_read_is_an_error() {
    let (mut session, port) = mock_session();
    port.state.borrow_mut().short_read = Some(3);
    assert!(matches!(
        session.read_register(Register::Buttons),
        Err(Error::ShortRead { read: 3, .. })
    ));
}

#[test]
fn test_device_read_error_surfaces() {
    let (mut session, port) = mock_session();
    port.state.borrow_mut().fail_read = true;
    assert!(matches!(
        session.read_register(Register::Buttons),
        Err(Error::IoRead {
            register: Register::Buttons,
            ..
        })
    ));
    assert_eq!(
        port.calls(),
        vec![Call::Select(cmd::RD_PBUTTONS), Call::Read]
    );
}

#[test]
fn test_device_write_error_surfaces() {
    let (mut session, port) = mock_session();
    port.state.borrow_mut().fail_write_at = Some(0);
    assert!(matches!(
        session.write_register(Register::RedLeds, &[0; 4]),
        Err(Error::IoWrite {
            register: Register::RedLeds,
            ..
        })
    ));
}

#[test]
fn test_closed_session_rejects_everything() {
    let (mut session, port) = mock_session();
    assert!(session.is_open());
    session.close();
    assert!(!session.is_open());

    assert!(matches!(
        session.select_register(Register::RedLeds),
        Err(Error::SessionClosed)
    ));
    assert!(matches!(
        session.write_raw(Register::RedLeds, &[0; 4]),
        Err(Error::SessionClosed)
    ));
    assert!(matches!(
        session.read_register(Register::Switches),
        Err(Error::SessionClosed)
    ));
    assert!(port.calls().is_empty());
}

#[test]
fn test_double_close_is_noop() {
    let (mut session, _port) = mock_session();
    session.close();
    session.close();
    assert!(!session.is_open());
}

#[test]
fn test_command_codes_are_distinct() {
    let regs = [
        Register::RedLeds,
        Register::GreenLeds,
        Register::Switches,
        Register::Buttons,
        Register::SevenSegment,
    ];
    for (i, a) in regs.iter().enumerate() {
        for b in &regs[i + 1..] {
            assert_ne!(a.command(), b.command(), "{:?} vs {:?}", a, b);
        }
    }
}
