//! Recording mock port shared by the integration tests.
#![allow(dead_code)]

use board_io::{DeviceSession, RegisterPort};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Select(u32),
    Write(Vec<u8>),
    Read,
}

#[derive(Debug, Default)]
pub struct MockState {
    pub calls: Vec<Call>,
    /// Payloads returned by successive reads. Empty queue reads as zeros.
    pub reads: VecDeque<[u8; 4]>,
    pub reject_select: bool,
    /// Fail the write with this 0-based index.
    pub fail_write_at: Option<usize>,
    /// Report this many bytes accepted instead of the full payload.
    pub short_write: Option<usize>,
    pub short_read: Option<usize>,
    /// Fail every read with a device error.
    pub fail_read: bool,
    writes_seen: usize,
}

impl MockState {
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Write(bytes) => Some(bytes.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn written_words(&self) -> Vec<u32> {
        self.writes()
            .iter()
            .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockPort {
    pub state: Rc<RefCell<MockState>>,
}

impl MockPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_read(&self, raw: [u8; 4]) {
        self.state.borrow_mut().reads.push_back(raw);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }
}

impl RegisterPort for MockPort {
    fn select(&mut self, command: u32) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Select(command));
        if state.reject_select {
            return Err(io::Error::from_raw_os_error(25)); // ENOTTY
        }
        Ok(())
    }

    fn write(&mut self, payload: &[u8]) -> io::Result<usize> {
        let mut state = self.state.borrow_mut();
        let index = state.writes_seen;
        state.writes_seen += 1;
        if state.fail_write_at == Some(index) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "device gone"));
        }
        state.calls.push(Call::Write(payload.to_vec()));
        Ok(state.short_write.unwrap_or(payload.len()))
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Read);
        if state.fail_read {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "device gone"));
        }
        let raw = state.reads.pop_front().unwrap_or([0; 4]);
        buf[..4].copy_from_slice(&raw);
        Ok(state.short_read.unwrap_or(4))
    }
}

/// A session over a fresh mock, plus a handle to inspect what it recorded.
pub fn mock_session() -> (DeviceSession<MockPort>, MockPort) {
    let port = MockPort::new();
    (DeviceSession::from_port(port.clone()), port)
}

/// Every transfer must directly follow a select; returns the pairs in order.
pub fn assert_select_before_transfer(calls: &[Call]) -> Vec<(u32, Call)> {
    assert_eq!(calls.len() % 2, 0, "unpaired call in {:?}", calls);
    calls
        .chunks(2)
        .map(|pair| match (&pair[0], &pair[1]) {
            (Call::Select(cmd), transfer @ (Call::Write(_) | Call::Read)) => {
                (*cmd, transfer.clone())
            }
            other => panic!("expected select then transfer, got {:?}", other),
        })
        .collect()
}
