//! Exclusive session on the board's register device.
//!
//! Every transfer is a two-step exchange: an out-of-band control call selects
//! the register, then exactly [`PAYLOAD_SIZE`] bytes are written or read.
//! [`DeviceSession::write_register`] and [`DeviceSession::read_register`] bundle
//! both steps so nothing can be interleaved between them.

use crate::consts::{cmd, PAYLOAD_SIZE};
use crate::error::{Error, Result};
use log::{debug, trace, warn};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Transfer direction supported by a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// The five logical registers of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    RedLeds,
    GreenLeds,
    Switches,
    Buttons,
    SevenSegment,
}

impl Register {
    /// Opaque command code passed to the select call.
    pub fn command(&self) -> u32 {
        match self {
            Register::RedLeds => cmd::WR_RED_LEDS,
            Register::GreenLeds => cmd::WR_GREEN_LEDS,
            Register::Switches => cmd::RD_SWITCHES,
            Register::Buttons => cmd::RD_PBUTTONS,
            Register::SevenSegment => cmd::WR_L_DISPLAY,
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Register::Switches | Register::Buttons => Access::Read,
            Register::RedLeds | Register::GreenLeds | Register::SevenSegment => Access::Write,
        }
    }

    #[inline]
    fn check_access(self, wanted: Access) -> Result<()> {
        if self.access() == wanted {
            Ok(())
        } else {
            Err(Error::InvalidAccess { register: self })
        }
    }
}

/// Low-level access to the register device.
///
/// Implemented by [`CharDevice`] for the real board. Tests and simulators can
/// provide their own port and wrap it with [`DeviceSession::from_port`].
pub trait RegisterPort {
    /// Issues the register select control call.
    fn select(&mut self, command: u32) -> io::Result<()>;
    /// Writes one payload, returning the number of bytes accepted.
    fn write(&mut self, payload: &[u8]) -> io::Result<usize>;
    /// Reads one payload, returning the number of bytes received.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// The board's character device, opened read/write.
#[derive(Debug)]
pub struct CharDevice {
    file: File,
}

impl CharDevice {
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Ok(CharDevice { file })
    }
}

impl RegisterPort for CharDevice {
    #[cfg(unix)]
    fn select(&mut self, command: u32) -> io::Result<()> {
        use std::os::unix::io::AsRawFd;
        // SAFETY: the descriptor is owned by `self.file` and stays open for the
        // duration of the call; the select commands take no argument.
        let rc = unsafe { libc::ioctl(self.file.as_raw_fd(), command as _) };
        if rc < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(())
        }
    }

    #[cfg(not(unix))]
    fn select(&mut self, _command: u32) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "register select requires ioctl (unix only)",
        ))
    }

    fn write(&mut self, payload: &[u8]) -> io::Result<usize> {
        self.file.write(payload)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

/// An open session on the board.
///
/// Exactly one session should be live per board. All operations take
/// `&mut self`, so callers sharing the session are serialized by the borrow
/// checker. After [`close`](Self::close) every operation fails with
/// [`Error::SessionClosed`].
#[derive(Debug)]
pub struct DeviceSession<P: RegisterPort = CharDevice> {
    port: Option<P>,
}

impl DeviceSession<CharDevice> {
    /// Opens the register device at `path` for reading and writing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let device = CharDevice::open(path).map_err(|source| Error::DeviceUnavailable {
            path: PathBuf::from(path),
            source,
        })?;
        debug!("Opened board device {}", path.display());
        Ok(Self::from_port(device))
    }

    /// Opens [`DEFAULT_DEVICE_PATH`](crate::consts::DEFAULT_DEVICE_PATH).
    pub fn open_default() -> Result<Self> {
        Self::open(crate::consts::DEFAULT_DEVICE_PATH)
    }
}

impl<P: RegisterPort> DeviceSession<P> {
    /// Wraps an already opened port.
    pub fn from_port(port: P) -> Self {
        DeviceSession { port: Some(port) }
    }

    pub fn is_open(&self) -> bool {
        self.port.is_some()
    }

    /// Releases the device handle. Closing twice is a no-op.
    pub fn close(&mut self) {
        if self.port.take().is_some() {
            debug!("Closed board device session");
        }
    }

    fn port_mut(&mut self) -> Result<&mut P> {
        self.port.as_mut().ok_or(Error::SessionClosed)
    }

    // --- Raw Primitives ---
    // The caller must pair each transfer with a select of the same register.

    /// Issues the select control call for `register`.
    pub fn select_register(&mut self, register: Register) -> Result<()> {
        let port = self.port_mut()?;
        trace!(
            "Selecting register {:?} (cmd 0x{:04X})",
            register,
            register.command()
        );
        port.select(register.command())
            .map_err(|source| Error::RegisterSelect { register, source })
    }

    /// Writes `payload` to the selected register. `register` must be the one
    /// just selected; it is checked for write access and used in errors.
    pub fn write_raw(
        &mut self,
        register: Register,
        payload: &[u8; PAYLOAD_SIZE],
    ) -> Result<usize> {
        register.check_access(Access::Write)?;
        let port = self.port_mut()?;
        trace!("Writing {:?}: {:02X?}", register, payload);
        let written = port
            .write(payload)
            .map_err(|source| Error::IoWrite { register, source })?;
        if written != PAYLOAD_SIZE {
            warn!(
                "Short write to {:?}: {} bytes (expected {})",
                register, written, PAYLOAD_SIZE
            );
            return Err(Error::ShortWrite { register, written });
        }
        Ok(written)
    }

    /// Reads one payload from the selected register.
    pub fn read_raw(&mut self, register: Register) -> Result<[u8; PAYLOAD_SIZE]> {
        register.check_access(Access::Read)?;
        let port = self.port_mut()?;
        let mut buf = [0u8; PAYLOAD_SIZE];
        let read = port
            .read(&mut buf)
            .map_err(|source| Error::IoRead { register, source })?;
        if read != PAYLOAD_SIZE {
            warn!(
                "Short read from {:?}: {} bytes (expected {})",
                register, read, PAYLOAD_SIZE
            );
            return Err(Error::ShortRead { register, read });
        }
        trace!("Read {:?}: {:02X?}", register, buf);
        Ok(buf)
    }

    // --- Register Transfers ---

    /// Selects `register` and writes `payload` to it as one unit.
    pub fn write_register(
        &mut self,
        register: Register,
        payload: &[u8; PAYLOAD_SIZE],
    ) -> Result<usize> {
        register.check_access(Access::Write)?;
        self.select_register(register)?;
        self.write_raw(register, payload)
    }

    /// Selects `register` and reads its payload as one unit.
    pub fn read_register(&mut self, register: Register) -> Result<[u8; PAYLOAD_SIZE]> {
        register.check_access(Access::Read)?;
        self.select_register(register)?;
        self.read_raw(register)
    }
}
