//! # board-io
//!
//! A Rust crate for driving the on-board peripherals of an FPGA development
//! board (red and green LED banks, push-buttons, slide switches and the
//! seven-segment display) through the register character device exposed by
//! its kernel driver.
//!
//! ## Protocol
//!
//! The device has no addressing in its data path. Each access is two calls:
//!
//! 1.  an `ioctl` whose command code selects one of five registers, then
//! 2.  a `write` or `read` of exactly 4 bytes, little-endian.
//!
//! [`DeviceSession::write_register`] and [`DeviceSession::read_register`]
//! perform both steps together. The raw primitives
//! ([`select_register`](DeviceSession::select_register),
//! [`write_raw`](DeviceSession::write_raw), [`read_raw`](DeviceSession::read_raw))
//! are available for callers that need them, but then pairing is up to you.
//!
//! ## Features
//!
//! *   Session management (`DeviceSession::open`, `open_default`, `from_port`, `close`).
//! *   LED banks (`LedSequencer`):
//!     *   Steady on/off (`set_steady`, `all_off`).
//!     *   Blocking chase animations, forward and inverse (`run_chase`).
//! *   Seven-segment display (`DisplayWriter`):
//!     *   Scores 0-9999 with blank leading digits (`show_score`).
//!     *   Countdown and blanking (`countdown`, `blank`).
//! *   Inputs (`InputReader`):
//!     *   Logical button decoding (`read_button` -> `Button::Start`, `Up`, ...).
//!     *   Switch snapshots with an "all on" ready check (`read_switches`).
//! *   Pure register codecs in [`codec`] for testing without hardware.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use board_io::{Button, DeviceSession, DisplayWriter, InputReader, LedBank, LedSequencer, Result};
//!
//! fn main() -> Result<()> {
//!     // Optional: Initialize logging
//!     // env_logger::init();
//!
//!     let mut session = DeviceSession::open_default()?;
//!     let leds = LedSequencer::new();
//!     let display = DisplayWriter::new();
//!     let input = InputReader::new();
//!
//!     display.show_score(&mut session, 42)?;
//!     leds.run_chase(&mut session, LedBank::Red, false)?;
//!
//!     if input.read_button(&mut session)? == Button::Start {
//!         leds.set_steady(&mut session, LedBank::Green, true)?;
//!     }
//!
//!     session.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! Everything is synchronous and blocking. A chase animation sleeps on the
//! calling thread between frames and cannot be cancelled. Keep a single
//! session per board; every operation borrows it mutably, so a select can
//! never be separated from its transfer by another component.
//!
//! ## Hardware Setup Notes
//!
//! *   The kernel module must be loaded and expose `/dev/mydev`
//!     ([`consts::DEFAULT_DEVICE_PATH`]). Use [`DeviceSession::open`] for another path.
//! *   The device node needs read/write permission for your user (udev rule or `chmod`).
//! *   Seven-segment patterns and keys are active-low on this board.
//!
//! ## License
//!
//! This project is licensed under the WTFPL.

pub mod codec;
pub mod consts;
mod display;
mod error;
mod input;
mod leds;
mod session;

pub use codec::{DisplayWord, Segment};
pub use display::DisplayWriter;
pub use error::{Error, Result};
pub use input::{Button, InputReader, SwitchState};
pub use leds::{chase_frames, LedBank, LedMode, LedSequencer};
pub use session::{Access, CharDevice, DeviceSession, Register, RegisterPort};
