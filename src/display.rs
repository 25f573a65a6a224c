//! Score output on the four-digit seven-segment display.

use crate::codec::{encode_digits, DisplayWord};
use crate::error::Result;
use crate::session::{DeviceSession, Register, RegisterPort};
use log::{debug, info};
use std::thread;
use std::time::Duration;

/// Writes values to the seven-segment display.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayWriter;

impl DisplayWriter {
    pub fn new() -> Self {
        DisplayWriter
    }

    fn write_word<P: RegisterPort>(
        &self,
        session: &mut DeviceSession<P>,
        word: DisplayWord,
    ) -> Result<usize> {
        session.write_register(Register::SevenSegment, &word.to_bytes())
    }

    /// Shows `value` (0-9999), blanking unused leading digits.
    /// Out-of-range values are rejected before the device is touched.
    pub fn show_score<P: RegisterPort>(
        &self,
        session: &mut DeviceSession<P>,
        value: i64,
    ) -> Result<()> {
        let word = encode_digits(value)?;
        let written = self.write_word(session, word)?;
        debug!(
            "Wrote {} bytes on seven segments (value {}, word 0x{:08X})",
            written,
            value,
            word.value()
        );
        Ok(())
    }

    /// Turns every digit off.
    pub fn blank<P: RegisterPort>(&self, session: &mut DeviceSession<P>) -> Result<()> {
        self.write_word(session, DisplayWord::blank())?;
        Ok(())
    }

    /// Counts down from `from` to 1, holding each value for `step_delay`.
    pub fn countdown<P: RegisterPort>(
        &self,
        session: &mut DeviceSession<P>,
        from: u16,
        step_delay: Duration,
    ) -> Result<()> {
        for n in (1..=from).rev() {
            info!("{}...", n);
            self.show_score(session, i64::from(n))?;
            thread::sleep(step_delay);
        }
        Ok(())
    }
}
