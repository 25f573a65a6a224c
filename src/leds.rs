//! Steady states and chase animations for the red and green LED banks.

use crate::codec::{bank_mask, encode_led_bank};
use crate::consts::leds;
use crate::error::Result;
use crate::session::{DeviceSession, Register, RegisterPort};
use log::{debug, info};
use std::thread;
use std::time::Duration;

/// One of the board's LED banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedBank {
    Red,
    Green,
}

impl LedBank {
    /// Number of LEDs in the bank.
    pub fn width(&self) -> u32 {
        match self {
            LedBank::Red => leds::RED_LED_COUNT,
            LedBank::Green => leds::GREEN_LED_COUNT,
        }
    }

    /// Bitmap with every LED of the bank lit.
    #[inline]
    pub fn all_on(&self) -> u32 {
        bank_mask(self.width())
    }

    pub fn register(&self) -> Register {
        match self {
            LedBank::Red => Register::RedLeds,
            LedBank::Green => Register::GreenLeds,
        }
    }
}

/// What a bank should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedMode {
    Off,
    On,
    /// All lit, then shift right one LED per frame.
    ForwardChase,
    /// All lit, then switch off one LED per frame from the top down.
    InverseChase,
}

/// Computes the frames of a chase animation without touching the device.
///
/// Both variants yield `width` frames starting from all-ones. The forward
/// chase shifts right each frame; the inverse chase clears the next bit
/// counting down from `width - 1`. Either way the last frame keeps bit 0 lit.
pub fn chase_frames(bank: LedBank, inverse: bool) -> Vec<u32> {
    let width = bank.width();
    let mut frame = bank.all_on();
    let mut frames = Vec::with_capacity(width as usize);
    for step in 0..width {
        frames.push(frame);
        if inverse {
            frame &= !(1u32 << (width - 1 - step));
        } else {
            frame >>= 1;
        }
    }
    frames
}

/// Drives the LED banks.
#[derive(Debug, Clone)]
pub struct LedSequencer {
    frame_delay: Duration,
}

impl Default for LedSequencer {
    fn default() -> Self {
        LedSequencer {
            frame_delay: leds::DEFAULT_FRAME_DELAY,
        }
    }
}

impl LedSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the pause after each chase frame.
    pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    fn write_frame<P: RegisterPort>(
        &self,
        session: &mut DeviceSession<P>,
        bank: LedBank,
        bits: u32,
    ) -> Result<()> {
        let payload = encode_led_bank(bits, bank.width())?;
        session.write_register(bank.register(), &payload)?;
        Ok(())
    }

    /// Lights every LED of `bank`, or switches them all off, in one transfer.
    pub fn set_steady<P: RegisterPort>(
        &self,
        session: &mut DeviceSession<P>,
        bank: LedBank,
        on: bool,
    ) -> Result<()> {
        let bits = if on { bank.all_on() } else { 0 };
        self.write_frame(session, bank, bits)?;
        info!("{:?} leds {}", bank, if on { "on" } else { "off" });
        Ok(())
    }

    /// Plays a chase animation on `bank`, blocking until the last frame.
    ///
    /// A failed write stops the animation and returns the error; frames
    /// already shown are not undone.
    pub fn run_chase<P: RegisterPort>(
        &self,
        session: &mut DeviceSession<P>,
        bank: LedBank,
        inverse: bool,
    ) -> Result<()> {
        let frames = chase_frames(bank, inverse);
        debug!(
            "{:?} chase (inverse={}): {} frames, {:?} apart",
            bank,
            inverse,
            frames.len(),
            self.frame_delay
        );
        for frame in frames {
            self.write_frame(session, bank, frame)?;
            if !self.frame_delay.is_zero() {
                thread::sleep(self.frame_delay);
            }
        }
        info!(
            "{:?} leds {}sequence done",
            bank,
            if inverse { "inverse " } else { "" }
        );
        Ok(())
    }

    /// Puts `bank` into `mode`.
    pub fn apply<P: RegisterPort>(
        &self,
        session: &mut DeviceSession<P>,
        bank: LedBank,
        mode: LedMode,
    ) -> Result<()> {
        match mode {
            LedMode::Off => self.set_steady(session, bank, false),
            LedMode::On => self.set_steady(session, bank, true),
            LedMode::ForwardChase => self.run_chase(session, bank, false),
            LedMode::InverseChase => self.run_chase(session, bank, true),
        }
    }

    /// Switches both banks off, red first.
    pub fn all_off<P: RegisterPort>(&self, session: &mut DeviceSession<P>) -> Result<()> {
        self.set_steady(session, LedBank::Red, false)?;
        self.set_steady(session, LedBank::Green, false)
    }
}
