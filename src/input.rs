//! Push-button and slide-switch readback.

use crate::codec::decode_bits;
use crate::consts::input;
use crate::error::Result;
use crate::session::{DeviceSession, Register, RegisterPort};
use log::trace;

/// Logical meaning of the button register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Start,
    Up,
    Down,
    Left,
    Right,
    /// Idle keys, or a combination with no meaning.
    None,
}

const BUTTON_TABLE: [(u32, Button); 5] = [
    (input::BUTTON_START, Button::Start),
    (input::BUTTON_UP, Button::Up),
    (input::BUTTON_DOWN, Button::Down),
    (input::BUTTON_LEFT, Button::Left),
    (input::BUTTON_RIGHT, Button::Right),
];

impl Button {
    /// Maps the full button readback to its logical value. Only exact table
    /// patterns are buttons; stray high bits make the reading `None`.
    pub fn from_bits(bits: u32) -> Self {
        BUTTON_TABLE
            .iter()
            .find(|(pattern, _)| *pattern == bits)
            .map_or(Button::None, |&(_, button)| button)
    }
}

/// Snapshot of the slide switches, bit n = SWn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchState(u32);

impl SwitchState {
    /// Wraps the raw readback unchanged.
    pub fn from_bits(bits: u32) -> Self {
        SwitchState(bits)
    }

    #[inline]
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Returns `None` for switch numbers the board does not have.
    pub fn is_on(&self, switch: u8) -> Option<bool> {
        if u32::from(switch) < input::SWITCH_COUNT {
            Some(self.0 & (1 << switch) != 0)
        } else {
            None
        }
    }

    /// Every switch up and nothing else set: the board is ready to start.
    pub fn all_on(&self) -> bool {
        self.0 == input::SWITCHES_ALL_ON
    }
}

/// Single-shot reads of the input registers. Polling is up to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputReader;

impl InputReader {
    pub fn new() -> Self {
        InputReader
    }

    pub fn read_button<P: RegisterPort>(&self, session: &mut DeviceSession<P>) -> Result<Button> {
        let bits = decode_bits(session.read_register(Register::Buttons)?);
        let button = Button::from_bits(bits);
        trace!("Buttons 0b{:04b} -> {:?}", bits, button);
        Ok(button)
    }

    pub fn read_switches<P: RegisterPort>(
        &self,
        session: &mut DeviceSession<P>,
    ) -> Result<SwitchState> {
        let bits = decode_bits(session.read_register(Register::Switches)?);
        let state = SwitchState::from_bits(bits);
        trace!("Switches 0b{:018b}", bits);
        Ok(state)
    }
}
