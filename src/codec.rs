//! Byte layouts of the board registers. Pure functions, no I/O.

use crate::consts::{segment, PAYLOAD_SIZE};
use crate::error::{digit_out_of_range, Error, Result};

/// One seven-segment digit position: a decimal digit or blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Decimal digit 0-9.
    Digit(u8),
    /// All segments dark.
    Off,
}

/// Looks up the 8-bit segment pattern for a digit position.
pub fn segment_pattern(seg: Segment) -> Result<u8> {
    match seg {
        Segment::Digit(d) => segment::DIGITS
            .get(d as usize)
            .copied()
            .ok_or_else(|| digit_out_of_range(d)),
        Segment::Off => Ok(segment::OFF),
    }
}

/// Reverse lookup of [`segment_pattern`]. Unknown patterns yield `None`.
pub fn decode_segment(pattern: u8) -> Option<Segment> {
    if pattern == segment::OFF {
        return Some(Segment::Off);
    }
    segment::DIGITS
        .iter()
        .position(|&p| p == pattern)
        .map(|d| Segment::Digit(d as u8))
}

/// Four packed segment patterns, byte 0 = least-significant digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWord(u32);

impl DisplayWord {
    /// A word with every digit blank.
    pub fn blank() -> Self {
        DisplayWord(u32::from_le_bytes([segment::OFF; PAYLOAD_SIZE]))
    }

    /// The packed 32-bit value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Wire form (little-endian).
    #[inline]
    pub fn to_bytes(&self) -> [u8; PAYLOAD_SIZE] {
        self.0.to_le_bytes()
    }

    /// Decodes each byte back through the segment table, least-significant digit first.
    pub fn digits(&self) -> [Option<Segment>; segment::DIGIT_COUNT] {
        self.to_bytes().map(decode_segment)
    }
}

/// Packs `value` into a [`DisplayWord`].
///
/// Digits are placed least-significant first; positions above the highest
/// digit are filled with the blank pattern, so `7` shows as `___7`.
/// Values outside `0..=9999` are rejected.
pub fn encode_digits(value: i64) -> Result<DisplayWord> {
    if !(0..=segment::MAX_VALUE).contains(&value) {
        return Err(Error::Encoding(format!(
            "display value {} out of range (0-{})",
            value,
            segment::MAX_VALUE
        )));
    }
    let mut bytes = [segment::OFF; PAYLOAD_SIZE];
    let mut rest = value;
    for slot in bytes.iter_mut() {
        *slot = segment_pattern(Segment::Digit((rest % 10) as u8))?;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    Ok(DisplayWord(u32::from_le_bytes(bytes)))
}

/// Bitmap with the low `width` bits set.
#[inline]
pub fn bank_mask(width: u32) -> u32 {
    if width >= u32::BITS {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

/// Encodes an LED bitmap (bit 0 = LED 0) for a bank `width` LEDs wide.
/// Bits at or above `width` are rejected rather than silently dropped.
pub fn encode_led_bank(bits: u32, width: u32) -> Result<[u8; PAYLOAD_SIZE]> {
    if bits & !bank_mask(width) != 0 {
        return Err(Error::Encoding(format!(
            "LED bitmap 0x{:08X} exceeds bank width of {} LEDs",
            bits, width
        )));
    }
    Ok(bits.to_le_bytes())
}

/// Little-endian interpretation of a register readback.
#[inline]
pub fn decode_bits(raw: [u8; PAYLOAD_SIZE]) -> u32 {
    u32::from_le_bytes(raw)
}
