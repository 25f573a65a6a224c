//! Board constants: device path, register command codes, bank widths and lookup tables.

/// Character device exposed by the board's kernel driver.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/mydev";

/// Every register transfer carries exactly this many bytes.
pub const PAYLOAD_SIZE: usize = 4;

// --- Register Select Command Codes ---
// Linux _IO('a', n): (type << 8) | nr, no argument.
pub mod cmd {
    pub const RD_SWITCHES: u32 = 0x6161;
    pub const RD_PBUTTONS: u32 = 0x6162;
    pub const WR_L_DISPLAY: u32 = 0x6163;
    pub const WR_RED_LEDS: u32 = 0x6165;
    pub const WR_GREEN_LEDS: u32 = 0x6166;
}

// --- LED Banks ---
pub mod leds {
    use std::time::Duration;

    /// LEDR0-LEDR17.
    pub const RED_LED_COUNT: u32 = 18;
    /// LEDG0-LEDG8.
    pub const GREEN_LED_COUNT: u32 = 9;
    /// Delay after each transmitted chase frame.
    pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);
}

// --- Seven-Segment Display ---
pub mod segment {
    /// Number of digits driven by one display register.
    pub const DIGIT_COUNT: usize = 4;
    /// Largest value that fits in `DIGIT_COUNT` decimal digits.
    pub const MAX_VALUE: i64 = 9999;

    // Segments are active-low: a cleared bit lights the segment.
    pub const DIGITS: [u8; 10] = [
        0b1100_0000, // 0
        0b1111_1001, // 1
        0b1010_0100, // 2
        0b1011_0000, // 3
        0b1001_1001, // 4
        0b1001_0010, // 5
        0b1000_0010, // 6
        0b1111_1000, // 7
        0b1000_0000, // 8
        0b1001_0000, // 9
    ];
    pub const OFF: u8 = 0b1111_1111;
}

// --- Inputs ---
pub mod input {
    // KEY0-KEY3, read low while pressed. Idle reads 0b1111.
    pub const BUTTON_RIGHT: u32 = 0b1110;
    pub const BUTTON_DOWN: u32 = 0b1101;
    pub const BUTTON_UP: u32 = 0b1011;
    pub const BUTTON_LEFT: u32 = 0b0111;
    /// KEY0 and KEY3 held together.
    pub const BUTTON_START: u32 = 0b0110;

    /// SW0-SW17.
    pub const SWITCH_COUNT: u32 = 18;
    /// Every switch up: the "ready to start" pattern.
    pub const SWITCHES_ALL_ON: u32 = (1 << SWITCH_COUNT) - 1;
}
