//! Startup sequence: wait for START, count down, run the LED show, then wait
//! until every switch is up and reset the board.

use board_io::{
    Button, DeviceSession, DisplayWriter, InputReader, LedBank, LedSequencer, Result,
};
use std::{thread, time::Duration};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| board_io::consts::DEFAULT_DEVICE_PATH.to_string());
    let mut session = DeviceSession::open(&path)?;
    println!("Device {} opened.", path);

    let leds = LedSequencer::new();
    let display = DisplayWriter::new();
    let input = InputReader::new();

    println!("\nPress START for the show to begin :)\n");
    while input.read_button(&mut session)? != Button::Start {
        thread::sleep(POLL_INTERVAL);
    }

    println!("Getting ready...");
    display.countdown(&mut session, 3, Duration::from_secs(1))?;
    display.blank(&mut session)?;
    println!("Starting!");

    leds.set_steady(&mut session, LedBank::Red, true)?;
    leds.set_steady(&mut session, LedBank::Green, true)?;

    leds.all_off(&mut session)?;

    leds.run_chase(&mut session, LedBank::Red, false)?;
    leds.run_chase(&mut session, LedBank::Green, false)?;

    leds.run_chase(&mut session, LedBank::Green, true)?;
    leds.run_chase(&mut session, LedBank::Red, true)?;

    println!("\nTurn on every switch to start the game!\n");
    while !input.read_switches(&mut session)?.all_on() {
        thread::sleep(POLL_INTERVAL);
    }

    // Reset
    leds.all_off(&mut session)?;
    println!("Switches: {:?}", input.read_switches(&mut session)?);
    println!("Button: {:?}", input.read_button(&mut session)?);
    session.close();
    println!("\nDevice closed.\n");
    Ok(())
}
