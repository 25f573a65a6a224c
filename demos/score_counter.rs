use board_io::{Button, DeviceSession, DisplayWriter, InputReader, Result};
use std::{thread, time::Duration};

// UP adds a point, DOWN removes one, START exits.
fn main() -> Result<()> {
    env_logger::init();
    let mut session = DeviceSession::open_default()?;
    let display = DisplayWriter::new();
    let input = InputReader::new();

    let mut score: i64 = 0;
    display.show_score(&mut session, score)?;
    println!("UP/DOWN to change the score, START to quit.");

    let mut last = Button::None;
    loop {
        let button = input.read_button(&mut session)?;
        if button != last {
            match button {
                Button::Up if score < board_io::consts::segment::MAX_VALUE => score += 1,
                Button::Down if score > 0 => score -= 1,
                Button::Start => break,
                _ => {}
            }
            display.show_score(&mut session, score)?;
            last = button;
        }
        thread::sleep(Duration::from_millis(20));
    }

    display.blank(&mut session)?;
    session.close();
    Ok(())
}
