// BLE Keypad — Line Reader
//
// Turns raw pin levels into logical pressed/released using each line's
// polarity. There is no debounce filter here: the scanner samples once per
// tick, so the tick delay is the debounce window.

use crate::config::LineConfig;
use crate::hal::LineIo;

/// Sample one line. `true` means pressed.
pub fn sample<L: LineIo>(io: &L, line: &LineConfig) -> bool {
    line.polarity.is_active(io.read_raw(line.pin))
}

/// Configure every line as an input. Run once at start.
pub fn configure_all<L: LineIo>(io: &mut L, lines: &[LineConfig]) -> anyhow::Result<()> {
    for line in lines {
        io.configure_input(line.pin, line.polarity)?;
    }
    log::info!("{} key lines configured as inputs", lines.len());
    Ok(())
}
