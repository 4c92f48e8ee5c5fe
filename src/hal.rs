// BLE Keypad — Hardware Boundary
//
// The scanning core only talks to the outside world through these traits.
// The firmware binary implements them over ESP-IDF; the unit tests implement
// them with scripted doubles.

use crate::config::Pin;
use crate::events::{Level, Polarity};

/// Host link that receives emitted key symbols (BLE HID on the device).
pub trait Transport {
    fn is_connected(&self) -> bool;

    /// Type one symbol on the host. Only called while connected.
    fn send_symbol(&mut self, symbol: char) -> anyhow::Result<()>;
}

/// Digital line sampling and driving.
pub trait LineIo {
    /// Configure as input, with the pull resistor implied by `polarity`.
    fn configure_input(&mut self, pin: Pin, polarity: Polarity) -> anyhow::Result<()>;
    fn configure_output(&mut self, pin: Pin) -> anyhow::Result<()>;
    fn read_raw(&self, pin: Pin) -> Level;
    fn write_raw(&mut self, pin: Pin, level: Level) -> anyhow::Result<()>;
}

pub trait PowerControl {
    /// Wake from deep sleep when `pin` reaches `level`.
    fn arm_wake_on_level(&mut self, pin: Pin, level: Level) -> anyhow::Result<()>;

    /// Enter deep sleep. Execution resumes from program entry on wake.
    fn suspend_indefinitely(&mut self) -> !;
}

/// Millisecond tick counter. Wraps; compare with `wrapping_sub`.
pub trait Clock {
    fn now_ms(&self) -> u32;
    fn delay_ms(&mut self, ms: u32);
}
