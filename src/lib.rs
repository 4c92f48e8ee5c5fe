// BLE Keypad — Scanning Core
//
// Hardware-independent part of the firmware: per-key auto-repeat state
// machines, the connection-linked indicator/sleep policy and the tick loop
// that drives them. The ESP32 drivers live with the binary (`src/main.rs`).

pub mod config;
pub mod events;
pub mod hal;
pub mod hid;
pub mod input;
pub mod keys;
pub mod power;
pub mod scanner;

#[cfg(test)]
mod testing;

pub use config::{LineConfig, Timing};
pub use events::{EventKind, KeyEvent, Level, Polarity, Pull, Role};
pub use hal::{Clock, LineIo, PowerControl, Transport};
pub use scanner::{Scanner, Tick};
