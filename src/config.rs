// BLE Keypad — Hardware & System Configuration
// Target: ESP32 DevKit (Xtensa), 21 direct-wired keys

use crate::events::Polarity::{self, ActiveLow};
use crate::events::Role;

/// GPIO number of a key line.
pub type Pin = u8;

// ---------------------------------------------------------------------------
// Line description (fixed at start, never reconfigured)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineConfig {
    pub pin: Pin,
    pub polarity: Polarity,
    pub symbol: char,
    pub role: Role,
}

impl LineConfig {
    pub const fn key(pin: Pin, polarity: Polarity, symbol: char) -> Self {
        Self {
            pin,
            polarity,
            symbol,
            role: Role::StandardKey,
        }
    }

    /// The shared indicator line is always read active-high.
    pub const fn indicator(pin: Pin, symbol: char) -> Self {
        Self {
            pin,
            polarity: Polarity::ActiveHigh,
            symbol,
            role: Role::SharedIndicator,
        }
    }
}

// ---------------------------------------------------------------------------
// Keymap in GPIO order D13, D12, D14, D27, D26, D25, D33, D32, D15, D2, RX2,
// TX2, D5, D18, D19, D21, RX0, TX0, D22, D23, D4
// ---------------------------------------------------------------------------
pub const KEY_COUNT: usize = 21;
pub const INDICATOR_INDEX: usize = 9; // D2, the on-board LED

pub const KEYMAP: [LineConfig; KEY_COUNT] = [
    LineConfig::key(13, ActiveLow, 'a'),
    LineConfig::key(12, ActiveLow, 'b'),
    LineConfig::key(14, ActiveLow, 'c'),
    LineConfig::key(27, ActiveLow, 'd'),
    LineConfig::key(26, ActiveLow, 'e'),
    LineConfig::key(25, ActiveLow, 'f'),
    LineConfig::key(33, ActiveLow, 'g'),
    LineConfig::key(32, ActiveLow, 'h'),
    LineConfig::key(15, ActiveLow, 'i'),
    LineConfig::indicator(2, 'j'),
    LineConfig::key(16, ActiveLow, 'k'),
    LineConfig::key(17, ActiveLow, 'l'),
    LineConfig::key(5, ActiveLow, 'm'),
    LineConfig::key(18, ActiveLow, 'n'),
    LineConfig::key(19, ActiveLow, 'o'),
    LineConfig::key(21, ActiveLow, 'p'),
    // UART0 RX/TX: the serial console loses these once they become inputs.
    LineConfig::key(3, ActiveLow, 'q'),
    LineConfig::key(1, ActiveLow, 'r'),
    LineConfig::key(22, ActiveLow, 's'),
    LineConfig::key(23, ActiveLow, 't'),
    LineConfig::key(4, ActiveLow, 'u'),
];

// ---------------------------------------------------------------------------
// Timing (milliseconds)
// ---------------------------------------------------------------------------
pub const INITIAL_REPEAT_DELAY_MS: u32 = 300;       // press → first auto-repeat
pub const SUBSEQUENT_REPEAT_DELAY_MS: u32 = 50;     // steady auto-repeat interval
pub const DISCONNECT_SLEEP_TIMEOUT_MS: u32 = 10_000; // 10 s without a host → sleep
pub const BLINK_HALF_PERIOD_MS: u32 = 250;          // 500 ms blink period
pub const POST_PRESS_DELAY_MS: u32 = 300;           // tick delay after a fresh press
pub const IDLE_DELAY_MS: u32 = 50;                  // tick delay otherwise

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub initial_repeat_ms: u32,
    pub subsequent_repeat_ms: u32,
    pub disconnect_sleep_ms: u32,
    pub blink_half_period_ms: u32,
    pub post_press_delay_ms: u32,
    pub idle_delay_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            initial_repeat_ms: INITIAL_REPEAT_DELAY_MS,
            subsequent_repeat_ms: SUBSEQUENT_REPEAT_DELAY_MS,
            disconnect_sleep_ms: DISCONNECT_SLEEP_TIMEOUT_MS,
            blink_half_period_ms: BLINK_HALF_PERIOD_MS,
            post_press_delay_ms: POST_PRESS_DELAY_MS,
            idle_delay_ms: IDLE_DELAY_MS,
        }
    }
}

// ---------------------------------------------------------------------------
// BLE identity
// ---------------------------------------------------------------------------
pub const BLE_DEVICE_NAME: &str = "ESP32 BLE Keyboard";
pub const BLE_MANUFACTURER: &str = "MyCompany";
pub const BLE_BATTERY_LEVEL: u8 = 100;
