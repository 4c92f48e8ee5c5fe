// BLE Keypad — Connection-Linked Indicator & Sleep Policy
//
// Owns the connection bookkeeping and the mode of the shared indicator line:
//   - connected    → the line is a key input (active-high)
//   - disconnected → the line is an output blinking at 2 Hz
// and decides when a long disconnect should put the device to deep sleep.

use crate::config::Timing;
use crate::events::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectionState {
    pub connected: bool,
    /// Set iff disconnected, to the first tick the disconnect was seen.
    pub disconnected_since: Option<u32>,
}

/// What the scanner must do with the indicator line this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyStep {
    /// Scan the line as a key. `reconfigure` is set on the tick the line
    /// comes back from blinking.
    KeyInput { reconfigure: bool },
    /// Drive the line to `level` and skip it in key processing.
    Blink { level: Level, reconfigure: bool },
    /// Disconnected for too long; arm wake-up and sleep.
    Suspend,
}

pub struct IndicatorPolicy {
    state: ConnectionState,
    mode: LineMode,
    timing: Timing,
}

impl IndicatorPolicy {
    /// Starts with the line configured as an input, as done at boot.
    pub fn new(timing: Timing) -> Self {
        Self {
            state: ConnectionState::default(),
            mode: LineMode::Input,
            timing,
        }
    }

    pub fn mode(&self) -> LineMode {
        self.mode
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn step(&mut self, connected: bool, now: u32) -> PolicyStep {
        if connected != self.state.connected {
            if connected {
                log::info!("Host connected");
            } else {
                log::info!("Host disconnected, blinking indicator");
            }
        }
        self.state.connected = connected;

        if connected {
            self.state.disconnected_since = None;
            let reconfigure = self.switch_to(LineMode::Input);
            return PolicyStep::KeyInput { reconfigure };
        }

        match self.state.disconnected_since {
            None => self.state.disconnected_since = Some(now),
            Some(since) if now.wrapping_sub(since) > self.timing.disconnect_sleep_ms => {
                return PolicyStep::Suspend;
            }
            Some(_) => {}
        }

        let reconfigure = self.switch_to(LineMode::Output);
        PolicyStep::Blink {
            level: blink_level(now, self.timing.blink_half_period_ms),
            reconfigure,
        }
    }

    // Returns true when the mode actually changed.
    fn switch_to(&mut self, mode: LineMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }
}

/// Square wave derived from the clock: high for the even half-periods.
pub fn blink_level(now: u32, half_period_ms: u32) -> Level {
    if (now / half_period_ms) % 2 == 0 {
        Level::High
    } else {
        Level::Low
    }
}
