// BLE Keypad — Per-Key State Machine & Repeat Scheduler
//
// One `KeyState` per line. Fed the sampled level once per tick; returns at
// most one event per tick (a press or a repeat, never both).

use crate::config::Timing;
use crate::events::EventKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatPhase {
    #[default]
    Idle,
    AwaitingFirstRepeat,
    SteadyRepeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pressed: bool,
    phase: RepeatPhase,
    // Time of the last press or repeat event.
    last_event_ms: u32,
}

impl KeyState {
    pub const fn new() -> Self {
        Self {
            pressed: false,
            phase: RepeatPhase::Idle,
            last_event_ms: 0,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn phase(&self) -> RepeatPhase {
        self.phase
    }

    pub fn last_event_ms(&self) -> u32 {
        self.last_event_ms
    }

    /// Advance by one tick with the debounced sample `pressed` at `now`.
    pub fn update(&mut self, pressed: bool, now: u32, timing: &Timing) -> Option<EventKind> {
        if !pressed {
            // Release from any phase; emits nothing.
            self.pressed = false;
            self.phase = RepeatPhase::Idle;
            return None;
        }

        if !self.pressed {
            self.pressed = true;
            self.phase = RepeatPhase::AwaitingFirstRepeat;
            self.last_event_ms = now;
            return Some(EventKind::Press);
        }

        let kind = repeat_due(self.phase, self.last_event_ms, now, timing)?;
        self.last_event_ms = now;
        self.phase = RepeatPhase::SteadyRepeat;
        Some(kind)
    }
}

/// Decide whether a held key is due for a repeat.
///
/// The elapsed time is taken with wrapping subtraction so a rollover of the
/// millisecond counter never looks like a huge delay.
pub fn repeat_due(phase: RepeatPhase, last_event_ms: u32, now: u32, timing: &Timing) -> Option<EventKind> {
    let elapsed = now.wrapping_sub(last_event_ms);
    match phase {
        RepeatPhase::Idle => None,
        RepeatPhase::AwaitingFirstRepeat if elapsed >= timing.initial_repeat_ms => {
            Some(EventKind::FirstRepeat)
        }
        RepeatPhase::SteadyRepeat if elapsed >= timing.subsequent_repeat_ms => Some(EventKind::Repeat),
        _ => None,
    }
}
