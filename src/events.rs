// BLE Keypad — Line & Key Event Types

// ---------------------------------------------------------------------------
// Electrical levels
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// The pull resistor that holds an idle line away from this level.
    pub fn holding_pull(self) -> Pull {
        match self {
            Self::High => Pull::Down,
            Self::Low => Pull::Up,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    Up,
    Down,
}

/// Which raw level means "pressed" for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// The raw level that reads as pressed. Also used as the deep-sleep
    /// wake level for the indicator line.
    pub fn active_level(self) -> Level {
        match self {
            Self::ActiveHigh => Level::High,
            Self::ActiveLow => Level::Low,
        }
    }

    pub fn is_active(self, raw: Level) -> bool {
        raw == self.active_level()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    StandardKey,
    /// Key input while connected, status blinker while disconnected.
    SharedIndicator,
}

// ---------------------------------------------------------------------------
// Key events emitted by the key state machine
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Fresh press edge.
    Press,
    /// First auto-repeat, after the long initial delay.
    FirstRepeat,
    /// Steady auto-repeat.
    Repeat,
}

impl EventKind {
    /// Label used in the serial log.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Press => "pressed",
            Self::FirstRepeat => "auto-repeat (first)",
            Self::Repeat => "auto-repeat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub index: usize,
    pub symbol: char,
    pub kind: EventKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_maps_raw_level_to_pressed() {
        assert!(Polarity::ActiveHigh.is_active(Level::High));
        assert!(!Polarity::ActiveHigh.is_active(Level::Low));
        assert!(Polarity::ActiveLow.is_active(Level::Low));
        assert!(!Polarity::ActiveLow.is_active(Level::High));
    }

    #[test]
    fn idle_pull_opposes_the_active_level() {
        assert_eq!(Polarity::ActiveLow.active_level().holding_pull(), Pull::Up);
        assert_eq!(Polarity::ActiveHigh.active_level().holding_pull(), Pull::Down);
    }

    #[test]
    fn labels_match_log_format() {
        assert_eq!(EventKind::Press.label(), "pressed");
        assert_eq!(EventKind::FirstRepeat.label(), "auto-repeat (first)");
        assert_eq!(EventKind::Repeat.label(), "auto-repeat");
    }
}
