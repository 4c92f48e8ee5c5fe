// Scripted hardware doubles for the unit tests.

use std::cell::Cell;
use std::collections::HashMap;

use crate::config::Pin;
use crate::events::{Level, Polarity, Pull};
use crate::hal::{Clock, LineIo, PowerControl, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Input(Polarity),
    Output,
}

/// Pin levels set by the test; records every configuration and write.
#[derive(Default)]
pub struct MockLines {
    levels: HashMap<Pin, Level>,
    modes: HashMap<Pin, PinMode>,
    writes: Vec<(Pin, Level)>,
    reconfigurations: usize,
}

impl MockLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_level(&mut self, pin: Pin, level: Level) {
        self.levels.insert(pin, level);
    }

    pub fn mode(&self, pin: Pin) -> Option<PinMode> {
        self.modes.get(&pin).copied()
    }

    pub fn input_polarity(&self, pin: Pin) -> Option<Polarity> {
        match self.mode(pin) {
            Some(PinMode::Input(polarity)) => Some(polarity),
            _ => None,
        }
    }

    pub fn writes_to(&self, pin: Pin) -> Vec<Level> {
        self.writes
            .iter()
            .filter(|(p, _)| *p == pin)
            .map(|&(_, level)| level)
            .collect()
    }

    pub fn reconfigurations(&self) -> usize {
        self.reconfigurations
    }
}

impl LineIo for MockLines {
    fn configure_input(&mut self, pin: Pin, polarity: Polarity) -> anyhow::Result<()> {
        self.modes.insert(pin, PinMode::Input(polarity));
        // The pull resistor holds an untouched line at its released level.
        let idle = match polarity.active_level().holding_pull() {
            Pull::Down => Level::Low,
            Pull::Up => Level::High,
        };
        self.levels.entry(pin).or_insert(idle);
        self.reconfigurations += 1;
        Ok(())
    }

    fn configure_output(&mut self, pin: Pin) -> anyhow::Result<()> {
        self.modes.insert(pin, PinMode::Output);
        self.reconfigurations += 1;
        Ok(())
    }

    fn read_raw(&self, pin: Pin) -> Level {
        self.levels.get(&pin).copied().unwrap_or(Level::Low)
    }

    fn write_raw(&mut self, pin: Pin, level: Level) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.mode(pin) == Some(PinMode::Output),
            "GPIO{} written while not an output",
            pin
        );
        self.writes.push((pin, level));
        Ok(())
    }
}

/// Records every symbol sent while connected.
#[derive(Default)]
pub struct MockTransport {
    pub connected: bool,
    pub sent: Vec<char>,
}

impl MockTransport {
    pub fn connected() -> Self {
        Self {
            connected: true,
            sent: Vec::new(),
        }
    }
}

impl Transport for MockTransport {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn send_symbol(&mut self, symbol: char) -> anyhow::Result<()> {
        anyhow::ensure!(self.connected, "symbol {:?} sent while disconnected", symbol);
        self.sent.push(symbol);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockPower {
    pub armed: Vec<(Pin, Level)>,
}

impl PowerControl for MockPower {
    fn arm_wake_on_level(&mut self, pin: Pin, level: Level) -> anyhow::Result<()> {
        self.armed.push((pin, level));
        Ok(())
    }

    fn suspend_indefinitely(&mut self) -> ! {
        panic!("deep sleep entered");
    }
}

/// Time only moves when the code under test delays.
#[derive(Default)]
pub struct MockClock {
    now_ms: Cell<u32>,
    delays: Vec<u32>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delays(&self) -> &[u32] {
        &self.delays
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now_ms.get()
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
        self.now_ms.set(self.now_ms.get().wrapping_add(ms));
    }
}
