// BLE Keypad — Main Loop Orchestrator
//
// One tick:
//   1. Read the connection status.
//   2. Let the indicator policy pick the shared line's mode (or sleep).
//   3. Run the key state machine on every line not currently blinking.
//   4. Report the delay before the next tick: long after a fresh press,
//      short otherwise. The delay doubles as the debounce window.

use crate::config::{LineConfig, Timing};
use crate::events::{EventKind, KeyEvent, Polarity, Role};
use crate::hal::{Clock, LineIo, PowerControl, Transport};
use crate::input;
use crate::keys::KeyState;
use crate::power::{ConnectionState, IndicatorPolicy, LineMode, PolicyStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue { delay_ms: u32 },
    /// Terminal: wake is armed and the device must enter deep sleep.
    Suspended,
}

pub struct Scanner<const N: usize> {
    lines: [LineConfig; N],
    keys: [KeyState; N],
    indicator: usize,
    policy: IndicatorPolicy,
    timing: Timing,
    suspended: bool,
}

impl<const N: usize> Scanner<N> {
    pub fn new(lines: [LineConfig; N], timing: Timing) -> anyhow::Result<Self> {
        anyhow::ensure!(N > 0, "keymap has no lines");

        let mut indicators = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.role == Role::SharedIndicator)
            .map(|(index, _)| index);
        let indicator = indicators
            .next()
            .ok_or_else(|| anyhow::anyhow!("keymap has no shared indicator line"))?;
        anyhow::ensure!(
            indicators.next().is_none(),
            "keymap has more than one shared indicator line"
        );
        anyhow::ensure!(
            lines[indicator].polarity == Polarity::ActiveHigh,
            "shared indicator line GPIO{} must be active-high",
            lines[indicator].pin
        );
        anyhow::ensure!(
            timing.blink_half_period_ms > 0,
            "blink half-period must be at least 1 ms"
        );

        Ok(Self {
            lines,
            keys: [KeyState::new(); N],
            indicator,
            policy: IndicatorPolicy::new(timing),
            timing,
            suspended: false,
        })
    }

    /// Configure all lines as inputs. Call once before the first tick.
    pub fn init<L: LineIo>(&self, io: &mut L) -> anyhow::Result<()> {
        input::configure_all(io, &self.lines)
    }

    pub fn key(&self, index: usize) -> &KeyState {
        &self.keys[index]
    }

    pub fn indicator_mode(&self) -> LineMode {
        self.policy.mode()
    }

    pub fn connection(&self) -> ConnectionState {
        self.policy.state()
    }

    pub fn tick<L, T, P>(&mut self, now: u32, io: &mut L, transport: &mut T, power: &mut P) -> Tick
    where
        L: LineIo,
        T: Transport,
        P: PowerControl,
    {
        if self.suspended {
            return Tick::Suspended;
        }

        let connected = transport.is_connected();
        let shared = self.lines[self.indicator];

        match self.policy.step(connected, now) {
            PolicyStep::Suspend => {
                log::info!(
                    "Host not connected for {} ms, entering deep sleep (wake on GPIO{})",
                    self.timing.disconnect_sleep_ms,
                    shared.pin
                );
                if let Err(e) = power.arm_wake_on_level(shared.pin, shared.polarity.active_level()) {
                    log::error!("Failed to arm wake-up on GPIO{}: {}", shared.pin, e);
                }
                self.suspended = true;
                return Tick::Suspended;
            }
            PolicyStep::Blink { level, reconfigure } => {
                if reconfigure {
                    if let Err(e) = io.configure_output(shared.pin) {
                        log::warn!("GPIO{} output config failed: {}", shared.pin, e);
                    }
                }
                if let Err(e) = io.write_raw(shared.pin, level) {
                    log::warn!("GPIO{} blink write failed: {}", shared.pin, e);
                }
            }
            PolicyStep::KeyInput { reconfigure: true } => {
                if let Err(e) = io.configure_input(shared.pin, Polarity::ActiveHigh) {
                    log::warn!("GPIO{} input config failed: {}", shared.pin, e);
                }
            }
            PolicyStep::KeyInput { reconfigure: false } => {}
        }

        let mut new_press = false;
        for index in 0..N {
            if index == self.indicator && self.policy.mode() == LineMode::Output {
                continue;
            }

            let line = self.lines[index];
            let pressed = input::sample(io, &line);
            let Some(kind) = self.keys[index].update(pressed, now, &self.timing) else {
                continue;
            };
            if kind == EventKind::Press {
                new_press = true;
            }

            let event = KeyEvent {
                index,
                symbol: line.symbol,
                kind,
            };
            emit(transport, connected, event);
        }

        let delay_ms = if new_press {
            self.timing.post_press_delay_ms
        } else {
            self.timing.idle_delay_ms
        };
        Tick::Continue { delay_ms }
    }
}

// State has already advanced; only the send is gated on the connection.
fn emit<T: Transport>(transport: &mut T, connected: bool, event: KeyEvent) {
    if !connected {
        log::debug!("Key {} {} (not sent, disconnected)", event.symbol, event.kind.label());
        return;
    }

    log::info!("Key {} {}", event.symbol, event.kind.label());
    if let Err(e) = transport.send_symbol(event.symbol) {
        log::warn!("Failed to send key {} (line {}): {}", event.symbol, event.index, e);
    }
}

/// Cooperative polling loop. Only leaves through deep sleep.
pub fn run<const N: usize, L, T, P, C>(
    mut scanner: Scanner<N>,
    io: &mut L,
    transport: &mut T,
    power: &mut P,
    clock: &mut C,
) -> !
where
    L: LineIo,
    T: Transport,
    P: PowerControl,
    C: Clock,
{
    loop {
        let now = clock.now_ms();
        match scanner.tick(now, io, transport, power) {
            Tick::Continue { delay_ms } => clock.delay_ms(delay_ms),
            Tick::Suspended => power.suspend_indefinitely(),
        }
    }
}
